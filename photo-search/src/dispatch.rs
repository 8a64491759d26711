use actix::Addr;
use photo_search_actors::{
    ImageLoaderActor, LoadFullImageMessage, SearchActor, SearchMessage, ShareActor, ShareMessage,
};
use photo_search_core::{
    Effect, Gallery, ImageLoadError, IndexPath, Photo, PhotoImage, SearchError,
};
use std::collections;

/// Work handed off the UI thread. An `Err` means the request never reached
/// its worker, so no reply will come.
pub(crate) trait Requests {
    fn search(&self, term: String) -> Result<(), String>;
    fn load_full_image(&self, photo: Photo, position: IndexPath) -> Result<(), String>;
    fn share(&self, images: Vec<PhotoImage>) -> Result<(), String>;
}

pub(crate) struct Actors {
    pub search_addr: Addr<SearchActor>,
    pub image_loader_addr: Addr<ImageLoaderActor>,
    pub share_addr: Addr<ShareActor>,
}

impl Requests for Actors {
    fn search(&self, term: String) -> Result<(), String> {
        self.search_addr
            .try_send(SearchMessage { term })
            .map_err(|e| e.to_string())
    }

    fn load_full_image(&self, photo: Photo, position: IndexPath) -> Result<(), String> {
        self.image_loader_addr
            .try_send(LoadFullImageMessage { photo, position })
            .map_err(|e| e.to_string())
    }

    fn share(&self, images: Vec<PhotoImage>) -> Result<(), String> {
        self.share_addr
            .try_send(ShareMessage { images })
            .map_err(|e| e.to_string())
    }
}

/// What the UI has to do after a batch of effects was carried out.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct UiWork {
    pub repaint: bool,
    pub scroll_to: Option<IndexPath>,
}

/// Carries out effects. A request that cannot reach its worker is reported
/// back to the gallery as a failure, which may produce more effects.
pub(crate) fn dispatch(
    gallery: &mut Gallery,
    requests: &impl Requests,
    effects: Vec<Effect>,
) -> UiWork {
    let mut work = UiWork::default();
    let mut queue = collections::VecDeque::from(effects);
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::Search(term) => {
                if let Err(e) = requests.search(term) {
                    queue.extend(gallery.search_completed(Err(SearchError::Unavailable(e))));
                }
            }
            Effect::LoadFullImage { photo, position } => {
                let photo_id = photo.id().clone();
                if let Err(e) = requests.load_full_image(photo, position) {
                    queue.extend(gallery.full_image_loaded(
                        photo_id,
                        position,
                        Err(ImageLoadError::Unavailable(e)),
                    ));
                }
            }
            Effect::Share(images) => {
                tracing::info!("Sharing {} photos", images.len());
                if let Err(e) = requests.share(images) {
                    tracing::error!("Could not start share export: {}", e);
                    queue.extend(gallery.share_completed());
                }
            }
            Effect::ScrollTo(position) => work.scroll_to = Some(position),
            Effect::Refresh(_) => work.repaint = true,
        }
    }
    work
}
