use crate::AppMessageSender;
use actix::prelude::*;
use photo_search_core::{AppMessage, ImageLoadError, IndexPath, Photo, PhotoImage};
use std::sync;

pub struct ImageLoaderActor {
    pub tx_app_message: AppMessageSender,
}

impl Actor for ImageLoaderActor {
    type Context = Context<Self>;
}

/// Fetches the large rendition of `photo`. `position` is the cell that asked
/// for it and travels back with the result.
#[derive(Message)]
#[rtype(result = "()")]
pub struct LoadFullImageMessage {
    pub photo: Photo,
    pub position: IndexPath,
}

impl Handler<LoadFullImageMessage> for ImageLoaderActor {
    type Result = ();

    fn handle(&mut self, msg: LoadFullImageMessage, _ctx: &mut Self::Context) -> Self::Result {
        let tx_app_message = self.tx_app_message.clone();

        actix::spawn(async move {
            tracing::info!("Fetching full image for photo {}", msg.photo.id());
            let result = load_full_image(&msg.photo).await;
            tx_app_message.send(AppMessage::FullImageLoaded {
                photo_id: msg.photo.id().clone(),
                position: msg.position,
                result,
            });
        });
    }
}

async fn load_full_image(photo: &Photo) -> Result<PhotoImage, ImageLoadError> {
    let image = flickr_fetch::fetch_image(photo.full_image_url()).await?;
    Ok(sync::Arc::new(image.to_rgba8()))
}
