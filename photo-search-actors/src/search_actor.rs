use crate::AppMessageSender;
use actix::prelude::*;
use flickr_fetch::{FlickrPhoto, PhotoSize};
use photo_search_core::{
    AppMessage, CompletedSearch, Photo, PhotoImage, SearchError, SearchResults,
};
use std::{collections, sync};

pub struct SearchActor {
    pub tx_app_message: AppMessageSender,
    pub config: flickr_fetch::Configuration,
}

impl Actor for SearchActor {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct SearchMessage {
    pub term: String,
}

impl Handler<SearchMessage> for SearchActor {
    type Result = ();

    fn handle(&mut self, msg: SearchMessage, _ctx: &mut Self::Context) -> Self::Result {
        let tx_app_message = self.tx_app_message.clone();
        let config = self.config.clone();

        actix::spawn(async move {
            let result = search(&msg.term, &config).await;
            tx_app_message.send(AppMessage::SearchCompleted(result));
        });
    }
}

async fn search(
    term: &str,
    config: &flickr_fetch::Configuration,
) -> Result<CompletedSearch, SearchError> {
    let page = flickr_fetch::search_photos(term, config).await?;

    let thumbnails =
        futures::future::join_all(page.photo.iter().map(fetch_thumbnail)).await;

    let mut photos = Vec::with_capacity(page.photo.len());
    let mut loaded = collections::HashMap::new();
    for (flickr_photo, thumbnail) in page.photo.iter().zip(thumbnails) {
        let photo = Photo::from_flickr(flickr_photo, thumbnail.as_ref());
        if let Some(thumbnail) = thumbnail {
            loaded.insert(photo.id().clone(), thumbnail);
        }
        photos.push(photo);
    }

    tracing::info!(
        "Loaded {} of {} thumbnails for {:?}",
        loaded.len(),
        photos.len(),
        term
    );
    Ok(CompletedSearch::new(SearchResults::new(term, photos), loaded))
}

async fn fetch_thumbnail(photo: &FlickrPhoto) -> Option<PhotoImage> {
    let url = photo.image_url(PhotoSize::Thumbnail);
    match flickr_fetch::fetch_image(&url).await {
        Ok(image) => Some(sync::Arc::new(image.to_rgba8())),
        Err(e) => {
            tracing::error!("Could not load thumbnail for photo {}: {}", photo.id, e);
            None
        }
    }
}
