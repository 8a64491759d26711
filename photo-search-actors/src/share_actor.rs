use crate::{share, AppMessageSender};
use actix::prelude::*;
use photo_search_core::{AppMessage, PhotoImage, ShareError};
use std::path;

pub struct ShareActor {
    pub tx_app_message: AppMessageSender,
    pub share_dir: path::PathBuf,
}

impl Actor for ShareActor {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ShareMessage {
    pub images: Vec<PhotoImage>,
}

impl Handler<ShareMessage> for ShareActor {
    type Result = ();

    fn handle(&mut self, msg: ShareMessage, _ctx: &mut Self::Context) -> Self::Result {
        let tx_app_message = self.tx_app_message.clone();
        let share_dir = self.share_dir.clone();

        actix::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                share::export_images(&msg.images, &share_dir, chrono::Local::now())
            })
            .await
            .unwrap_or_else(|e| Err(ShareError::Io(std::io::Error::other(e))));

            if let Ok(folder) = &result {
                if let Err(e) = opener::open(folder) {
                    tracing::warn!("Could not open {}: {}", folder.display(), e);
                }
            }
            tx_app_message.send(AppMessage::ShareCompleted(result));
        });
    }
}
