use actix::prelude::*;
use photo_search_actors::{AppMessageSender, ImageLoaderActor, SearchActor, ShareActor};
use photo_search_config::Config;
use photo_search_core::{AppMessage, Gallery, GridLayout};
use photo_search_ui::Ui;
use std::error;
use tracing_subscriber::EnvFilter;

mod app;
mod dispatch;

#[actix::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::load()?;
    cfg.validate()?;
    let api_key = cfg.require_api_key()?;
    let request_config = flickr_fetch::get_flickr_request_config(&api_key, cfg.per_page);
    let share_dir = cfg.share_dir();
    let layout = GridLayout::new(cfg.items_per_row);

    let (tx_app_message, rx_app_message) = tokio::sync::mpsc::unbounded_channel::<AppMessage>();

    eframe::run_native(
        "Photo Search",
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            let tx_app_message = AppMessageSender::new(tx_app_message, cc.egui_ctx.clone());

            let search_addr = SearchActor::start_in_arbiter(&Arbiter::new().handle(), {
                let tx_app_message = tx_app_message.clone();
                |_ctx| SearchActor {
                    tx_app_message,
                    config: request_config,
                }
            });

            let image_loader_addr = ImageLoaderActor::start_in_arbiter(&Arbiter::new().handle(), {
                let tx_app_message = tx_app_message.clone();
                |_ctx| ImageLoaderActor { tx_app_message }
            });

            let share_addr = ShareActor::start_in_arbiter(&Arbiter::new().handle(), {
                |_ctx| ShareActor {
                    tx_app_message,
                    share_dir,
                }
            });

            Ok(Box::new(app::App {
                rx_app_message,
                actors: dispatch::Actors {
                    search_addr,
                    image_loader_addr,
                    share_addr,
                },
                gallery: Gallery::new(layout),
                ui: Ui::new(),
            }))
        }),
    )?;

    Ok(())
}
