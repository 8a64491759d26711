pub mod error;
pub mod gallery;
pub mod image_cache;
pub mod layout;
pub mod mode;
pub mod photo;

use std::path::PathBuf;

pub use error::{GalleryError, ImageLoadError, SearchError, ShareError};
pub use gallery::{Cell, Effect, Gallery, ImageKind, Refresh};
pub use image_cache::ImageCache;
pub use layout::{EdgeInsets, GridLayout, Size};
pub use mode::{ScreenMode, Selection};
pub use photo::{CompletedSearch, IndexPath, Photo, PhotoId, PhotoImage, SearchResults};

// --- AppMessage ---
#[derive(Debug)]
pub enum AppMessage {
    SearchCompleted(Result<CompletedSearch, SearchError>),
    FullImageLoaded {
        photo_id: PhotoId,
        position: IndexPath,
        result: Result<PhotoImage, ImageLoadError>,
    },
    ShareCompleted(Result<PathBuf, ShareError>),
}
