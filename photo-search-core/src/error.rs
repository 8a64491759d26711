use crate::photo::IndexPath;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] flickr_fetch::FetchError),
    #[error("Search service is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error(transparent)]
    Fetch(#[from] flickr_fetch::FetchError),
    #[error("Image loader is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("No photo at section {}, item {}", .0.section, .0.item)]
    InvalidPosition(IndexPath),
    #[error("Cannot drop at section {}, item {}", .0.section, .0.item)]
    InvalidDestination(IndexPath),
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Nothing to share")]
    NothingToShare,
    #[error("Could not write shared photos: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not encode shared photo: {0}")]
    Encode(#[from] image::ImageError),
}
