use flickr_fetch::{FlickrPhoto, PhotoSize};
use std::{collections, fmt, sync};

/// Decoded RGBA pixels shared between the cache, the renderer and the share export.
pub type PhotoImage = sync::Arc<image::RgbaImage>;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        PhotoId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Addresses one cell of the grid: `section` is the search, `item` the photo within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.item)
    }
}

/// One search result. Identity and dimensions are fixed at creation; images
/// are kept in [`crate::ImageCache`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    id: PhotoId,
    title: String,
    width: u32,
    height: u32,
    thumbnail_url: String,
    full_image_url: String,
}

impl Photo {
    pub fn new(
        id: PhotoId,
        title: impl Into<String>,
        width: u32,
        height: u32,
        thumbnail_url: impl Into<String>,
        full_image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            width,
            height,
            thumbnail_url: thumbnail_url.into(),
            full_image_url: full_image_url.into(),
        }
    }

    /// Builds a record from a search hit. Dimensions come from the service
    /// when it reports them, otherwise from the decoded thumbnail.
    pub fn from_flickr(photo: &FlickrPhoto, thumbnail: Option<&PhotoImage>) -> Self {
        let (width, height) = photo
            .thumbnail_dimensions()
            .or_else(|| thumbnail.map(|image| image.dimensions()))
            .unwrap_or((0, 0));
        Self {
            id: PhotoId::new(photo.id.clone()),
            title: photo.title.clone(),
            width,
            height,
            thumbnail_url: photo.image_url(PhotoSize::Thumbnail),
            full_image_url: photo.image_url(PhotoSize::Large),
        }
    }

    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn full_image_url(&self) -> &str {
        &self.full_image_url
    }
}

/// The photos returned for one search term, in relevance order until the user
/// reorders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub photos: Vec<Photo>,
}

impl SearchResults {
    pub fn new(term: impl Into<String>, photos: Vec<Photo>) -> Self {
        Self {
            term: term.into(),
            photos,
        }
    }
}

/// A finished search together with the thumbnails that were downloaded for it.
#[derive(Clone, Debug)]
pub struct CompletedSearch {
    pub results: SearchResults,
    pub thumbnails: collections::HashMap<PhotoId, PhotoImage>,
}

impl CompletedSearch {
    pub fn new(
        results: SearchResults,
        thumbnails: collections::HashMap<PhotoId, PhotoImage>,
    ) -> Self {
        Self {
            results,
            thumbnails,
        }
    }
}
