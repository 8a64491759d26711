use crate::photo::{PhotoId, PhotoImage};
use std::collections;

/// Thumbnails and full-size images keyed by photo. Entries are written once
/// and never replaced or evicted for the lifetime of the session.
#[derive(Default, Debug)]
pub struct ImageCache {
    thumbnails: collections::HashMap<PhotoId, PhotoImage>,
    full_images: collections::HashMap<PhotoId, PhotoImage>,
}

impl ImageCache {
    /// Returns `false` when a thumbnail was already cached for `photo_id`.
    pub fn insert_thumbnail(&mut self, photo_id: PhotoId, image: PhotoImage) -> bool {
        insert_once(&mut self.thumbnails, photo_id, image)
    }

    /// Returns `false` when a full image was already cached for `photo_id`.
    pub fn insert_full_image(&mut self, photo_id: PhotoId, image: PhotoImage) -> bool {
        insert_once(&mut self.full_images, photo_id, image)
    }

    pub fn thumbnail(&self, photo_id: &PhotoId) -> Option<&PhotoImage> {
        self.thumbnails.get(photo_id)
    }

    pub fn full_image(&self, photo_id: &PhotoId) -> Option<&PhotoImage> {
        self.full_images.get(photo_id)
    }

    pub fn has_full_image(&self, photo_id: &PhotoId) -> bool {
        self.full_images.contains_key(photo_id)
    }
}

fn insert_once(
    map: &mut collections::HashMap<PhotoId, PhotoImage>,
    photo_id: PhotoId,
    image: PhotoImage,
) -> bool {
    match map.entry(photo_id) {
        collections::hash_map::Entry::Occupied(_) => false,
        collections::hash_map::Entry::Vacant(entry) => {
            entry.insert(image);
            true
        }
    }
}
