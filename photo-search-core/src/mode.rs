use crate::photo::{IndexPath, PhotoId};

/// What the gallery screen is doing. Expanding a photo and selecting photos
/// for sharing cannot happen at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenMode {
    #[default]
    Browsing,
    Expanded(IndexPath),
    Sharing(Selection),
}

impl ScreenMode {
    pub fn expanded(&self) -> Option<IndexPath> {
        match self {
            ScreenMode::Expanded(position) => Some(*position),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            ScreenMode::Sharing(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn is_sharing(&self) -> bool {
        matches!(self, ScreenMode::Sharing(_))
    }
}

/// Photos picked for sharing, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Vec<PhotoId>);

impl Selection {
    /// Adds `photo_id`, or removes it if it was already selected. Returns
    /// whether the photo is selected afterwards.
    pub fn toggle(&mut self, photo_id: &PhotoId) -> bool {
        match self.0.iter().position(|id| id == photo_id) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(photo_id.clone());
                true
            }
        }
    }

    pub fn contains(&self, photo_id: &PhotoId) -> bool {
        self.0.contains(photo_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoId> {
        self.0.iter()
    }
}
