//! The gallery screen: searches shown as sections of a photo grid, one photo
//! optionally expanded, photos selectable for sharing, and drag reordering.
//!
//! [`Gallery`] holds no UI handles. Each operation updates state and returns
//! the [`Effect`]s the shell has to carry out: start a search, fetch a full
//! image, redraw cells, scroll, or hand images to the share export.

use crate::{
    error::{GalleryError, ImageLoadError, SearchError},
    image_cache::ImageCache,
    layout::{fit_aspect, GridLayout, Size},
    mode::{ScreenMode, Selection},
    photo::{CompletedSearch, IndexPath, Photo, PhotoId, PhotoImage, SearchResults},
};
use std::collections;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refresh {
    All,
    Items(Vec<IndexPath>),
}

#[derive(Clone, Debug)]
pub enum Effect {
    Search(String),
    LoadFullImage { photo: Photo, position: IndexPath },
    Refresh(Refresh),
    ScrollTo(IndexPath),
    Share(Vec<PhotoImage>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Thumbnail,
    Full,
}

/// Everything needed to draw one cell.
#[derive(Clone, Debug)]
pub struct Cell {
    pub position: IndexPath,
    pub photo: Photo,
    pub image: Option<PhotoImage>,
    pub image_kind: ImageKind,
    pub expanded: bool,
    pub selected: bool,
}

#[derive(Default)]
pub struct Gallery {
    searches: Vec<SearchResults>,
    images: ImageCache,
    mode: ScreenMode,
    requested_full_images: collections::HashSet<PhotoId>,
    searches_in_flight: usize,
    share_in_flight: bool,
    layout: GridLayout,
}

impl Gallery {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn searches(&self) -> &[SearchResults] {
        &self.searches
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    pub fn mode(&self) -> &ScreenMode {
        &self.mode
    }

    pub fn expanded_position(&self) -> Option<IndexPath> {
        self.mode.expanded()
    }

    pub fn is_sharing(&self) -> bool {
        self.mode.is_sharing()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.mode.selection()
    }

    /// True while at least one search has not reported back.
    pub fn is_busy(&self) -> bool {
        self.searches_in_flight > 0
    }

    pub fn number_of_sections(&self) -> usize {
        self.searches.len()
    }

    pub fn number_of_items(&self, section: usize) -> usize {
        self.searches
            .get(section)
            .map_or(0, |search| search.photos.len())
    }

    pub fn total_photos(&self) -> usize {
        self.searches.iter().map(|search| search.photos.len()).sum()
    }

    pub fn photo(&self, position: IndexPath) -> Option<&Photo> {
        self.searches
            .get(position.section)
            .and_then(|search| search.photos.get(position.item))
    }

    // --- Searching ---

    /// Takes the entered text and clears the field without waiting for the
    /// result.
    pub fn submit_search(&mut self, input: &mut String) -> Vec<Effect> {
        let term = std::mem::take(input);
        self.searches_in_flight += 1;
        tracing::info!("Submitting search for {:?}", term);
        vec![Effect::Search(term)]
    }

    pub fn search_completed(&mut self, result: Result<CompletedSearch, SearchError>) -> Vec<Effect> {
        self.searches_in_flight = self.searches_in_flight.saturating_sub(1);

        let completed = match result {
            Ok(completed) => completed,
            Err(e) => {
                tracing::error!("Error searching: {}", e);
                return vec![];
            }
        };

        tracing::info!(
            "Found {} matching {:?}",
            completed.results.photos.len(),
            completed.results.term
        );
        for (photo_id, thumbnail) in completed.thumbnails {
            self.images.insert_thumbnail(photo_id, thumbnail);
        }
        self.searches.insert(0, completed.results);

        // Keep the same photo expanded now that every section moved down.
        if let ScreenMode::Expanded(position) = &mut self.mode {
            position.section += 1;
        }

        vec![Effect::Refresh(Refresh::All)]
    }

    // --- Cells ---

    pub fn cell(&self, position: IndexPath) -> Option<Cell> {
        let photo = self.photo(position)?;
        let expanded = self.mode.expanded() == Some(position);
        let selected = self
            .mode
            .selection()
            .is_some_and(|selection| selection.contains(photo.id()));

        let full_image = expanded
            .then(|| self.images.full_image(photo.id()))
            .flatten();
        let (image, image_kind) = match full_image {
            Some(image) => (Some(image.clone()), ImageKind::Full),
            None => (self.images.thumbnail(photo.id()).cloned(), ImageKind::Thumbnail),
        };

        Some(Cell {
            position,
            photo: photo.clone(),
            image,
            image_kind,
            expanded,
            selected,
        })
    }

    /// Like [`Gallery::cell`], and also starts the full-image fetch when the
    /// cell is the expanded one and its full image is not cached. Each photo's
    /// full image is requested at most once per session, so a failed fetch
    /// leaves the thumbnail in place.
    pub fn cell_for_item(&mut self, position: IndexPath) -> Option<(Cell, Option<Effect>)> {
        let cell = self.cell(position)?;
        let mut effect = None;
        if cell.expanded
            && cell.image_kind == ImageKind::Thumbnail
            && self.requested_full_images.insert(cell.photo.id().clone())
        {
            tracing::debug!("Loading full image for photo {}", cell.photo.id());
            effect = Some(Effect::LoadFullImage {
                photo: cell.photo.clone(),
                position,
            });
        }
        Some((cell, effect))
    }

    pub fn full_image_loaded(
        &mut self,
        photo_id: PhotoId,
        position: IndexPath,
        result: Result<PhotoImage, ImageLoadError>,
    ) -> Vec<Effect> {
        let image = match result {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("Could not load full image for photo {}: {}", photo_id, e);
                return vec![];
            }
        };
        self.images.insert_full_image(photo_id.clone(), image);

        if self.mode.expanded() == Some(position) {
            vec![Effect::Refresh(Refresh::Items(vec![position]))]
        } else {
            tracing::debug!(
                "Discarding full image for photo {} requested at {}",
                photo_id,
                position
            );
            vec![]
        }
    }

    pub fn item_size(&self, position: IndexPath, available: Size) -> Size {
        match (self.mode.expanded(), self.photo(position)) {
            (Some(expanded), Some(photo)) if expanded == position => fit_aspect(
                photo.width(),
                photo.height(),
                self.layout.expanded_bounds(available),
            ),
            _ => {
                let side = self.layout.thumbnail_side(available.width);
                Size::new(side, side)
            }
        }
    }

    // --- Expanding and selecting ---

    /// A tap toggles the expanded photo, or while sharing toggles the photo's
    /// membership in the selection.
    pub fn tap(&mut self, position: IndexPath) -> Vec<Effect> {
        let Some(photo_id) = self.photo(position).map(|photo| photo.id().clone()) else {
            return vec![];
        };

        if let ScreenMode::Sharing(selection) = &mut self.mode {
            selection.toggle(&photo_id);
            return vec![Effect::Refresh(Refresh::Items(vec![position]))];
        }

        if self.mode.expanded() == Some(position) {
            self.transition(ScreenMode::Browsing)
        } else {
            self.transition(ScreenMode::Expanded(position))
        }
    }

    pub fn selection_label(&self) -> Option<String> {
        self.mode.selection().map(|selection| match selection.len() {
            1 => String::from("1 photo selected"),
            n => format!("{} photos selected", n),
        })
    }

    // --- Sharing ---

    /// An export has been handed off and [`Gallery::share_completed`] has
    /// not been called yet.
    pub fn is_share_in_flight(&self) -> bool {
        self.share_in_flight
    }

    /// Enters sharing, leaves it when nothing is selected, or hands the
    /// selected thumbnails to the share export. Only one export runs per
    /// sharing session.
    pub fn share_tapped(&mut self) -> Vec<Effect> {
        if self.searches.is_empty() || self.share_in_flight {
            return vec![];
        }

        let Some(selection) = self.mode.selection() else {
            return self.transition(ScreenMode::Sharing(Selection::default()));
        };
        if selection.is_empty() {
            return self.transition(ScreenMode::Browsing);
        }

        let images: Vec<PhotoImage> = selection
            .iter()
            .filter_map(|photo_id| self.images.thumbnail(photo_id).cloned())
            .collect();
        if images.is_empty() {
            tracing::warn!(
                "None of the {} selected photos have a thumbnail, nothing to share",
                selection.len()
            );
            return self.transition(ScreenMode::Browsing);
        }
        self.share_in_flight = true;
        vec![Effect::Share(images)]
    }

    /// Ends sharing whatever the user did with the share export.
    pub fn share_completed(&mut self) -> Vec<Effect> {
        self.share_in_flight = false;
        if !self.mode.is_sharing() {
            return vec![];
        }
        self.transition(ScreenMode::Browsing)
    }

    // --- Reordering ---

    /// The image offered while dragging the cell. Photos without a thumbnail
    /// cannot be dragged.
    pub fn drag_payload(&self, position: IndexPath) -> Option<PhotoImage> {
        let photo = self.photo(position)?;
        self.images.thumbnail(photo.id()).cloned()
    }

    /// Removes the photo at `from`, then inserts it at `to`. Within one
    /// section `to.item` therefore indexes the list after the removal:
    /// moving item 0 of `[p1, p2, p3]` to item 2 gives `[p2, p3, p1]`.
    pub fn move_item(
        &mut self,
        from: IndexPath,
        to: IndexPath,
    ) -> Result<Vec<Effect>, GalleryError> {
        if self.photo(from).is_none() {
            return Err(GalleryError::InvalidPosition(from));
        }
        let destination_len = match self.searches.get(to.section) {
            Some(search) if from.section == to.section => search.photos.len() - 1,
            Some(search) => search.photos.len(),
            None => return Err(GalleryError::InvalidDestination(to)),
        };
        if to.item > destination_len {
            return Err(GalleryError::InvalidDestination(to));
        }

        let photo = self.searches[from.section].photos.remove(from.item);
        tracing::debug!("Moving photo {} from {} to {}", photo.id(), from, to);
        self.searches[to.section].photos.insert(to.item, photo);

        let mut positions = vec![from];
        if to != from {
            positions.push(to);
        }
        Ok(vec![Effect::Refresh(Refresh::Items(positions))])
    }

    // --- Transitions ---

    fn transition(&mut self, next: ScreenMode) -> Vec<Effect> {
        let previous = std::mem::replace(&mut self.mode, next);
        let mut effects = Vec::new();

        match (&previous, &self.mode) {
            (ScreenMode::Sharing(_), ScreenMode::Browsing) => {
                effects.push(Effect::Refresh(Refresh::All));
            }
            (previous, next) => {
                let mut positions: Vec<IndexPath> = previous.expanded().into_iter().collect();
                if let Some(position) = next.expanded() {
                    if !positions.contains(&position) {
                        positions.push(position);
                    }
                }
                if !positions.is_empty() {
                    effects.push(Effect::Refresh(Refresh::Items(positions)));
                }
                if let Some(position) = next.expanded() {
                    effects.push(Effect::ScrollTo(position));
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync;

    fn photo(id: &str) -> Photo {
        Photo::new(
            PhotoId::new(id),
            format!("Photo {id}"),
            400,
            200,
            format!("https://example.com/{id}_m.jpg"),
            format!("https://example.com/{id}_b.jpg"),
        )
    }

    fn image() -> PhotoImage {
        sync::Arc::new(image::RgbaImage::new(2, 2))
    }

    fn completed(term: &str, ids: &[&str]) -> CompletedSearch {
        let photos: Vec<Photo> = ids.iter().map(|id| photo(id)).collect();
        let thumbnails = photos
            .iter()
            .map(|photo| (photo.id().clone(), image()))
            .collect();
        CompletedSearch::new(SearchResults::new(term, photos), thumbnails)
    }

    fn search_error() -> SearchError {
        SearchError::Fetch(flickr_fetch::FetchError::Api {
            code: 105,
            message: "Service currently unavailable".into(),
        })
    }

    fn ids(gallery: &Gallery, section: usize) -> Vec<&str> {
        gallery.searches()[section]
            .photos
            .iter()
            .map(|photo| photo.id().as_str())
            .collect()
    }

    fn gallery_with(term: &str, photo_ids: &[&str]) -> Gallery {
        let mut gallery = Gallery::default();
        let mut input = term.to_string();
        gallery.submit_search(&mut input);
        gallery.search_completed(Ok(completed(term, photo_ids)));
        gallery
    }

    fn refreshed(effects: &[Effect]) -> Option<&Refresh> {
        effects.iter().find_map(|effect| match effect {
            Effect::Refresh(refresh) => Some(refresh),
            _ => None,
        })
    }

    #[test]
    fn test_submit_search_clears_input_and_marks_busy() {
        let mut gallery = Gallery::default();
        let mut input = String::from("cats");
        let effects = gallery.submit_search(&mut input);

        assert!(input.is_empty());
        assert!(gallery.is_busy());
        assert!(matches!(effects.as_slice(), [Effect::Search(term)] if term == "cats"));
    }

    #[test]
    fn test_successful_searches_are_prepended() {
        let mut gallery = Gallery::default();
        for (term, photo_ids) in [("cats", ["c1", "c2"]), ("dogs", ["d1", "d2"]), ("owls", ["o1", "o2"])] {
            let mut input = term.to_string();
            gallery.submit_search(&mut input);
            let effects = gallery.search_completed(Ok(completed(term, &photo_ids)));
            assert_eq!(refreshed(&effects), Some(&Refresh::All));
        }

        assert_eq!(gallery.number_of_sections(), 3);
        let terms: Vec<&str> = gallery.searches().iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["owls", "dogs", "cats"]);
        assert!(!gallery.is_busy());
        assert_eq!(gallery.number_of_items(0), 2);
        assert!(gallery.images().thumbnail(&PhotoId::new("d1")).is_some());
    }

    #[test]
    fn test_failed_search_changes_nothing_but_busy_state() {
        let mut gallery = gallery_with("cats", &["p1"]);
        let mut input = String::from("dogs");
        gallery.submit_search(&mut input);
        assert!(gallery.is_busy());

        let effects = gallery.search_completed(Err(search_error()));

        assert!(effects.is_empty());
        assert!(!gallery.is_busy());
        assert_eq!(gallery.number_of_sections(), 1);
    }

    #[test]
    fn test_tap_twice_collapses() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);
        let p2 = IndexPath::new(0, 1);

        let effects = gallery.tap(p2);
        assert_eq!(gallery.expanded_position(), Some(p2));
        assert_eq!(refreshed(&effects), Some(&Refresh::Items(vec![p2])));
        assert!(matches!(effects.last(), Some(Effect::ScrollTo(position)) if *position == p2));

        let effects = gallery.tap(p2);
        assert_eq!(gallery.expanded_position(), None);
        assert_eq!(gallery.mode(), &ScreenMode::Browsing);
        assert_eq!(refreshed(&effects), Some(&Refresh::Items(vec![p2])));
        assert!(!effects.iter().any(|effect| matches!(effect, Effect::ScrollTo(_))));
    }

    #[test]
    fn test_tap_other_cell_moves_expansion() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);
        let (p1, p3) = (IndexPath::new(0, 0), IndexPath::new(0, 2));

        gallery.tap(p1);
        let effects = gallery.tap(p3);

        assert_eq!(gallery.expanded_position(), Some(p3));
        assert_eq!(refreshed(&effects), Some(&Refresh::Items(vec![p1, p3])));
        assert!(gallery.cell(p3).unwrap().expanded);
        assert!(!gallery.cell(p1).unwrap().expanded);
    }

    #[test]
    fn test_tap_out_of_range_is_ignored() {
        let mut gallery = gallery_with("cats", &["p1"]);
        assert!(gallery.tap(IndexPath::new(0, 5)).is_empty());
        assert!(gallery.tap(IndexPath::new(3, 0)).is_empty());
        assert_eq!(gallery.mode(), &ScreenMode::Browsing);
    }

    #[test]
    fn test_expanded_photo_follows_new_search() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        gallery.tap(IndexPath::new(0, 1));

        let mut input = String::from("dogs");
        gallery.submit_search(&mut input);
        gallery.search_completed(Ok(completed("dogs", &["d1"])));

        let expanded = gallery.expanded_position().unwrap();
        assert_eq!(expanded, IndexPath::new(1, 1));
        assert_eq!(gallery.photo(expanded).unwrap().id().as_str(), "p2");
    }

    #[test]
    fn test_expanded_cell_requests_full_image_once() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        let position = IndexPath::new(0, 1);

        let (cell, effect) = gallery.cell_for_item(position).unwrap();
        assert!(!cell.expanded);
        assert!(effect.is_none());

        gallery.tap(position);
        let (cell, effect) = gallery.cell_for_item(position).unwrap();
        assert_eq!(cell.image_kind, ImageKind::Thumbnail);
        assert!(cell.image.is_some());
        assert!(matches!(
            effect,
            Some(Effect::LoadFullImage { ref photo, position: p }) if photo.id().as_str() == "p2" && p == position
        ));

        let (_, effect) = gallery.cell_for_item(position).unwrap();
        assert!(effect.is_none());
    }

    #[test]
    fn test_full_image_shown_when_position_still_expanded() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        let position = IndexPath::new(0, 0);
        gallery.tap(position);
        gallery.cell_for_item(position);

        let effects = gallery.full_image_loaded(PhotoId::new("p1"), position, Ok(image()));

        assert_eq!(refreshed(&effects), Some(&Refresh::Items(vec![position])));
        let (cell, effect) = gallery.cell_for_item(position).unwrap();
        assert_eq!(cell.image_kind, ImageKind::Full);
        assert!(effect.is_none());
    }

    #[test]
    fn test_stale_full_image_is_cached_but_not_displayed() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        let (p1, p2) = (IndexPath::new(0, 0), IndexPath::new(0, 1));
        gallery.tap(p1);
        gallery.cell_for_item(p1);
        gallery.tap(p2);

        let effects = gallery.full_image_loaded(PhotoId::new("p1"), p1, Ok(image()));

        assert!(effects.is_empty());
        assert!(gallery.images().has_full_image(&PhotoId::new("p1")));
        assert_eq!(gallery.cell(p1).unwrap().image_kind, ImageKind::Thumbnail);
        assert_eq!(gallery.cell(p2).unwrap().image_kind, ImageKind::Thumbnail);
    }

    #[test]
    fn test_failed_full_image_keeps_thumbnail() {
        let mut gallery = gallery_with("cats", &["p1"]);
        let position = IndexPath::new(0, 0);
        gallery.tap(position);
        gallery.cell_for_item(position);

        let effects = gallery.full_image_loaded(
            PhotoId::new("p1"),
            position,
            Err(ImageLoadError::Unavailable("mailbox closed".into())),
        );

        assert!(effects.is_empty());
        let (cell, effect) = gallery.cell_for_item(position).unwrap();
        assert_eq!(cell.image_kind, ImageKind::Thumbnail);
        assert!(cell.image.is_some());
        assert!(effect.is_none());
    }

    #[test]
    fn test_item_size() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        let available = Size::new(375., 700.);
        let position = IndexPath::new(0, 0);

        assert_eq!(gallery.item_size(position, available), Size::new(111., 111.));

        gallery.tap(position);
        // 400x200 photo fitted into 355x600.
        assert_eq!(gallery.item_size(position, available), Size::new(355., 177.5));
        assert_eq!(
            gallery.item_size(IndexPath::new(0, 1), available),
            Size::new(111., 111.)
        );
    }

    #[test]
    fn test_entering_sharing_clears_expansion_and_selection() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        let position = IndexPath::new(0, 1);
        gallery.tap(position);

        let effects = gallery.share_tapped();

        assert!(gallery.is_sharing());
        assert_eq!(gallery.expanded_position(), None);
        assert!(gallery.selection().unwrap().is_empty());
        assert_eq!(refreshed(&effects), Some(&Refresh::Items(vec![position])));
        assert_eq!(gallery.selection_label().as_deref(), Some("0 photos selected"));
    }

    #[test]
    fn test_share_does_nothing_without_searches() {
        let mut gallery = Gallery::default();
        assert!(gallery.share_tapped().is_empty());
        assert!(!gallery.is_sharing());
    }

    #[test]
    fn test_share_with_empty_selection_toggles_off() {
        let mut gallery = gallery_with("cats", &["p1"]);
        gallery.share_tapped();
        let effects = gallery.share_tapped();

        assert!(!gallery.is_sharing());
        assert_eq!(gallery.selection_label(), None);
        assert_eq!(refreshed(&effects), Some(&Refresh::All));
    }

    #[test]
    fn test_tap_while_sharing_selects_instead_of_expanding() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        gallery.share_tapped();
        let position = IndexPath::new(0, 0);

        gallery.tap(position);
        assert_eq!(gallery.expanded_position(), None);
        assert!(gallery.cell(position).unwrap().selected);
        assert_eq!(gallery.selection_label().as_deref(), Some("1 photo selected"));

        gallery.tap(position);
        assert!(!gallery.cell(position).unwrap().selected);
    }

    #[test]
    fn test_share_two_photos_in_selection_order() {
        let mut gallery = Gallery::default();
        let mut input = String::from("cats");
        gallery.submit_search(&mut input);
        let p1 = photo("p1");
        let p2 = photo("p2");
        let p3 = photo("p3");
        let first: PhotoImage = sync::Arc::new(image::RgbaImage::new(1, 1));
        let third: PhotoImage = sync::Arc::new(image::RgbaImage::new(3, 3));
        let thumbnails = [
            (p1.id().clone(), first.clone()),
            (p3.id().clone(), third.clone()),
        ]
        .into_iter()
        .collect();
        gallery.search_completed(Ok(CompletedSearch::new(
            SearchResults::new("cats", vec![p1, p2, p3]),
            thumbnails,
        )));

        gallery.share_tapped();
        gallery.tap(IndexPath::new(0, 2));
        gallery.tap(IndexPath::new(0, 0));
        let effects = gallery.share_tapped();

        match effects.as_slice() {
            [Effect::Share(images)] => {
                assert_eq!(images.len(), 2);
                assert!(sync::Arc::ptr_eq(&images[0], &third));
                assert!(sync::Arc::ptr_eq(&images[1], &first));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
        assert!(gallery.is_sharing());

        gallery.share_completed();
        assert!(!gallery.is_sharing());
        assert!(gallery.selection().is_none());
    }

    #[test]
    fn test_share_skips_photos_without_thumbnail() {
        let mut gallery = Gallery::default();
        let mut input = String::from("cats");
        gallery.submit_search(&mut input);
        gallery.search_completed(Ok(CompletedSearch::new(
            SearchResults::new("cats", vec![photo("p1")]),
            Default::default(),
        )));

        gallery.share_tapped();
        gallery.tap(IndexPath::new(0, 0));

        let effects = gallery.share_tapped();
        assert!(!effects.iter().any(|effect| matches!(effect, Effect::Share(_))));
        assert_eq!(refreshed(&effects), Some(&Refresh::All));
        assert!(!gallery.is_sharing());
        assert!(!gallery.is_share_in_flight());
    }

    #[test]
    fn test_share_runs_once_until_completed() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        gallery.share_tapped();
        gallery.tap(IndexPath::new(0, 0));

        let shares = |effects: Vec<Effect>| {
            effects
                .iter()
                .filter(|effect| matches!(effect, Effect::Share(_)))
                .count()
        };
        assert_eq!(shares(gallery.share_tapped()), 1);
        assert!(gallery.is_share_in_flight());
        assert_eq!(shares(gallery.share_tapped()), 0);
        assert!(gallery.is_sharing());

        gallery.share_completed();
        assert!(!gallery.is_share_in_flight());
        assert!(!gallery.is_sharing());

        // A new session can share again.
        gallery.share_tapped();
        gallery.tap(IndexPath::new(0, 1));
        assert_eq!(shares(gallery.share_tapped()), 1);
    }

    #[test]
    fn test_selection_label_pluralizes() {
        let mut gallery = gallery_with("cats", &["p1", "p2"]);
        gallery.share_tapped();
        gallery.tap(IndexPath::new(0, 0));
        assert_eq!(gallery.selection_label().as_deref(), Some("1 photo selected"));
        gallery.tap(IndexPath::new(0, 1));
        assert_eq!(gallery.selection_label().as_deref(), Some("2 photos selected"));
    }

    #[test]
    fn test_drag_payload_requires_thumbnail() {
        let mut gallery = Gallery::default();
        let mut input = String::from("cats");
        gallery.submit_search(&mut input);
        let p1 = photo("p1");
        let thumbnails = [(p1.id().clone(), image())].into_iter().collect();
        gallery.search_completed(Ok(CompletedSearch::new(
            SearchResults::new("cats", vec![p1, photo("p2")]),
            thumbnails,
        )));

        assert!(gallery.drag_payload(IndexPath::new(0, 0)).is_some());
        assert!(gallery.drag_payload(IndexPath::new(0, 1)).is_none());
        assert!(gallery.drag_payload(IndexPath::new(0, 9)).is_none());
    }

    #[test]
    fn test_move_first_to_last_removes_before_inserting() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);

        let effects = gallery
            .move_item(IndexPath::new(0, 0), IndexPath::new(0, 2))
            .unwrap();

        assert_eq!(ids(&gallery, 0), vec!["p2", "p3", "p1"]);
        assert_eq!(
            refreshed(&effects),
            Some(&Refresh::Items(vec![IndexPath::new(0, 0), IndexPath::new(0, 2)]))
        );
    }

    #[test]
    fn test_move_last_to_first() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);
        gallery
            .move_item(IndexPath::new(0, 2), IndexPath::new(0, 0))
            .unwrap();
        assert_eq!(ids(&gallery, 0), vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_move_onto_itself_is_a_no_op() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);
        gallery
            .move_item(IndexPath::new(0, 1), IndexPath::new(0, 1))
            .unwrap();
        assert_eq!(ids(&gallery, 0), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_move_across_sections_preserves_count() {
        let mut gallery = gallery_with("cats", &["c1", "c2", "c3"]);
        let mut input = String::from("dogs");
        gallery.submit_search(&mut input);
        gallery.search_completed(Ok(completed("dogs", &["d1", "d2"])));
        let total = gallery.total_photos();

        // dogs is section 0, cats is section 1.
        gallery
            .move_item(IndexPath::new(1, 0), IndexPath::new(0, 1))
            .unwrap();

        assert_eq!(gallery.total_photos(), total);
        assert_eq!(ids(&gallery, 0), vec!["d1", "c1", "d2"]);
        assert_eq!(ids(&gallery, 1), vec!["c2", "c3"]);
        assert_eq!(
            gallery.photo(IndexPath::new(0, 1)).unwrap().id().as_str(),
            "c1"
        );

        // Appending past the last item of another section is allowed.
        gallery
            .move_item(IndexPath::new(0, 0), IndexPath::new(1, 2))
            .unwrap();
        assert_eq!(ids(&gallery, 1), vec!["c2", "c3", "d1"]);
        assert_eq!(gallery.total_photos(), total);
    }

    #[test]
    fn test_move_rejects_positions_outside_the_grid() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);

        assert!(matches!(
            gallery.move_item(IndexPath::new(0, 3), IndexPath::new(0, 0)),
            Err(GalleryError::InvalidPosition(_))
        ));
        assert!(matches!(
            gallery.move_item(IndexPath::new(0, 0), IndexPath::new(0, 3)),
            Err(GalleryError::InvalidDestination(_))
        ));
        assert!(matches!(
            gallery.move_item(IndexPath::new(0, 0), IndexPath::new(1, 0)),
            Err(GalleryError::InvalidDestination(_))
        ));
        assert_eq!(ids(&gallery, 0), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_move_keeps_screen_mode() {
        let mut gallery = gallery_with("cats", &["p1", "p2", "p3"]);
        gallery.tap(IndexPath::new(0, 2));
        gallery
            .move_item(IndexPath::new(0, 0), IndexPath::new(0, 1))
            .unwrap();
        assert_eq!(gallery.expanded_position(), Some(IndexPath::new(0, 2)));
    }
}
