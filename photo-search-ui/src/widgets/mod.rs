mod photo_grid;

pub use photo_grid::PhotoGrid;
