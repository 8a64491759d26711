#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const SECTION: EdgeInsets = EdgeInsets {
        top: 50.,
        left: 10.,
        bottom: 50.,
        right: 10.,
    };
}

pub const DEFAULT_ITEMS_PER_ROW: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub items_per_row: u32,
    pub section_insets: EdgeInsets,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            section_insets: EdgeInsets::SECTION,
        }
    }
}

impl GridLayout {
    pub fn new(items_per_row: u32) -> Self {
        Self {
            items_per_row: items_per_row.max(1),
            ..Default::default()
        }
    }

    /// Spacing between rows and between cells of a row.
    pub fn spacing(&self) -> f32 {
        self.section_insets.left
    }

    /// Side of a square, non-expanded cell.
    pub fn thumbnail_side(&self, available_width: f32) -> f32 {
        let per_row = self.items_per_row.max(1) as f32;
        let padding = self.section_insets.left * (per_row + 1.);
        ((available_width - padding) / per_row).floor().max(0.)
    }

    /// The area an expanded cell may occupy: the grid bounds minus section insets.
    pub fn expanded_bounds(&self, available: Size) -> Size {
        let insets = self.section_insets;
        Size::new(
            (available.width - insets.left - insets.right).max(0.),
            (available.height - insets.top - insets.bottom).max(0.),
        )
    }
}

/// Fits a `width` x `height` image into `bounds`: fill the width, then shrink
/// to the bounds' height if the result is too tall. Unknown dimensions yield
/// `bounds` unchanged.
pub fn fit_aspect(width: u32, height: u32, bounds: Size) -> Size {
    if width == 0 || height == 0 {
        return bounds;
    }
    let aspect_ratio = width as f32 / height as f32;
    let mut size = Size::new(bounds.width, bounds.width / aspect_ratio);
    if size.height > bounds.height {
        size.height = bounds.height;
        size.width = bounds.height * aspect_ratio;
    }
    size
}
