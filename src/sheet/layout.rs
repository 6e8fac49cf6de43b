use crate::catalog::{Action, Direction};

/// Pixel rectangle inside a sprite sheet. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// Tile at grid position (`row`, `column`) for square tiles of `size` pixels
    pub fn for_cell(row: u32, column: u32, size: u32) -> Self {
        let left = column * size;
        let top = row * size;
        Self {
            left,
            top,
            right: left + size,
            bottom: top + size,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Check if the rectangle lies entirely inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }
}

/// Grid layout of one action's sprite sheet: a row per direction, a column per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
    pub frame_size: u32,
}

impl SheetLayout {
    pub fn for_action(action: Action, frame_size: u32) -> Self {
        Self {
            columns: action.frame_count(),
            rows: Direction::COUNT,
            frame_size,
        }
    }

    pub fn expected_width(&self) -> u32 {
        self.columns * self.frame_size
    }

    pub fn expected_height(&self) -> u32 {
        self.rows * self.frame_size
    }

    /// True when a sheet of this size holds exactly the expected grid
    pub fn matches(&self, width: u32, height: u32) -> bool {
        width == self.expected_width() && height == self.expected_height()
    }

    /// Crop rectangle of `frame` in the row belonging to `direction`
    pub fn frame_rect(&self, direction: Direction, frame: u32) -> CropRect {
        CropRect::for_cell(direction.row(), frame, self.frame_size)
    }
}
