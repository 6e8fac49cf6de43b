mod layout;
mod occupancy;
mod slicer;

pub use layout::{CropRect, SheetLayout};
pub use occupancy::{ALPHA_THRESHOLD, has_visible_pixels};
pub use slicer::{FrameTile, crop_frame};
