use image::{DynamicImage, GenericImageView};

/// Pixels with alpha at or below this value count as empty
pub const ALPHA_THRESHOLD: u8 = 10;

/// Returns true if the tile has at least one visible pixel.
///
/// Opaque color types are always visible unless the tile has no pixels.
pub fn has_visible_pixels(image: &DynamicImage) -> bool {
    if !image.color().has_alpha() {
        return image.width() > 0 && image.height() > 0;
    }

    image.pixels().any(|(_, _, pixel)| pixel[3] > ALPHA_THRESHOLD)
}
