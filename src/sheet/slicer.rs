use image::{DynamicImage, ImageBuffer, Pixel, imageops};

use super::CropRect;

/// A single tile cut out of a sprite sheet
#[derive(Debug, Clone)]
pub struct FrameTile {
    /// Tile pixels, same color type as the sheet
    pub image: DynamicImage,
    /// True if part of the crop fell outside the sheet and was zero-filled
    pub padded: bool,
}

/// Cut `rect` out of `sheet`.
///
/// The result is always `rect.width()` x `rect.height()`. Any part of the
/// rectangle outside the sheet is filled with zeroed pixels, which are fully
/// transparent for color types with an alpha channel.
pub fn crop_frame(sheet: &DynamicImage, rect: CropRect) -> FrameTile {
    let (width, height) = (rect.width(), rect.height());
    let tile = sheet.crop_imm(rect.left, rect.top, width, height);

    if rect.fits_within(sheet.width(), sheet.height()) {
        return FrameTile {
            image: tile,
            padded: false,
        };
    }

    FrameTile {
        image: pad_to(tile, width, height),
        padded: true,
    }
}

fn pad_to(tile: DynamicImage, width: u32, height: u32) -> DynamicImage {
    match tile {
        DynamicImage::ImageLuma8(img) => DynamicImage::ImageLuma8(pad_buffer(&img, width, height)),
        DynamicImage::ImageLumaA8(img) => {
            DynamicImage::ImageLumaA8(pad_buffer(&img, width, height))
        }
        DynamicImage::ImageRgb8(img) => DynamicImage::ImageRgb8(pad_buffer(&img, width, height)),
        DynamicImage::ImageRgba8(img) => DynamicImage::ImageRgba8(pad_buffer(&img, width, height)),
        DynamicImage::ImageLuma16(img) => {
            DynamicImage::ImageLuma16(pad_buffer(&img, width, height))
        }
        DynamicImage::ImageLumaA16(img) => {
            DynamicImage::ImageLumaA16(pad_buffer(&img, width, height))
        }
        DynamicImage::ImageRgb16(img) => DynamicImage::ImageRgb16(pad_buffer(&img, width, height)),
        DynamicImage::ImageRgba16(img) => {
            DynamicImage::ImageRgba16(pad_buffer(&img, width, height))
        }
        DynamicImage::ImageRgb32F(img) => {
            DynamicImage::ImageRgb32F(pad_buffer(&img, width, height))
        }
        DynamicImage::ImageRgba32F(img) => {
            DynamicImage::ImageRgba32F(pad_buffer(&img, width, height))
        }
        other => DynamicImage::ImageRgba8(pad_buffer(&other.to_rgba8(), width, height)),
    }
}

fn pad_buffer<P: Pixel>(
    img: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut padded = ImageBuffer::new(width, height);
    imageops::replace(&mut padded, img, 0, 0);
    padded
}
