//! Mask application

use image::{GrayImage, RgbImage};

use crate::error::{MaskError, Result};

/// Produce a new raster keeping only the pixels the mask selects
///
/// The result equals `image` wherever the mask is non-zero and is the
/// all-zero pixel elsewhere. The input is never mutated.
///
/// # Errors
///
/// Returns [`MaskError::EmptyImage`] when either input has zero pixels and
/// [`MaskError::DimensionMismatch`] (naming both shapes) when the image and
/// mask dimensions differ. Validation happens before any pixel work.
pub fn apply_mask(image: &RgbImage, mask: &GrayImage) -> Result<RgbImage> {
    let (image_width, image_height) = image.dimensions();
    let (mask_width, mask_height) = mask.dimensions();

    if image_width == 0 || image_height == 0 {
        return Err(MaskError::EmptyImage { context: "image" });
    }
    if mask_width == 0 || mask_height == 0 {
        return Err(MaskError::EmptyImage { context: "mask" });
    }
    if (image_width, image_height) != (mask_width, mask_height) {
        return Err(MaskError::DimensionMismatch {
            image_width,
            image_height,
            mask_width,
            mask_height,
        });
    }

    let mut result = RgbImage::new(image_width, image_height);
    for (x, y, pixel) in image.enumerate_pixels() {
        if mask.get_pixel(x, y).0[0] != 0 {
            result.put_pixel(x, y, *pixel);
        }
    }
    Ok(result)
}
