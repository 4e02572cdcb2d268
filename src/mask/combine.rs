//! Multi-color mask union

use image::GrayImage;
use log::debug;

use crate::color::HsvImage;
use crate::error::{MaskError, Result};
use crate::mask::{ColorMask, MASK_SELECTED};

/// Derive one binary mask marking pixels that belong to any supplied color
///
/// Each [`ColorMask`] derives its own mask independently; the results are
/// OR-ed together pixel-wise. OR is associative and commutative, so the
/// order of `masks` does not affect the output.
///
/// # Errors
///
/// Returns [`MaskError::EmptyMaskSet`] for an empty slice, and propagates
/// any per-color derivation failure.
pub fn combine_masks(masks: &[ColorMask], image_hsv: &HsvImage) -> Result<GrayImage> {
    let (first, rest) = masks.split_first().ok_or(MaskError::EmptyMaskSet)?;

    let mut combined = first.create_mask(image_hsv)?;
    for mask in rest {
        let layer = mask.create_mask(image_hsv)?;
        for (acc, pixel) in combined.pixels_mut().zip(layer.pixels()) {
            if pixel.0[0] != 0 {
                acc.0[0] = MASK_SELECTED;
            }
        }
    }

    debug!(
        "combined {} color mask(s): {} of {} pixels selected",
        masks.len(),
        combined.pixels().filter(|p| p.0[0] != 0).count(),
        (image_hsv.width() as u64) * (image_hsv.height() as u64)
    );
    Ok(combined)
}
