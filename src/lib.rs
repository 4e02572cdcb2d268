//! # colormask
//!
//! A Rust crate for HSV color-range masking of raster images.
//!
//! This library selects pixels by color category:
//! - Converting 8-bit RGB rasters to a quantized HSV representation
//! - Deriving binary masks from named collections of HSV ranges
//! - Unioning masks across multiple colors
//! - Applying a mask to zero out unselected pixels
//!
//! ## Example
//!
//! ```rust,no_run
//! use colormask::{process_file, ColorMask};
//! use std::path::Path;
//!
//! let masks = vec![ColorMask::red(), ColorMask::blue()];
//! let artifacts = process_file(Path::new("photo.jpg"), &masks)?;
//! println!("{} pixels selected", artifacts.selected_pixels());
//! # Ok::<(), colormask::MaskError>(())
//! ```

use std::path::Path;

use image::{GrayImage, RgbImage};
use log::debug;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod mask;
pub mod synthetic;

pub use color::HsvImage;
pub use config::PaletteConfig;
pub use error::{MaskError, Result};
pub use image_loader::load_image;
pub use mask::{apply_mask, combine_masks, ColorMask, HsvRange};

/// The three rasters produced by one pipeline run
#[derive(Debug, Clone)]
pub struct MaskArtifacts {
    /// Source image, untouched
    pub original: RgbImage,
    /// Combined binary mask (255 = selected)
    pub mask: GrayImage,
    /// Source image with unselected pixels zeroed
    pub result: RgbImage,
}

impl MaskArtifacts {
    /// Number of selected pixels in the combined mask
    pub fn selected_pixels(&self) -> u64 {
        self.mask.pixels().filter(|p| p.0[0] != 0).count() as u64
    }
}

/// Run the mask pipeline on an in-memory image
///
/// Converts the image to HSV, derives and unions one mask per supplied
/// color, and applies the combined mask.
///
/// # Errors
///
/// Propagates any validation failure from mask derivation, combination, or
/// application; see [`MaskError`].
pub fn run_pipeline(image: &RgbImage, masks: &[ColorMask]) -> Result<MaskArtifacts> {
    let hsv = HsvImage::from_rgb(image);
    debug!(
        "running pipeline on {}x{} image with {} color(s)",
        hsv.width(),
        hsv.height(),
        masks.len()
    );
    let combined = combine_masks(masks, &hsv)?;
    let result = apply_mask(image, &combined)?;
    Ok(MaskArtifacts {
        original: image.clone(),
        mask: combined,
        result,
    })
}

/// Load an image from disk and run the mask pipeline on it
///
/// # Errors
///
/// Returns [`MaskError::FileNotFound`] or [`MaskError::ImageLoad`] for
/// loading failures, plus any pipeline validation failure.
pub fn process_file(image_path: &Path, masks: &[ColorMask]) -> Result<MaskArtifacts> {
    let image = load_image(image_path)?;
    run_pipeline(&image, masks)
}
