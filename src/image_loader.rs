//! Image loading for the mask pipeline
//!
//! Single entry point for decoding a raster from disk. All inputs are
//! normalized to an 8-bit three-channel RGB buffer for downstream HSV
//! conversion. Existence is checked before any decode attempt so a missing
//! file and an undecodable file report as distinct errors.

use std::path::Path;

use image::{ImageReader, RgbImage};
use log::warn;

use crate::error::{MaskError, Result};

/// Image formats recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Tiff,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Get list of recognized file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Load an image from disk as an 8-bit RGB raster
///
/// # Errors
///
/// Returns [`MaskError::FileNotFound`] when the path does not refer to an
/// existing file, and [`MaskError::ImageLoad`] when the file cannot be
/// opened or decoded.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(MaskError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if ImageFormat::from_extension(path).is_none() {
        warn!(
            "unrecognized extension on '{}', attempting decode anyway",
            path.display()
        );
    }

    let reader = ImageReader::open(path).map_err(|e| {
        MaskError::image_load(format!("failed to open '{}'", path.display()), e)
    })?;
    let decoded = reader.decode().map_err(|e| {
        MaskError::image_load(format!("failed to decode '{}'", path.display()), e)
    })?;

    Ok(decoded.to_rgb8())
}
