//! Color space conversion module
//!
//! Holds the HSV raster type and the conversions between the 8-bit RGB
//! rasters of the `image` crate and the 8-bit HSV quantization used by the
//! mask core (hue in [0, 179], saturation and value in [0, 255]).

pub mod conversion;

pub use conversion::{hsv_to_rgb, rgb_to_hsv, HsvImage};
