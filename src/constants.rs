//! HSV range constants and synthetic test-pattern geometry
//!
//! The HSV bounds follow the 8-bit quantization used throughout this crate:
//! hue in [0, 179] (180 is accepted as an inclusive upper bound), saturation
//! and value in [0, 255].

/// Maximum value accepted for a hue component in a range bound.
///
/// Pixel hues never exceed 179, so an upper bound of 180 behaves the same as
/// 179 and matches the conventional way the wraparound half of red is written.
pub const HUE_BOUND_MAX: u8 = 180;

/// HSV bounds for the built-in red and blue color presets
///
/// Red straddles the hue wraparound at 0/180, so it needs two non-wrapping
/// ranges. Blue is a single contiguous mid-hue band.
pub mod hsv_bounds {
    /// Low-hue half of red
    pub const RED_LOWER_1: [u8; 3] = [0, 100, 100];
    pub const RED_UPPER_1: [u8; 3] = [10, 255, 255];

    /// High-hue half of red (wraparound side)
    pub const RED_LOWER_2: [u8; 3] = [170, 100, 100];
    pub const RED_UPPER_2: [u8; 3] = [180, 255, 255];

    pub const BLUE_LOWER: [u8; 3] = [100, 100, 100];
    pub const BLUE_UPPER: [u8; 3] = [130, 255, 255];
}

/// Geometry of the synthetic two-disc test pattern
pub mod test_pattern {
    /// Square canvas edge length in pixels
    pub const CANVAS_SIZE: u32 = 200;

    /// Center of the red disc (x, y)
    pub const RED_DISC_CENTER: (i64, i64) = (65, 100);

    /// Center of the blue disc (x, y)
    pub const BLUE_DISC_CENTER: (i64, i64) = (135, 100);

    /// Radius of both discs in pixels
    pub const DISC_RADIUS: i64 = 40;
}
