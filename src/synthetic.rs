//! Synthetic test patterns
//!
//! In-memory rasters for exercising the pipeline without file I/O: a
//! two-disc pattern matching the built-in red and blue presets, and a hue
//! gradient sweeping the full quantized hue circle.

use image::{Rgb, RgbImage};

use crate::color::hsv_to_rgb;
use crate::constants::test_pattern::{
    BLUE_DISC_CENTER, CANVAS_SIZE, DISC_RADIUS, RED_DISC_CENTER,
};

/// Black canvas with a filled red disc and a filled blue disc
///
/// 200x200 pixels, red disc centered at (65, 100), blue disc centered at
/// (135, 100), both radius 40. Discs are hard-edged: a pixel is filled iff
/// its center lies within the radius.
pub fn color_discs() -> RgbImage {
    let mut image = RgbImage::new(CANVAS_SIZE, CANVAS_SIZE);
    fill_disc(&mut image, RED_DISC_CENTER, DISC_RADIUS, Rgb([255, 0, 0]));
    fill_disc(&mut image, BLUE_DISC_CENTER, DISC_RADIUS, Rgb([0, 0, 255]));
    image
}

/// Whether (x, y) lies within the disc at `center` with radius `radius`
///
/// Matches the fill rule of [`color_discs`], so tests can derive the exact
/// expected mask.
pub fn in_disc(x: u32, y: u32, center: (i64, i64), radius: i64) -> bool {
    let dx = x as i64 - center.0;
    let dy = y as i64 - center.1;
    dx * dx + dy * dy <= radius * radius
}

fn fill_disc(image: &mut RgbImage, center: (i64, i64), radius: i64, color: Rgb<u8>) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if in_disc(x, y, center, radius) {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Hue gradient sweeping 0..=179 across the width at full saturation/value
///
/// Column `x` carries the hue `x * 180 / width`, so a width of 360 puts two
/// columns on every hue step.
pub fn hue_gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let hue = ((x as u64 * 180) / width as u64).min(179) as u8;
        Rgb(hsv_to_rgb(hue, 255, 255))
    })
}
