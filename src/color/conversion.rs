//! RGB to HSV conversion with 8-bit quantization
//!
//! Hue is an angular value; this crate quantizes it to [0, 179] by halving
//! the degree value, the convention most published HSV range tables use.
//! Saturation and value are scaled to [0, 255].

use image::RgbImage;
use palette::{FromColor, Hsv, Srgb};

/// Convert one 8-bit RGB pixel to quantized HSV components
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsv = Hsv::from_color(srgb);

    let degrees = hsv.hue.into_positive_degrees();
    // Degrees are in [0, 360); halving and rounding can land on 180, which
    // wraps back to hue 0.
    let h = ((degrees / 2.0).round() as u16 % 180) as u8;
    let s = (hsv.saturation * 255.0).round() as u8;
    let v = (hsv.value * 255.0).round() as u8;

    [h, s, v]
}

/// Convert quantized HSV components back to an 8-bit RGB pixel
///
/// Inverse of [`rgb_to_hsv`] up to quantization error of at most one hue
/// step. Used by the synthetic pattern generators.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> [u8; 3] {
    let hsv = Hsv::new_srgb(h as f32 * 2.0, s as f32 / 255.0, v as f32 / 255.0);
    let srgb = Srgb::from_color(hsv);
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    [r, g, b]
}

/// Owned HSV raster in 8-bit quantization
///
/// Same width and height as the RGB raster it was derived from, three
/// interleaved bytes per pixel (hue, saturation, value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl HsvImage {
    /// Convert an RGB raster to HSV, preserving dimensions
    pub fn from_rgb(image: &RgbImage) -> HsvImage {
        let (width, height) = image.dimensions();
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for pixel in image.pixels() {
            let [r, g, b] = pixel.0;
            data.extend_from_slice(&rgb_to_hsv(r, g, b));
        }
        HsvImage {
            width,
            height,
            data,
        }
    }

    /// Build an HSV raster from raw interleaved bytes
    ///
    /// Returns `None` if `data` is not exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<HsvImage> {
        if data.len() != (width as usize) * (height as usize) * 3 {
            return None;
        }
        Some(HsvImage {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// HSV components of the pixel at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
    }

    #[test]
    fn test_achromatic_colors() {
        assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
        assert_eq!(rgb_to_hsv(255, 255, 255), [0, 0, 255]);
        let [_, s, v] = rgb_to_hsv(128, 128, 128);
        assert_eq!(s, 0);
        assert_eq!(v, 128);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0, 255, 255), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(60, 255, 255), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(120, 255, 255), [0, 0, 255]);
    }

    #[test]
    fn test_hue_round_trip_tolerance() {
        for hue in 0..180u8 {
            let [r, g, b] = hsv_to_rgb(hue, 255, 255);
            let [h, s, v] = rgb_to_hsv(r, g, b);
            let diff = (h as i16 - hue as i16).abs().min(180 - (h as i16 - hue as i16).abs());
            assert!(diff <= 1, "hue {hue} came back as {h}");
            assert!(s >= 254);
            assert_eq!(v, 255);
        }
    }

    #[test]
    fn test_from_rgb_dimensions_and_pixels() {
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(2, 1, Rgb([0, 0, 255]));

        let hsv = HsvImage::from_rgb(&rgb);
        assert_eq!(hsv.dimensions(), (3, 2));
        assert_eq!(hsv.pixel(0, 0), [0, 255, 255]);
        assert_eq!(hsv.pixel(2, 1), [120, 255, 255]);
        assert_eq!(hsv.pixel(1, 0), [0, 0, 0]);
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(HsvImage::from_raw(2, 2, vec![0; 12]).is_some());
        assert!(HsvImage::from_raw(2, 2, vec![0; 11]).is_none());
    }
}
