//! Color mask core
//!
//! A [`ColorMask`] is a named, ordered collection of HSV range pairs that
//! together define one logical color category. Deriving a mask tests every
//! pixel of an HSV raster against the ranges (inclusive on both ends) and
//! unions the per-range results into a single binary mask.
//!
//! Hue is cyclic; a color that straddles the 0/180 wraparound (true red)
//! must be registered as two non-wrapping ranges, as [`ColorMask::red`]
//! does. Bounds are validated at registration: a lower component greater
//! than its upper component is rejected rather than silently matching
//! nothing.

pub mod apply;
pub mod combine;

pub use apply::apply_mask;
pub use combine::combine_masks;

use image::{GrayImage, Luma};
use log::debug;

use crate::color::HsvImage;
use crate::constants::{hsv_bounds, HUE_BOUND_MAX};
use crate::error::{MaskError, Result};

/// Mask pixel value for a selected pixel
pub const MASK_SELECTED: u8 = 255;

/// One inclusive HSV range with strongly-typed 3-component bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    lower: [u8; 3],
    upper: [u8; 3],
}

impl HsvRange {
    /// Create a validated range pair
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidRange`] if a hue component exceeds
    /// [`HUE_BOUND_MAX`] or if `lower` exceeds `upper` component-wise.
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Result<HsvRange> {
        if lower[0] > HUE_BOUND_MAX || upper[0] > HUE_BOUND_MAX {
            return Err(MaskError::invalid_range(
                lower,
                upper,
                format!("hue component exceeds {HUE_BOUND_MAX}"),
            ));
        }
        for i in 0..3 {
            if lower[i] > upper[i] {
                return Err(MaskError::invalid_range(
                    lower,
                    upper,
                    format!(
                        "lower component {} exceeds upper component {} (wraparound hue \
                         ranges must be split into two non-wrapping ranges)",
                        lower[i], upper[i]
                    ),
                ));
            }
        }
        Ok(HsvRange { lower, upper })
    }

    pub fn lower(&self) -> [u8; 3] {
        self.lower
    }

    pub fn upper(&self) -> [u8; 3] {
        self.upper
    }

    /// Inclusive component-wise membership test
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.lower[i] <= hsv[i] && hsv[i] <= self.upper[i])
    }
}

/// Named collection of HSV ranges defining one logical color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMask {
    name: String,
    ranges: Vec<HsvRange>,
}

impl ColorMask {
    /// Create an empty mask with an informational name
    pub fn new(name: impl Into<String>) -> ColorMask {
        ColorMask {
            name: name.into(),
            ranges: Vec::new(),
        }
    }

    /// Built-in preset for red, split across the hue wraparound
    pub fn red() -> ColorMask {
        let mut mask = ColorMask::new("red");
        mask.ranges = vec![
            HsvRange {
                lower: hsv_bounds::RED_LOWER_1,
                upper: hsv_bounds::RED_UPPER_1,
            },
            HsvRange {
                lower: hsv_bounds::RED_LOWER_2,
                upper: hsv_bounds::RED_UPPER_2,
            },
        ];
        mask
    }

    /// Built-in preset for blue, one contiguous mid-hue band
    pub fn blue() -> ColorMask {
        let mut mask = ColorMask::new("blue");
        mask.ranges = vec![HsvRange {
            lower: hsv_bounds::BLUE_LOWER,
            upper: hsv_bounds::BLUE_UPPER,
        }];
        mask
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[HsvRange] {
        &self.ranges
    }

    /// Append a range pair, validating it first
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidRange`] for malformed bounds; the range
    /// set is unchanged on failure.
    pub fn add_range(&mut self, lower: [u8; 3], upper: [u8; 3]) -> Result<()> {
        self.ranges.push(HsvRange::new(lower, upper)?);
        Ok(())
    }

    /// Derive the binary membership mask for an HSV raster
    ///
    /// A pixel is selected ([`MASK_SELECTED`]) when its components fall
    /// inside any registered range, inclusive on both ends. The result has
    /// the same width and height as the input, one channel.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::EmptyRangeSet`] if no ranges were registered.
    pub fn create_mask(&self, image_hsv: &HsvImage) -> Result<GrayImage> {
        if self.ranges.is_empty() {
            return Err(MaskError::EmptyRangeSet {
                name: self.name.clone(),
            });
        }

        let (width, height) = image_hsv.dimensions();
        let mut mask = GrayImage::new(width, height);
        let mut selected: u64 = 0;
        for y in 0..height {
            for x in 0..width {
                let pixel = image_hsv.pixel(x, y);
                if self.ranges.iter().any(|range| range.contains(pixel)) {
                    mask.put_pixel(x, y, Luma([MASK_SELECTED]));
                    selected += 1;
                }
            }
        }

        debug!(
            "mask '{}': {} of {} pixels selected across {} range(s)",
            self.name,
            selected,
            (width as u64) * (height as u64),
            self.ranges.len()
        );
        Ok(mask)
    }
}
