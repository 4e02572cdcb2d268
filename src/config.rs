//! Palette configuration for the mask pipeline
//!
//! A palette names the colors the pipeline should select and the HSV ranges
//! behind each color. Palettes can be loaded from JSON or constructed from
//! the built-in red and blue presets:
//!
//! ```no_run
//! use colormask::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let palette = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use the built-in red + blue palette
//! let palette = PaletteConfig::default_palette();
//! let masks = palette.into_masks()?;
//! # Ok::<(), colormask::MaskError>(())
//! ```
//!
//! Ranges coming from a file pass through the same validation as ranges
//! registered programmatically; a malformed range fails the whole load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::hsv_bounds;
use crate::error::{MaskError, Result};
use crate::mask::ColorMask;

/// One serializable HSV range pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Inclusive lower bound (hue, saturation, value)
    pub lower: [u8; 3],
    /// Inclusive upper bound (hue, saturation, value)
    pub upper: [u8; 3],
}

/// One named color and its HSV ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Informational color label
    pub name: String,
    /// Ordered range pairs; wraparound hues appear as two entries
    pub ranges: Vec<RangeConfig>,
}

/// Complete palette: the set of colors the pipeline selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<ColorConfig>,
}

impl PaletteConfig {
    /// Built-in palette with the red and blue presets
    pub fn default_palette() -> PaletteConfig {
        PaletteConfig {
            colors: vec![
                ColorConfig {
                    name: "red".to_string(),
                    ranges: vec![
                        RangeConfig {
                            lower: hsv_bounds::RED_LOWER_1,
                            upper: hsv_bounds::RED_UPPER_1,
                        },
                        RangeConfig {
                            lower: hsv_bounds::RED_LOWER_2,
                            upper: hsv_bounds::RED_UPPER_2,
                        },
                    ],
                },
                ColorConfig {
                    name: "blue".to_string(),
                    ranges: vec![RangeConfig {
                        lower: hsv_bounds::BLUE_LOWER,
                        upper: hsv_bounds::BLUE_UPPER,
                    }],
                },
            ],
        }
    }

    /// Load a palette from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Config`] when the file cannot be read or the
    /// JSON does not describe a palette.
    pub fn from_json_file(path: &Path) -> Result<PaletteConfig> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MaskError::config(format!("failed to read '{}'", path.display()), e)
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            MaskError::config(format!("failed to parse '{}'", path.display()), e)
        })
    }

    /// Convert the palette into validated color masks
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidRange`] if any configured range is
    /// malformed.
    pub fn into_masks(self) -> Result<Vec<ColorMask>> {
        let mut masks = Vec::with_capacity(self.colors.len());
        for color in self.colors {
            let mut mask = ColorMask::new(color.name);
            for range in color.ranges {
                mask.add_range(range.lower, range.upper)?;
            }
            masks.push(mask);
        }
        Ok(masks)
    }
}
