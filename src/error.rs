//! Error types for the colormask library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for colormask operations
pub type Result<T> = std::result::Result<T, MaskError>;

/// Error types for mask construction, derivation, and application
#[derive(Error, Debug)]
pub enum MaskError {
    /// Referenced image file does not exist
    #[error("Image file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HSV range bounds rejected at registration time
    #[error("Invalid HSV range {lower:?}..{upper:?}: {reason}")]
    InvalidRange {
        lower: [u8; 3],
        upper: [u8; 3],
        reason: String,
    },

    /// Mask derivation attempted with zero registered ranges
    #[error("Color mask '{name}' has no registered HSV ranges")]
    EmptyRangeSet { name: String },

    /// Mask combination attempted over an empty collection
    #[error("Mask combination requires at least one color mask")]
    EmptyMaskSet,

    /// Image or mask with zero pixels supplied where content is required
    #[error("Empty {context} supplied")]
    EmptyImage { context: &'static str },

    /// Mask application with differing image and mask shapes
    #[error(
        "Dimension mismatch: image is {image_width}x{image_height}, \
         mask is {mask_width}x{mask_height}"
    )]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// Palette configuration file could not be read or parsed
    #[error("Palette configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MaskError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a palette configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a range validation error
    pub fn invalid_range(lower: [u8; 3], upper: [u8; 3], reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            lower,
            upper,
            reason: reason.into(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MaskError::FileNotFound { path } => {
                format!(
                    "The file '{}' does not exist. Please check the path and try again.",
                    path.display()
                )
            }
            MaskError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again."
                    .to_string()
            }
            MaskError::InvalidRange { .. } => {
                "An HSV range is malformed. Hue must be at most 180 and each lower \
                 component must not exceed its upper component."
                    .to_string()
            }
            MaskError::EmptyRangeSet { name } => {
                format!("The color '{name}' has no HSV ranges. Add at least one range.")
            }
            MaskError::EmptyMaskSet => {
                "No colors were selected. Supply at least one color mask.".to_string()
            }
            MaskError::DimensionMismatch { .. } => {
                "The mask and the image have different sizes. Both must come from the \
                 same source image."
                    .to_string()
            }
            _ => "Mask processing failed. Please try with a different input.".to_string(),
        }
    }
}
