//! Integration tests for the complete mask pipeline
//!
//! These tests validate the end-to-end workflow on synthetic inputs:
//! - Two-disc pattern: the combined red + blue mask selects exactly the
//!   disc regions and the masked result preserves them unchanged
//! - Hue gradient: only the red and blue hue bands are selected
//! - Error handling for missing files and malformed mask sets

use colormask::{
    apply_mask, combine_masks, constants::test_pattern, process_file, run_pipeline, synthetic,
    ColorMask, HsvImage, MaskError, PaletteConfig,
};
use image::{GrayImage, Luma, RgbImage};
use std::path::Path;

fn default_masks() -> Vec<ColorMask> {
    PaletteConfig::default_palette().into_masks().unwrap()
}

// ============================================================================
// Two-Disc Scenario
// ============================================================================

#[test]
fn test_disc_pattern_mask_selects_exactly_the_discs() {
    let image = synthetic::color_discs();
    let artifacts = run_pipeline(&image, &default_masks()).unwrap();

    for y in 0..image.height() {
        for x in 0..image.width() {
            let in_red = synthetic::in_disc(
                x,
                y,
                test_pattern::RED_DISC_CENTER,
                test_pattern::DISC_RADIUS,
            );
            let in_blue = synthetic::in_disc(
                x,
                y,
                test_pattern::BLUE_DISC_CENTER,
                test_pattern::DISC_RADIUS,
            );
            let selected = artifacts.mask.get_pixel(x, y).0[0] != 0;
            assert_eq!(
                selected,
                in_red || in_blue,
                "mask mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_disc_pattern_result_preserves_discs_and_blanks_the_rest() {
    let image = synthetic::color_discs();
    let artifacts = run_pipeline(&image, &default_masks()).unwrap();

    for (x, y, pixel) in artifacts.result.enumerate_pixels() {
        let selected = artifacts.mask.get_pixel(x, y).0[0] != 0;
        if selected {
            assert_eq!(pixel, image.get_pixel(x, y), "disc pixel changed at ({x}, {y})");
        } else {
            assert_eq!(pixel.0, [0, 0, 0], "background not blanked at ({x}, {y})");
        }
    }
}

// ============================================================================
// Hue-Gradient Scenario
// ============================================================================

/// Columns of a 360-wide gradient carrying the given hue (two per hue step)
fn gradient_columns_for_hue(hue: u32) -> [u32; 2] {
    [hue * 2, hue * 2 + 1]
}

#[test]
fn test_gradient_selects_only_red_and_blue_bands() {
    let image = synthetic::hue_gradient(360, 8);
    let hsv = HsvImage::from_rgb(&image);
    let mask = combine_masks(&default_masks(), &hsv).unwrap();

    // Interior hues of the selected bands [0,10], [100,130], [170,179] and
    // of the gaps between them. Band edges are excluded: quantization may
    // shift them by one hue step.
    let selected_hues = [2, 5, 8, 102, 115, 128, 172, 175, 178];
    let rejected_hues = [13, 30, 60, 90, 97, 133, 150, 167];

    for hue in selected_hues {
        for x in gradient_columns_for_hue(hue) {
            for y in 0..image.height() {
                assert_eq!(
                    mask.get_pixel(x, y).0[0],
                    255,
                    "hue {hue} (column {x}) should be selected"
                );
            }
        }
    }
    for hue in rejected_hues {
        for x in gradient_columns_for_hue(hue) {
            for y in 0..image.height() {
                assert_eq!(
                    mask.get_pixel(x, y).0[0],
                    0,
                    "hue {hue} (column {x}) should not be selected"
                );
            }
        }
    }
}

// ============================================================================
// Combination Properties
// ============================================================================

#[test]
fn test_combination_is_order_independent() {
    let image = synthetic::color_discs();
    let hsv = HsvImage::from_rgb(&image);

    let forward = combine_masks(&[ColorMask::red(), ColorMask::blue()], &hsv).unwrap();
    let reverse = combine_masks(&[ColorMask::blue(), ColorMask::red()], &hsv).unwrap();
    assert_eq!(forward, reverse);
}

#[test]
fn test_combined_mask_equals_union_of_individual_masks() {
    let image = synthetic::color_discs();
    let hsv = HsvImage::from_rgb(&image);

    let red = ColorMask::red().create_mask(&hsv).unwrap();
    let blue = ColorMask::blue().create_mask(&hsv).unwrap();
    let combined = combine_masks(&default_masks(), &hsv).unwrap();

    for (x, y, pixel) in combined.enumerate_pixels() {
        let or = red.get_pixel(x, y).0[0] | blue.get_pixel(x, y).0[0];
        assert_eq!(pixel.0[0], or);
    }
}

// ============================================================================
// Mask Application Extremes
// ============================================================================

#[test]
fn test_full_mask_returns_source_unchanged() {
    let image = synthetic::color_discs();
    let mask = GrayImage::from_pixel(image.width(), image.height(), Luma([255]));
    let result = apply_mask(&image, &mask).unwrap();
    assert_eq!(result, image);
}

#[test]
fn test_zero_mask_returns_black_image_of_same_shape() {
    let image = synthetic::color_discs();
    let mask = GrayImage::new(image.width(), image.height());
    let result = apply_mask(&image, &mask).unwrap();
    assert_eq!(result.dimensions(), image.dimensions());
    assert!(result.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn test_mismatched_mask_fails_before_pixel_work() {
    let image = synthetic::color_discs();
    let mask = GrayImage::new(100, 200);
    match apply_mask(&image, &mask) {
        Err(MaskError::DimensionMismatch {
            image_width,
            image_height,
            mask_width,
            mask_height,
        }) => {
            assert_eq!((image_width, image_height), (200, 200));
            assert_eq!((mask_width, mask_height), (100, 200));
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_process_file_not_found() {
    let result = process_file(Path::new("nonexistent_file.jpg"), &default_masks());
    assert!(matches!(result, Err(MaskError::FileNotFound { .. })));
}

#[test]
fn test_empty_range_set_never_returns_silent_zero_mask() {
    let hsv = HsvImage::from_rgb(&synthetic::color_discs());
    let result = ColorMask::new("unconfigured").create_mask(&hsv);
    assert!(matches!(result, Err(MaskError::EmptyRangeSet { .. })));
}

#[test]
fn test_empty_mask_collection_never_returns_default_mask() {
    let hsv = HsvImage::from_rgb(&synthetic::color_discs());
    let result = combine_masks(&[], &hsv);
    assert!(matches!(result, Err(MaskError::EmptyMaskSet)));
}

#[test]
fn test_pipeline_does_not_mutate_the_source() {
    let image = synthetic::color_discs();
    let before: RgbImage = image.clone();
    let _ = run_pipeline(&image, &default_masks()).unwrap();
    assert_eq!(image, before);
}
