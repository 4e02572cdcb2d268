//! Command-line interface for colormask
//!
//! Runs the mask pipeline on either a generated test pattern or an image
//! file, writes the three artifacts (original, mask, result) as PNG files,
//! and prints a JSON report to stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgGroup, Parser};
use log::info;
use serde::Serialize;

use colormask::{
    process_file, run_pipeline, synthetic, ColorMask, MaskArtifacts, PaletteConfig, Result,
};

#[derive(Parser)]
#[command(
    name = "colormask",
    about = "Select colored regions of an image with HSV range masks"
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["example_synthetic", "file"]),
))]
struct Args {
    /// Run the pipeline on a generated pattern with one red and one blue disc
    #[arg(long = "example_synthetic")]
    example_synthetic: bool,

    /// Path to an image file to process
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// JSON palette file (defaults to the built-in red + blue palette)
    #[arg(long, value_name = "PATH")]
    palette: Option<PathBuf>,

    /// Directory for the PNG artifacts
    #[arg(long, value_name = "DIR", default_value = "output")]
    output: PathBuf,
}

/// Machine-readable run summary printed to stdout
#[derive(Serialize)]
struct MaskReport {
    width: u32,
    height: u32,
    colors: Vec<String>,
    selected_pixels: u64,
    coverage: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("Masking failed: {error}");
        eprintln!("Suggestion: {}", error.user_message());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let palette = match &args.palette {
        Some(path) => PaletteConfig::from_json_file(path)?,
        None => PaletteConfig::default_palette(),
    };
    let masks = palette.into_masks()?;

    let artifacts = match &args.file {
        Some(path) => {
            info!("processing file '{}'", path.display());
            process_file(path, &masks)?
        }
        None => {
            info!("processing synthetic two-disc pattern");
            run_pipeline(&synthetic::color_discs(), &masks)?
        }
    };

    print_report(&artifacts, &masks);
    save_artifacts(&artifacts, &args.output);
    Ok(())
}

fn print_report(artifacts: &MaskArtifacts, masks: &[ColorMask]) {
    let (width, height) = artifacts.original.dimensions();
    let selected = artifacts.selected_pixels();
    let total = (width as u64) * (height as u64);
    let report = MaskReport {
        width,
        height,
        colors: masks.iter().map(|m| m.name().to_string()).collect(),
        selected_pixels: selected,
        coverage: selected as f64 / total as f64,
    };

    // JSON to stdout for programmatic use, summary to stderr for humans.
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing report: {e}"),
    }
    eprintln!();
    eprintln!("Mask Summary:");
    eprintln!("  Image: {width}x{height}");
    eprintln!("  Colors: {}", report.colors.join(", "));
    eprintln!(
        "  Selected: {selected} of {total} pixels ({:.1}%)",
        report.coverage * 100.0
    );
}

fn save_artifacts(artifacts: &MaskArtifacts, output_dir: &Path) {
    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("Warning: Failed to create output directory: {e}");
        return;
    }

    let original_path = output_dir.join("original.png");
    match artifacts.original.save(&original_path) {
        Ok(_) => eprintln!("Saved original image to {}", original_path.display()),
        Err(e) => eprintln!("Warning: Failed to save original image: {e}"),
    }

    let mask_path = output_dir.join("mask.png");
    match artifacts.mask.save(&mask_path) {
        Ok(_) => eprintln!("Saved combined mask to {}", mask_path.display()),
        Err(e) => eprintln!("Warning: Failed to save combined mask: {e}"),
    }

    let result_path = output_dir.join("result.png");
    match artifacts.result.save(&result_path) {
        Ok(_) => eprintln!("Saved masked result to {}", result_path.display()),
        Err(e) => eprintln!("Warning: Failed to save masked result: {e}"),
    }
}
