//! Example: Compare a target recording against a reference
//!
//! Loads both files, renders the comparison plots next to the current
//! working directory, and prints the feature differences and their
//! interpretation.
//!
//! Usage: compare_files <normal> <target> [report.json]

use std::path::{Path, PathBuf};

use sonodiff::io::load_waveform;
use sonodiff::render::{plot_spectrogram_compare, plot_waveform_compare};
use sonodiff::{compare_audio, CompareConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (normal_path, target_path) = match (args.next(), args.next()) {
        (Some(normal), Some(target)) => (PathBuf::from(normal), PathBuf::from(target)),
        _ => {
            eprintln!("Usage: compare_files <normal> <target> [report.json]");
            std::process::exit(2);
        }
    };
    let json_path = args.next().map(PathBuf::from);

    let (normal, sample_rate) = load_waveform(&normal_path)?;
    let (target, target_rate) = load_waveform(&target_path)?;
    if target_rate != sample_rate {
        log::warn!(
            "Sample rates differ ({} Hz vs {} Hz); proceeding with the reference rate",
            sample_rate,
            target_rate
        );
    }

    plot_waveform_compare(
        &normal,
        &target,
        sample_rate,
        Path::new("waveform_compare.png"),
    )?;
    plot_spectrogram_compare(
        &normal,
        &target,
        sample_rate,
        Path::new("spectrogram_compare.png"),
    )?;

    let report = compare_audio(&normal, &target, sample_rate, CompareConfig::default())?;

    println!("=== Feature Difference ===");
    for (name, value) in report.difference.iter() {
        println!("{}: {:.3}", name, value);
    }

    println!();
    println!("=== Interpretation ===");
    if report.statements.is_empty() {
        println!("- no significant acoustic change detected");
    }
    for statement in &report.statements {
        println!("- {}", statement);
    }

    if let Some(path) = json_path {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}
