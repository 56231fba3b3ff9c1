//! Example: Compare one reference against a directory of recordings
//!
//! Every stage of the pipeline is pure and stateless, so independent
//! comparisons run in parallel without any coordination.
//!
//! Usage: batch_compare <normal> <directory>

use std::path::PathBuf;

use rayon::prelude::*;

use sonodiff::io::load_waveform;
use sonodiff::{compare_audio, AnalysisError, ComparisonReport, CompareConfig};

const AUDIO_EXTENSIONS: [&str; 5] = ["wav", "flac", "mp3", "ogg", "m4a"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (normal_path, dir_path) = match (args.next(), args.next()) {
        (Some(normal), Some(dir)) => (PathBuf::from(normal), PathBuf::from(dir)),
        _ => {
            eprintln!("Usage: batch_compare <normal> <directory>");
            std::process::exit(2);
        }
    };

    let (normal, sample_rate) = load_waveform(&normal_path)?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir_path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| AUDIO_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    println!("Comparing {} files against {}...", files.len(), normal_path.display());

    let results: Vec<(PathBuf, Result<ComparisonReport, AnalysisError>)> = files
        .par_iter()
        .map(|path| {
            let report = load_waveform(path).and_then(|(target, target_rate)| {
                if target_rate != sample_rate {
                    log::warn!(
                        "{}: sample rate {} Hz differs from reference {} Hz",
                        path.display(),
                        target_rate,
                        sample_rate
                    );
                }
                compare_audio(&normal, &target, sample_rate, CompareConfig::default())
            });
            (path.clone(), report)
        })
        .collect();

    for (path, result) in results {
        match result {
            Ok(report) if report.statements.is_empty() => {
                println!("{}: no significant acoustic change", path.display());
            }
            Ok(report) => {
                println!("{}:", path.display());
                for statement in &report.statements {
                    println!("  - {}", statement);
                }
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
            }
        }
    }

    Ok(())
}
