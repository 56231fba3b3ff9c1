//! # Sonodiff
//!
//! An acoustic comparison engine for mechanical inspection, describing how a
//! target recording differs from a known-good reference in plain language.
//!
//! ## Features
//!
//! - **Interpretable descriptors**: RMS energy, spectral centroid, and
//!   high/low band energy ratio, each with a direct physical reading
//! - **Deterministic interpretation**: a per-feature threshold rule table
//!   turns the feature differences into short qualitative statements
//! - **File loading**: Symphonia-based decoding to a normalized mono
//!   waveform
//! - **Comparison plots**: waveform overlay and shared-scale dB spectrograms
//!
//! This is a diagnostic aid, not a detector: it explains *what changed*
//! ("louder", "more high-frequency content") and leaves the judgement to a
//! human. No classification, no anomaly scoring.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sonodiff::{compare_audio, CompareConfig};
//!
//! // Two mono recordings at the same sample rate, peak-normalized
//! let normal: Vec<f32> = vec![]; // Reference recording
//! let target: Vec<f32> = vec![]; // Recording under inspection
//! let sample_rate = 44100;
//!
//! let report = compare_audio(&normal, &target, sample_rate, CompareConfig::default())?;
//!
//! for (name, value) in report.difference.iter() {
//!     println!("{}: {:+.3}", name, value);
//! }
//! for statement in &report.statements {
//!     println!("- {}", statement);
//! }
//! # Ok::<(), sonodiff::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The comparison pipeline is a chain of pure stages:
//!
//! ```text
//! Waveform pair → Feature Extraction (×2) → Differencing → Interpretation → Report
//! ```
//!
//! Every stage fully consumes its input and returns a fresh value; there is
//! no shared state between runs, so independent comparisons can safely run
//! in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;
pub mod render;

// Re-export main types
pub use analysis::interpret::{interpret, ChangeDirection, Statement};
pub use analysis::result::{ComparisonMetadata, ComparisonReport};
pub use config::CompareConfig;
pub use error::AnalysisError;
pub use features::extractor::extract_features;
pub use features::vector::{diff, DifferenceVector, FeatureName, FeatureVector};

/// Main comparison function
///
/// Extracts the feature vector of both recordings, differences them, and
/// interprets the difference against the configured thresholds.
///
/// # Arguments
///
/// * `normal` - Reference ("known good") waveform, mono, peak-normalized
/// * `target` - Waveform under inspection, mono, peak-normalized
/// * `sample_rate` - Sample rate in Hz, shared by both recordings
/// * `config` - Band edges and interpretation thresholds
///
/// # Returns
///
/// [`ComparisonReport`] with both feature vectors, the difference vector,
/// the qualitative statements, and timing metadata
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSignal`] if either waveform is empty or
/// the sample rate is 0.
///
/// # Example
///
/// ```no_run
/// use sonodiff::{compare_audio, CompareConfig};
///
/// let normal = vec![0.0f32; 44100];
/// let target = vec![0.0f32; 44100];
/// let report = compare_audio(&normal, &target, 44100, CompareConfig::default())?;
/// assert!(report.statements.is_empty());
/// # Ok::<(), sonodiff::AnalysisError>(())
/// ```
pub fn compare_audio(
    normal: &[f32],
    target: &[f32],
    sample_rate: u32,
    config: CompareConfig,
) -> Result<ComparisonReport, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting comparison: normal={} samples, target={} samples at {} Hz",
        normal.len(),
        target.len(),
        sample_rate
    );

    let normal_features = extract_features(normal, sample_rate, &config)?;
    let target_features = extract_features(target, sample_rate, &config)?;

    let difference = diff(&normal_features, &target_features)?;
    let statements = interpret(&difference, &config)?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Comparison finished in {:.2} ms with {} statement(s)",
        processing_time_ms,
        statements.len()
    );

    Ok(ComparisonReport {
        normal: normal_features,
        target: target_features,
        difference,
        statements,
        metadata: ComparisonMetadata {
            normal_duration_seconds: normal.len() as f32 / sample_rate as f32,
            target_duration_seconds: target.len() as f32 / sample_rate as f32,
            sample_rate,
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
