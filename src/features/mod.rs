//! Acoustic feature pipeline stages
//!
//! This module contains the measurement half of the comparison pipeline:
//! - Short-time spectral analysis and banded aggregation
//! - Interpretable feature extraction (energy, centroid, hf_ratio)
//! - Feature vector schema and differencing

pub mod extractor;
pub mod spectral;
pub mod vector;
