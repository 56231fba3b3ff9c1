//! Error types for the acoustic comparison engine

use std::fmt;

/// Errors that can occur during acoustic comparison
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Empty waveform or non-positive sample rate
    InvalidSignal(String),

    /// Two feature vectors with non-identical key sets
    SchemaMismatch(String),

    /// Audio decoding error
    DecodingError(String),

    /// Plot rendering error
    RenderError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidSignal(msg) => write!(f, "Invalid signal: {}", msg),
            AnalysisError::SchemaMismatch(msg) => write!(f, "Schema mismatch: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            AnalysisError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
