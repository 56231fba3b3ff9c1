//! Configuration parameters for acoustic comparison

/// Comparison configuration parameters
///
/// The interpretation thresholds are empirical tuning values, not
/// load-bearing design decisions: they are set so that small numerical
/// jitter between two recordings of the same machine stays below the
/// reporting floor. Adjust them per deployment if the reports come out too
/// chatty or too quiet.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    // Frequency bands
    /// Upper edge of the low band in Hz (default: 1000.0)
    /// Rotational and periodic structural noise lives below this edge.
    pub low_band_hz: f32,

    /// Lower edge of the high band in Hz (default: 3000.0)
    /// Wear, impact and rattle components surface above this edge.
    pub high_band_hz: f32,

    // Interpretation thresholds
    /// Minimum absolute RMS difference to report (default: 0.05)
    /// In RMS units of a peak-normalized signal.
    pub energy_threshold: f32,

    /// Minimum absolute spectral centroid difference in Hz to report
    /// (default: 200.0)
    pub centroid_threshold_hz: f32,

    /// Minimum absolute high/low band ratio difference to report
    /// (default: 0.1, dimensionless)
    pub hf_ratio_threshold: f32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            low_band_hz: 1000.0,
            high_band_hz: 3000.0,
            energy_threshold: 0.05,
            centroid_threshold_hz: 200.0,
            hf_ratio_threshold: 0.1,
        }
    }
}
