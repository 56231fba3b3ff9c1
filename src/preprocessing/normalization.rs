//! Amplitude normalization
//!
//! The comparison features are only meaningful when both recordings sit on
//! the same amplitude scale, so the loader peak-normalizes every waveform to
//! 1.0 before extraction.

/// Guard added to the peak before dividing, so silence stays silence
/// instead of dividing by zero
pub const PEAK_EPSILON: f32 = 1e-6;

/// Peak-normalize a waveform in place
///
/// Scales the samples so the peak absolute value is 1.0 (within the epsilon
/// guard). A silent waveform is left untouched apart from the no-op scale.
///
/// # Arguments
///
/// * `samples` - Mono waveform, modified in place
///
/// # Returns
///
/// The linear gain that was applied.
pub fn normalize_peak(samples: &mut [f32]) -> f32 {
    let peak = samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);
    let gain = 1.0 / (peak + PEAK_EPSILON);

    for sample in samples.iter_mut() {
        *sample *= gain;
    }

    log::debug!("Peak normalization: peak={:.6}, gain={:.4}", peak, gain);

    gain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_reaches_unity() {
        let mut samples = vec![0.1f32, -0.5, 0.25, 0.0];
        normalize_peak(&mut samples);

        let peak = samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);
        assert!(
            (peak - 1.0).abs() < 1e-4,
            "Peak should land at ~1.0, got {}",
            peak
        );
    }

    #[test]
    fn test_relative_shape_preserved() {
        let mut samples = vec![0.2f32, -0.4];
        normalize_peak(&mut samples);
        assert!(
            (samples[0] / samples[1] + 0.5).abs() < 1e-5,
            "Sample ratios must survive normalization"
        );
    }

    #[test]
    fn test_silence_stays_silent() {
        let mut samples = vec![0.0f32; 1000];
        normalize_peak(&mut samples);
        assert!(
            samples.iter().all(|&x| x == 0.0),
            "Silence must not be amplified into garbage"
        );
    }
}
