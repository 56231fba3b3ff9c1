//! Basic interpretable feature extraction
//!
//! Computes the three descriptors the comparison pipeline runs on. All
//! three are chosen for interpretability over discriminative power: each has
//! a direct physical reading, so a downstream human (or the interpretation
//! stage) can explain a difference instead of merely flagging it.
//!
//! - `energy`: RMS amplitude of the whole waveform. An increase against
//!   the reference points at higher load, more contact/friction, or a
//!   generally raised noise floor.
//! - `centroid`: magnitude-weighted mean frequency of the short-time
//!   spectrum, averaged across frames. A rising centroid means the sound is
//!   getting brighter or more metallic.
//! - `hf_ratio`: mean magnitude above the high-band edge over mean
//!   magnitude below the low-band edge. A climbing ratio is an early sign
//!   of wear, impacts, or rattle.

use crate::config::CompareConfig;
use crate::error::AnalysisError;
use crate::features::spectral::compute_spectrogram;
use crate::features::vector::FeatureVector;

/// Additive guard for the hf_ratio denominator, so silent or low-passed
/// signals divide cleanly instead of blowing up
const HF_RATIO_EPSILON: f32 = 1e-6;

/// Extract the fixed-schema feature vector from a waveform
///
/// # Arguments
///
/// * `samples` - Mono waveform, peak-normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Band edges for the high/low ratio
///
/// # Returns
///
/// A [`FeatureVector`] with the full `energy`/`centroid`/`hf_ratio` schema.
/// Extraction is a pure function: the same waveform and sample rate yield a
/// bit-identical vector on every call.
///
/// # Errors
///
/// Propagates [`AnalysisError::InvalidSignal`] from the spectral analysis
/// unchanged (empty waveform or zero sample rate).
pub fn extract_features(
    samples: &[f32],
    sample_rate: u32,
    config: &CompareConfig,
) -> Result<FeatureVector, AnalysisError> {
    let spectrogram = compute_spectrogram(samples, sample_rate)?;

    // RMS over raw samples, not the spectral domain
    let sum_sq: f32 = samples.iter().map(|&x| x * x).sum();
    let energy = (sum_sq / samples.len() as f32).sqrt();

    // Per-frame centroids averaged across time; silent frames weigh in at 0 Hz
    let centroid_sum: f32 = (0..spectrogram.num_frames())
        .map(|frame| spectrogram.frame_centroid(frame))
        .sum();
    let centroid = centroid_sum / spectrogram.num_frames() as f32;

    let low_edge = config.low_band_hz;
    let high_edge = config.high_band_hz;
    let low = spectrogram.band_mean(|f| f < low_edge);
    let high = spectrogram.band_mean(|f| f > high_edge);
    let hf_ratio = high / (low + HF_RATIO_EPSILON);

    log::debug!(
        "Extracted features: energy={:.6}, centroid={:.1} Hz, hf_ratio={:.4}",
        energy,
        centroid,
        hf_ratio
    );

    Ok(FeatureVector::new(energy, centroid, hf_ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::vector::FeatureName;

    /// Generate a sine wave at the given frequency and amplitude
    fn generate_sine(
        frequency: f32,
        amplitude: f32,
        sample_rate: u32,
        num_samples: usize,
    ) -> Vec<f32> {
        (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_features_finite_and_non_negative() {
        let samples = generate_sine(440.0, 0.8, 44100, 44100);
        let features = extract_features(&samples, 44100, &CompareConfig::default()).unwrap();

        for (name, value) in features.iter() {
            assert!(value.is_finite(), "{} should be finite, got {}", name, value);
        }
        assert!(features.get(FeatureName::Energy).unwrap() >= 0.0);
        assert!(features.get(FeatureName::HfRatio).unwrap() >= 0.0);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let samples = generate_sine(1234.0, 0.6, 22050, 22050);
        let config = CompareConfig::default();

        let first = extract_features(&samples, 22050, &config).unwrap();
        let second = extract_features(&samples, 22050, &config).unwrap();

        assert_eq!(
            first, second,
            "Re-extraction on identical input must be bit-identical"
        );
    }

    #[test]
    fn test_silence_yields_guarded_zeros() {
        let samples = vec![0.0f32; 16000];
        let features = extract_features(&samples, 16000, &CompareConfig::default()).unwrap();

        assert_eq!(features.get(FeatureName::Energy), Some(0.0));
        assert_eq!(features.get(FeatureName::HfRatio), Some(0.0));
        let centroid = features.get(FeatureName::Centroid).unwrap();
        assert!(centroid.is_finite(), "Silence centroid must not be NaN");
    }

    #[test]
    fn test_rms_tracks_amplitude() {
        let quiet = generate_sine(440.0, 0.1, 44100, 44100);
        let loud = generate_sine(440.0, 0.9, 44100, 44100);
        let config = CompareConfig::default();

        let quiet_energy = extract_features(&quiet, 44100, &config)
            .unwrap()
            .get(FeatureName::Energy)
            .unwrap();
        let loud_energy = extract_features(&loud, 44100, &config)
            .unwrap()
            .get(FeatureName::Energy)
            .unwrap();

        // RMS of a sine is amplitude / sqrt(2)
        assert!(
            (quiet_energy - 0.1 / 2.0f32.sqrt()).abs() < 0.01,
            "Quiet RMS should be ~0.071, got {}",
            quiet_energy
        );
        assert!(
            loud_energy > quiet_energy * 5.0,
            "Ninefold amplitude should show up in RMS: {} vs {}",
            loud_energy,
            quiet_energy
        );
    }

    #[test]
    fn test_high_tone_raises_ratio_and_centroid() {
        let low_tone = generate_sine(300.0, 0.8, 44100, 44100);
        let high_tone = generate_sine(6000.0, 0.8, 44100, 44100);
        let config = CompareConfig::default();

        let low_features = extract_features(&low_tone, 44100, &config).unwrap();
        let high_features = extract_features(&high_tone, 44100, &config).unwrap();

        assert!(
            high_features.get(FeatureName::HfRatio).unwrap()
                > low_features.get(FeatureName::HfRatio).unwrap(),
            "A 6 kHz tone should have a larger hf_ratio than a 300 Hz tone"
        );
        assert!(
            high_features.get(FeatureName::Centroid).unwrap()
                > low_features.get(FeatureName::Centroid).unwrap(),
            "A 6 kHz tone should have a higher centroid than a 300 Hz tone"
        );
    }

    #[test]
    fn test_invalid_signal_propagates() {
        let result = extract_features(&[], 44100, &CompareConfig::default());
        assert!(
            matches!(result, Err(AnalysisError::InvalidSignal(_))),
            "Empty waveform should propagate InvalidSignal unchanged"
        );
    }
}
