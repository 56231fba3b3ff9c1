//! Short-time spectral analysis
//!
//! Decomposes a mono waveform into a time × frequency magnitude grid using a
//! fixed-size Hann-windowed FFT, and aggregates mean magnitude over
//! frequency bands. The frame and hop sizes are implementation constants:
//! every caller sees the same frequency resolution.
//!
//! # Example
//!
//! ```no_run
//! use sonodiff::features::spectral::compute_spectrogram;
//!
//! let samples = vec![0.0f32; 16_000];
//! let spectrogram = compute_spectrogram(&samples, 16_000)?;
//! let low = spectrogram.band_mean(|f| f < 1000.0);
//! # Ok::<(), sonodiff::AnalysisError>(())
//! ```

use crate::error::AnalysisError;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Analysis window length in samples
pub const FRAME_SIZE: usize = 2048;

/// Hop between consecutive analysis windows in samples
pub const HOP_SIZE: usize = 512;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Short-time magnitude spectrum of a waveform
///
/// Rows are analysis frames, columns are frequency bins. Magnitudes are
/// non-negative; bin center frequencies ascend from 0 Hz to Nyquist.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    frequency_bins: Vec<f32>,
    magnitudes: Vec<Vec<f32>>,
}

impl Spectrogram {
    /// Bin center frequencies in Hz, ascending
    pub fn frequency_bins(&self) -> &[f32] {
        &self.frequency_bins
    }

    /// Number of analysis frames
    pub fn num_frames(&self) -> usize {
        self.magnitudes.len()
    }

    /// Number of frequency bins per frame
    pub fn num_bins(&self) -> usize {
        self.frequency_bins.len()
    }

    /// Iterate over per-frame magnitude rows
    pub fn frames(&self) -> impl Iterator<Item = &[f32]> {
        self.magnitudes.iter().map(|row| row.as_slice())
    }

    /// Mean magnitude over all (bin, frame) cells whose bin frequency
    /// satisfies `band`
    ///
    /// Returns `0.0` when no bin matches: a band narrower than the frequency
    /// resolution is a valid, if degenerate, input rather than an error.
    pub fn band_mean<P>(&self, band: P) -> f32
    where
        P: Fn(f32) -> bool,
    {
        let selected: Vec<usize> = self
            .frequency_bins
            .iter()
            .enumerate()
            .filter(|(_, &freq)| band(freq))
            .map(|(bin, _)| bin)
            .collect();

        if selected.is_empty() || self.magnitudes.is_empty() {
            return 0.0;
        }

        let mut sum = 0.0f32;
        for frame in &self.magnitudes {
            for &bin in &selected {
                sum += frame[bin];
            }
        }

        sum / (selected.len() * self.magnitudes.len()) as f32
    }

    /// Magnitude-weighted mean frequency of one frame in Hz
    ///
    /// A silent frame has no weight to distribute and reports 0 Hz.
    pub fn frame_centroid(&self, frame: usize) -> f32 {
        let row = &self.magnitudes[frame];

        let mut weighted_sum = 0.0f32;
        let mut magnitude_sum = 0.0f32;
        for (&freq, &magnitude) in self.frequency_bins.iter().zip(row.iter()) {
            weighted_sum += freq * magnitude;
            magnitude_sum += magnitude;
        }

        if magnitude_sum > EPSILON {
            weighted_sum / magnitude_sum
        } else {
            0.0
        }
    }
}

/// Compute the short-time magnitude spectrum of a waveform
///
/// Frames are hopped from sample 0 in steps of [`HOP_SIZE`]; the final
/// partial frame is zero-padded to [`FRAME_SIZE`], so any non-empty waveform
/// produces at least one frame.
///
/// # Arguments
///
/// * `samples` - Mono waveform, peak-normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// [`Spectrogram`] with `FRAME_SIZE / 2 + 1` frequency bins per frame
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSignal`] if the waveform is empty or the
/// sample rate is 0.
pub fn compute_spectrogram(
    samples: &[f32],
    sample_rate: u32,
) -> Result<Spectrogram, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidSignal(
            "Empty waveform".to_string(),
        ));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidSignal(
            "Sample rate must be > 0".to_string(),
        ));
    }

    let num_bins = FRAME_SIZE / 2 + 1;
    let num_frames = samples.len().div_ceil(HOP_SIZE);

    log::debug!(
        "Computing spectrogram: {} samples at {} Hz -> {} frames x {} bins",
        samples.len(),
        sample_rate,
        num_frames,
        num_bins
    );

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(FRAME_SIZE);

    // Hann window, computed once and shared by all frames
    let window: Vec<f32> = (0..FRAME_SIZE)
        .map(|i| {
            let t = 2.0 * std::f32::consts::PI * i as f32 / (FRAME_SIZE - 1) as f32;
            0.5 * (1.0 - t.cos())
        })
        .collect();

    let mut magnitudes = Vec::with_capacity(num_frames);
    let mut buffer = vec![Complex::new(0.0f32, 0.0f32); FRAME_SIZE];

    for frame_idx in 0..num_frames {
        let start = frame_idx * HOP_SIZE;

        for (i, slot) in buffer.iter_mut().enumerate() {
            let sample = samples.get(start + i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * window[i], 0.0);
        }

        fft.process(&mut buffer);

        let row: Vec<f32> = buffer[..num_bins].iter().map(|c| c.norm()).collect();
        magnitudes.push(row);
    }

    let frequency_bins: Vec<f32> = (0..num_bins)
        .map(|bin| bin as f32 * sample_rate as f32 / FRAME_SIZE as f32)
        .collect();

    Ok(Spectrogram {
        frequency_bins,
        magnitudes,
    })
}
