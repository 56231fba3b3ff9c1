//! Audio file loading
//!
//! Decodes an audio file and prepares it for the comparison pipeline:
//! decode with Symphonia, downmix to mono, peak-normalize.

pub mod decoder;

use std::path::Path;

use crate::error::AnalysisError;
use crate::preprocessing::channel_mixer::downmix_to_mono;
use crate::preprocessing::normalization::normalize_peak;

/// Load an audio file as a normalized mono waveform
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (mono samples peak-normalized to 1.0, sample rate in Hz)
///
/// # Errors
///
/// Returns [`AnalysisError::DecodingError`] if the file cannot be decoded,
/// or [`AnalysisError::InvalidSignal`] if the decoder reports a nonsensical
/// channel layout.
pub fn load_waveform(path: &Path) -> Result<(Vec<f32>, u32), AnalysisError> {
    let (interleaved, sample_rate, channels) = decoder::decode_audio(path)?;
    let mut mono = downmix_to_mono(&interleaved, channels)?;
    normalize_peak(&mut mono);
    Ok((mono, sample_rate))
}
