//! Channel mixing (interleaved multi-channel to mono)

use crate::error::AnalysisError;

/// Downmix interleaved samples to mono by averaging the channels of each
/// frame
///
/// # Arguments
///
/// * `interleaved` - Interleaved samples as produced by the decoder
/// * `channels` - Channel count of the interleaving
///
/// # Returns
///
/// Mono samples, one per frame. A trailing partial frame is dropped.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSignal`] if `channels` is 0.
pub fn downmix_to_mono(
    interleaved: &[f32],
    channels: usize,
) -> Result<Vec<f32>, AnalysisError> {
    if channels == 0 {
        return Err(AnalysisError::InvalidSignal(
            "Channel count must be > 0".to_string(),
        ));
    }

    if channels == 1 {
        return Ok(interleaved.to_vec());
    }

    log::debug!(
        "Downmixing {} interleaved samples from {} channels",
        interleaved.len(),
        channels
    );

    Ok(interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect())
}
