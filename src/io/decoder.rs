//! Audio decoding using Symphonia

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Decode an audio file to interleaved PCM samples
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (interleaved samples, sample rate, channel count)
///
/// # Errors
///
/// Returns [`AnalysisError::DecodingError`] if the file cannot be opened,
/// probed, or decoded, or if it contains no audio data.
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32, usize), AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| {
            AnalysisError::DecodingError(format!(
                "Unsupported format for {}: {}",
                path.display(),
                e
            ))
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::DecodingError(format!(
                "No supported audio track in {}",
                path.display()
            ))
        })?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| {
            AnalysisError::DecodingError(format!("Failed to create decoder: {}", e))
        })?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(0);
    let mut sample_buffer: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Failed to read packet: {}",
                    e
                )));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buffer.is_none() {
                    let spec = *decoded.spec();
                    sample_rate = spec.rate;
                    channels = spec.channels.count();
                    sample_buffer =
                        Some(SampleBuffer::new(decoded.capacity() as u64, spec));
                }

                if let Some(buffer) = sample_buffer.as_mut() {
                    buffer.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buffer.samples());
                }
            }
            // A corrupt packet is recoverable; resynchronize on the next one
            Err(SymphoniaError::DecodeError(e)) => {
                log::warn!("Skipping undecodable packet: {}", e);
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(format!(
                    "Decode failed: {}",
                    e
                )));
            }
        }
    }

    if samples.is_empty() || sample_rate == 0 || channels == 0 {
        return Err(AnalysisError::DecodingError(format!(
            "No audio data decoded from {}",
            path.display()
        )));
    }

    log::debug!(
        "Decoded {} samples at {} Hz, {} channel(s)",
        samples.len(),
        sample_rate,
        channels
    );

    Ok((samples, sample_rate, channels))
}
