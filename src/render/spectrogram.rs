//! Spectrogram comparison plot
//!
//! Renders the two recordings as dB-scaled spectrograms side by side. Both
//! panels share one color scale referenced to the joint maximum magnitude:
//! a color difference between the panels means an energy difference, not a
//! scaling artifact.

use std::path::Path;

use plotters::prelude::*;

use crate::error::AnalysisError;
use crate::features::spectral::{compute_spectrogram, Spectrogram, HOP_SIZE};

/// Dynamic range of the color scale in dB below the joint maximum
const DB_FLOOR: f32 = -80.0;

/// Pooling targets keep the rectangle count bounded for long recordings
const MAX_COLUMNS: usize = 400;
const MAX_ROWS: usize = 256;

/// Render dB-scaled spectrograms of both recordings with a shared color
/// scale
///
/// # Arguments
///
/// * `normal` - Reference waveform
/// * `target` - Target waveform
/// * `sample_rate` - Sample rate in Hz (shared by both)
/// * `output` - PNG file to write
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSignal`] for empty input or a zero
/// sample rate, and [`AnalysisError::RenderError`] if the backend fails.
pub fn plot_spectrogram_compare(
    normal: &[f32],
    target: &[f32],
    sample_rate: u32,
    output: &Path,
) -> Result<(), AnalysisError> {
    let normal_spec = compute_spectrogram(normal, sample_rate)?;
    let target_spec = compute_spectrogram(target, sample_rate)?;

    // Joint reference magnitude, so the two panels share one scale
    let reference = normal_spec
        .frames()
        .chain(target_spec.frames())
        .flat_map(|frame| frame.iter().copied())
        .fold(0.0f32, f32::max)
        .max(1e-10);

    let root = BitMapBackend::new(output, (1400, 500)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    let panels = root.split_evenly((1, 2));
    for (panel, (title, spectrogram)) in panels.iter().zip([
        ("Normal", &normal_spec),
        ("Target", &target_spec),
    ]) {
        draw_panel(panel, spectrogram, sample_rate, reference, title)?;
    }

    root.present()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    log::debug!("Wrote spectrogram comparison to {}", output.display());

    Ok(())
}

/// Draw one dB-scaled spectrogram panel
fn draw_panel(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    spectrogram: &Spectrogram,
    sample_rate: u32,
    reference: f32,
    title: &str,
) -> Result<(), AnalysisError> {
    let num_frames = spectrogram.num_frames();
    let num_bins = spectrogram.num_bins();
    let nyquist = sample_rate as f32 / 2.0;
    let duration = (num_frames * HOP_SIZE) as f32 / sample_rate as f32;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} (dB re joint max, floor {} dB)", title, DB_FLOOR),
            ("sans-serif", 16),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(0f32..duration, 0f32..nyquist)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("time [s]")
        .y_desc("frequency [Hz]")
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    let frame_step = num_frames.div_ceil(MAX_COLUMNS);
    let bin_step = num_bins.div_ceil(MAX_ROWS);
    let magnitudes: Vec<&[f32]> = spectrogram.frames().collect();

    let mut cells = Vec::new();
    let mut frame = 0;
    while frame < num_frames {
        let frame_end = (frame + frame_step).min(num_frames);
        let mut bin = 0;
        while bin < num_bins {
            let bin_end = (bin + bin_step).min(num_bins);

            // Max-pool the cell so narrow tonal peaks stay visible
            let mut peak = 0.0f32;
            for row in &magnitudes[frame..frame_end] {
                for &magnitude in &row[bin..bin_end] {
                    peak = peak.max(magnitude);
                }
            }

            let db = (20.0 * (peak / reference).max(1e-10).log10()).max(DB_FLOOR);
            let t = (db - DB_FLOOR) / -DB_FLOOR;

            let t0 = frame as f32 * HOP_SIZE as f32 / sample_rate as f32;
            let t1 = frame_end as f32 * HOP_SIZE as f32 / sample_rate as f32;
            let f0 = bin as f32 * nyquist / (num_bins - 1) as f32;
            let f1 = bin_end as f32 * nyquist / (num_bins - 1) as f32;

            cells.push(Rectangle::new(
                [(t0, f0), (t1, f1)],
                // Dark blue for quiet cells through bright yellow for loud ones
                HSLColor(0.66 * (1.0 - t as f64), 0.9, 0.08 + 0.55 * t as f64).filled(),
            ));

            bin = bin_end;
        }
        frame = frame_end;
    }

    chart
        .draw_series(cells)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Visual check: cargo test -- --ignored
    #[test]
    #[ignore]
    fn plot_low_vs_high_tone() {
        let sample_rate = 16000u32;
        let normal: Vec<f32> = (0..32000)
            .map(|i| (2.0 * std::f32::consts::PI * 200.0 * i as f32 / 16000.0).sin())
            .collect();
        let target: Vec<f32> = (0..32000)
            .map(|i| (2.0 * std::f32::consts::PI * 5000.0 * i as f32 / 16000.0).sin())
            .collect();

        let output = std::env::temp_dir().join("sonodiff_spectrogram_compare.png");
        plot_spectrogram_compare(&normal, &target, sample_rate, &output).unwrap();

        let metadata = std::fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0, "Plot file should not be empty");
    }

    #[test]
    fn test_empty_input_rejected() {
        let output = std::env::temp_dir().join("sonodiff_should_not_exist.png");
        let result = plot_spectrogram_compare(&[], &[0.0], 16000, &output);
        assert!(result.is_err(), "Empty waveform should be rejected");
    }
}
