//! Waveform comparison plot

use std::path::Path;

use plotters::prelude::*;

use crate::error::AnalysisError;

/// Longest polyline drawn per series; longer waveforms are strided down
const MAX_POINTS: usize = 4000;

/// Render both waveforms into one time-domain chart
///
/// The two traces share one amplitude axis, so a level difference is
/// visible directly.
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
pub fn plot_waveform_compare(
    normal: &[f32],
    target: &[f32],
    sample_rate: u32,
    output: &Path,
) -> Result<(), AnalysisError> {
    if normal.is_empty() || target.is_empty() {
        return Err(AnalysisError::InvalidSignal(
            "Empty waveform".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidSignal(
            "Sample rate must be > 0".to_string(),
        ));
    }

    let duration = normal.len().max(target.len()) as f32 / sample_rate as f32;

    let root = BitMapBackend::new(output, (1000, 400)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Waveform Comparison", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0f32..duration, -1.1f32..1.1f32)
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("time [s]")
        .y_desc("amplitude")
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    for (samples, color, label) in [
        (normal, BLUE, "Normal"),
        (target, RED, "Target"),
    ] {
        let stride = (samples.len() / MAX_POINTS).max(1);
        let points: Vec<(f32, f32)> = samples
            .iter()
            .step_by(stride)
            .enumerate()
            .map(|(i, &sample)| ((i * stride) as f32 / sample_rate as f32, sample))
            .collect();

        chart
            .draw_series(LineSeries::new(points, &color.mix(0.7)))
            .map_err(|e| AnalysisError::RenderError(e.to_string()))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &color)
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    root.present()
        .map_err(|e| AnalysisError::RenderError(e.to_string()))?;

    log::debug!("Wrote waveform comparison to {}", output.display());

    Ok(())
}
