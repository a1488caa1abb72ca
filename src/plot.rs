// src/plot.rs
//! SVG line chart of the density curves

use crate::analytics::density::Curve;
use crate::error::{ExperimentError, ExperimentResult};
use plotters::prelude::*;
use std::f64::consts::FRAC_PI_2;
use std::path::Path;

const PALETTE: [RGBColor; 6] = [
    BLUE,
    RED,
    GREEN,
    RGBColor(200, 170, 0),
    MAGENTA,
    CYAN,
];

fn plot_error<E: std::fmt::Display>(err: E) -> ExperimentError {
    ExperimentError::Plot {
        reason: err.to_string(),
    }
}

/// Overlay every curve on [-π/2, π/2]. Reference curves (names starting
/// with `cos`) are drawn thin, empirical ones thick.
pub fn render_density_plot(out_path: &Path, curves: &[Curve]) -> ExperimentResult<()> {
    let y_max = curves.iter().map(Curve::max_y).fold(0.0, f64::max).max(0.1);

    let root = SVGBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Angle to reference axis: empirical vs analytic density", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-FRAC_PI_2..FRAC_PI_2, 0.0..(y_max * 1.1))
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("angle - π/2 [rad]")
        .y_desc("probability density")
        .draw()
        .map_err(plot_error)?;

    for (curve, &color) in curves.iter().zip(PALETTE.iter().cycle()) {
        let width = if curve.name.starts_with("cos") { 1 } else { 2 };
        chart
            .draw_series(LineSeries::new(
                curve.xs.iter().copied().zip(curve.ys.iter().copied()),
                color.stroke_width(width),
            ))
            .map_err(plot_error)?
            .label(curve.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}
