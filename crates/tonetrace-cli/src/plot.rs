//! PNG line-chart rendering for envelope traces.

use plotters::prelude::*;
use std::path::Path;

/// Render `(x, y)` points as a line chart.
///
/// The y range is padded by 5% so flat traces still get a visible axis.
pub fn render_line_chart(
    path: &Path,
    points: &[(f32, f32)],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> anyhow::Result<()> {
    if points.is_empty() {
        anyhow::bail!("nothing to plot: the trace is empty");
    }

    let x_max = points.last().map(|&(x, _)| x).unwrap_or(1.0);
    let (mut y_min, mut y_max) = points
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });

    let span = (y_max - y_min).max(f32::MIN_POSITIVE);
    y_min -= span * 0.05;
    y_max += span * 0.05;

    let root = BitMapBackend::new(path, (1500, 450)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f32..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;

    root.present()?;
    Ok(())
}
