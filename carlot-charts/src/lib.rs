mod aggregate;

pub use aggregate::aggregate;

use std::path::Path;

use carlot_api_types::{AggregationResult, ReportArtifact, SaleDimension};
use itertools::Itertools;
use plotters::prelude::*;
use thiserror::Error;

const CHART_SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Draws one bar per group in the order the result holds them (ascending
/// lexical by key). An empty result still draws a valid chart, just with no
/// bars.
pub fn draw_sales_bar_chart<'a, T>(
    backend: T,
    result: &AggregationResult,
    dimension: SaleDimension,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'a>>
where
    T: 'a + DrawingBackend,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<&str> = result.totals().keys().map(|k| k.as_str()).collect();
    let (min_total, max_total) = result
        .totals()
        .values()
        .copied()
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    // keep a little headroom above the tallest bar, and a usable axis when
    // there is nothing to draw
    let y_lower = if min_total < 0.0 { min_total * 1.05 } else { 0.0 };
    let y_upper = if max_total > 0.0 { max_total * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .margin(10)
        .caption(
            format!("Total Sales by {}", dimension.display_name()),
            ("sans-serif", 24.0).into_font(),
        )
        .build_cartesian_2d(
            (0..labels.len().max(1) as i32).into_segmented(),
            y_lower..y_upper,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(dimension.display_name())
        .y_desc("Total Sales Price")
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                .get(*i as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.6).filled())
            .margin(10)
            .data(
                result
                    .totals()
                    .values()
                    .enumerate()
                    .map(|(index, total)| (index as i32, *total)),
            ),
    )?;

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;

    Ok(())
}

/// Renders the report to a PNG at `target`, replacing whatever was there.
///
/// Both report kinds share one well known artifact path by default, so two
/// concurrent report requests race on the file and the last write wins.
/// `target` is an explicit parameter so a caller that wants race freedom can
/// hand each report kind its own path.
pub fn render_sales_report(
    result: &AggregationResult,
    dimension: SaleDimension,
    target: &Path,
) -> Result<ReportArtifact, ReportError> {
    let backend = BitMapBackend::new(target, CHART_SIZE);
    draw_sales_bar_chart(backend, result, dimension)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    Ok(ReportArtifact {
        dimension,
        totals: result.clone(),
        image_path: target.display().to_string(),
    })
}
