// File: crates/gplot-core/src/simple.rs
// Summary: One-call line plots of one or more sequences against their implicit x-values.

use crate::error::{GplotError, Result};
use crate::numa::Numa;
use crate::plot::Gplot;
use crate::render::RenderOptions;
use crate::types::{OutputFormat, PlotStyle};

/// Plot each sequence as a line series (legends `plot 1..n`) and render with default options.
pub fn simple_plot(
    sequences: &[&Numa],
    format: OutputFormat,
    rootname: impl Into<String>,
    title: impl Into<String>,
) -> Result<Gplot> {
    if sequences.is_empty() {
        return Err(GplotError::EmptySeries);
    }
    let mut plot = Gplot::new(rootname, format, title, "", "");
    for (i, y) in sequences.iter().enumerate() {
        plot.add_series(None, y, PlotStyle::Lines, format!("plot {}", i + 1))?;
    }
    plot.render(&RenderOptions::default())?;
    Ok(plot)
}
