// File: crates/gplot-core/src/series.rs
// Summary: One plotted series: paired x/y sequences, draw style and legend.

use crate::error::{GplotError, Result};
use crate::numa::Numa;
use crate::types::PlotStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    x: Numa,
    y: Numa,
    style: PlotStyle,
    legend: String,
}

impl PlotSeries {
    /// Construct a series, enforcing equal, non-zero x/y lengths.
    pub fn try_new(x: Numa, y: Numa, style: PlotStyle, legend: impl Into<String>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(GplotError::LengthMismatch { x: x.len(), y: y.len() });
        }
        if y.is_empty() {
            return Err(GplotError::EmptySeries);
        }
        Ok(Self { x, y, style, legend: legend.into() })
    }

    /// Series whose x-values come from `y`'s implicit parameters.
    pub fn from_y(y: Numa, style: PlotStyle, legend: impl Into<String>) -> Result<Self> {
        let x = (0..y.len()).map(|i| y.x_at(i)).collect::<Numa>();
        Self::try_new(x, y, style, legend)
    }

    pub fn x(&self) -> &Numa { &self.x }
    pub fn y(&self) -> &Numa { &self.y }
    pub fn style(&self) -> PlotStyle { self.style }
    pub fn legend(&self) -> &str { &self.legend }
    pub fn len(&self) -> usize { self.y.len() }

    pub fn is_empty(&self) -> bool { self.y.is_empty() }

    /// Iterate `(x, y)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().zip(self.y.iter())
    }
}
