// File: crates/gplot-core/src/plot.rs
// Summary: Plot description (title, labels, output target, scaling, series) and its mutators.

use std::path::PathBuf;

use crate::error::Result;
use crate::numa::Numa;
use crate::series::PlotSeries;
use crate::types::{OutputFormat, PlotStyle, Scaling};

/// Everything needed to emit a gnuplot command file and its data files.
///
/// All files derive from `rootname`: `<rootname>.cmd`, `<rootname>.data.<i>` and,
/// unless overridden, the output file `<rootname>.<ext>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gplot {
    rootname: String,
    format: OutputFormat,
    outname: String,
    scaling: Scaling,
    title: String,
    xlabel: String,
    ylabel: String,
    series: Vec<PlotSeries>,
}

impl Gplot {
    pub fn new(
        rootname: impl Into<String>,
        format: OutputFormat,
        title: impl Into<String>,
        xlabel: impl Into<String>,
        ylabel: impl Into<String>,
    ) -> Self {
        let rootname = rootname.into();
        let outname = default_outname(&rootname, format);
        Self {
            rootname,
            format,
            outname,
            scaling: Scaling::Linear,
            title: title.into(),
            xlabel: xlabel.into(),
            ylabel: ylabel.into(),
            series: Vec::new(),
        }
    }

    /// Reassemble a description read back from its serialized form.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        rootname: String,
        format: OutputFormat,
        outname: String,
        scaling: Scaling,
        title: String,
        xlabel: String,
        ylabel: String,
        series: Vec<PlotSeries>,
    ) -> Self {
        Self { rootname, format, outname, scaling, title, xlabel, ylabel, series }
    }

    /// Append a series. With `x = None` the abscissa comes from `y`'s parameters.
    pub fn add_series(
        &mut self,
        x: Option<&Numa>,
        y: &Numa,
        style: PlotStyle,
        legend: impl Into<String>,
    ) -> Result<()> {
        let series = match x {
            Some(x) => PlotSeries::try_new(x.clone(), y.clone(), style, legend)?,
            None => PlotSeries::from_y(y.clone(), style, legend)?,
        };
        log::debug!("{}: added series {} ({} points)", self.rootname, self.series.len() + 1, series.len());
        self.series.push(series);
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Switch terminal; the output name is re-derived from the rootname.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.format = format;
        self.outname = default_outname(&self.rootname, format);
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.set_output_format(format);
        self
    }

    pub fn set_output_name(&mut self, outname: impl Into<String>) {
        self.outname = outname.into();
    }

    pub fn set_scaling(&mut self, scaling: Scaling) {
        self.scaling = scaling;
    }

    pub fn rootname(&self) -> &str { &self.rootname }
    pub fn output_format(&self) -> OutputFormat { self.format }
    pub fn output_name(&self) -> &str { &self.outname }
    pub fn scaling(&self) -> Scaling { self.scaling }
    pub fn title(&self) -> &str { &self.title }
    pub fn xlabel(&self) -> &str { &self.xlabel }
    pub fn ylabel(&self) -> &str { &self.ylabel }
    pub fn series(&self) -> &[PlotSeries] { &self.series }

    pub fn command_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.cmd", self.rootname))
    }

    /// Data file for the series at `index` (0-based; files are numbered from 1).
    pub fn data_path(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("{}.data.{}", self.rootname, index + 1))
    }
}

fn default_outname(rootname: &str, format: OutputFormat) -> String {
    match format.extension() {
        Some(ext) => format!("{rootname}.{ext}"),
        None => String::new(),
    }
}
