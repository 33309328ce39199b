// File: crates/gplot-core/src/lib.rs
// Summary: Core library entry point; exports the plot description, gnuplot emission and serialization API.

pub mod error;
pub mod numa;
pub mod types;
pub mod series;
pub mod plot;
pub mod render;
pub mod serial;
pub mod simple;

pub use error::{GplotError, Result};
pub use numa::Numa;
pub use types::{OutputFormat, PlotStyle, Scaling};
pub use series::PlotSeries;
pub use plot::Gplot;
pub use render::RenderOptions;
pub use simple::simple_plot;
