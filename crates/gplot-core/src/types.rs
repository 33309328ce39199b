// File: crates/gplot-core/src/types.rs
// Summary: Shared tags (output format, plot style, axis scaling) and default terminal size.

use std::str::FromStr;

use crate::error::GplotError;

/// Default png terminal width in pixels.
pub const WIDTH: u32 = 1024;
/// Default png terminal height in pixels.
pub const HEIGHT: u32 = 640;

/// Target gnuplot terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    Ps,
    Eps,
    X11,
    Latex,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [Self::Png, Self::Ps, Self::Eps, Self::X11, Self::Latex];

    /// Stable tag used in the serialized form.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ps => "ps",
            Self::Eps => "eps",
            Self::X11 => "x11",
            Self::Latex => "latex",
        }
    }

    /// Output file extension, or `None` for the interactive display.
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Png => Some("png"),
            Self::Ps => Some("ps"),
            Self::Eps => Some("eps"),
            Self::Latex => Some("tex"),
            Self::X11 => None,
        }
    }

    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::X11)
    }
}

impl FromStr for OutputFormat {
    type Err = GplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.tag() == s)
            .ok_or_else(|| GplotError::UnknownTag { kind: "output format", value: s.to_string() })
    }
}

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlotStyle {
    #[default]
    Lines,
    Points,
    Impulses,
    LinesPoints,
    Dots,
}

impl PlotStyle {
    pub const ALL: [PlotStyle; 5] =
        [Self::Lines, Self::Points, Self::Impulses, Self::LinesPoints, Self::Dots];

    /// Tag used both in the serialized form and after gnuplot's `with`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Points => "points",
            Self::Impulses => "impulses",
            Self::LinesPoints => "linespoints",
            Self::Dots => "dots",
        }
    }
}

impl FromStr for PlotStyle {
    type Err = GplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| GplotError::UnknownTag { kind: "plot style", value: s.to_string() })
    }
}

/// Axis scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Scaling {
    #[default]
    Linear,
    LogX,
    LogY,
    LogXY,
}

impl Scaling {
    pub const ALL: [Scaling; 4] = [Self::Linear, Self::LogX, Self::LogY, Self::LogXY];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LogX => "log-x",
            Self::LogY => "log-y",
            Self::LogXY => "log-xy",
        }
    }

    /// Axes passed to `set logscale`, if any.
    pub const fn logscale_axes(self) -> Option<&'static str> {
        match self {
            Self::Linear => None,
            Self::LogX => Some("x"),
            Self::LogY => Some("y"),
            Self::LogXY => Some("xy"),
        }
    }
}

impl FromStr for Scaling {
    type Err = GplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| GplotError::UnknownTag { kind: "scaling", value: s.to_string() })
    }
}
