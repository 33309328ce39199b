// File: crates/gplot-core/src/serial.rs
// Summary: Deterministic flat-text serialization of a plot description and its parser.
// Notes:
// - Floats use Rust's shortest round-trip formatting, so values reload bit-exact.
// - Text fields escape '\\', '\n' and '\r' to keep the format one value per line.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{GplotError, Result};
use crate::numa::Numa;
use crate::plot::Gplot;
use crate::series::PlotSeries;

const MAGIC: &str = "gplot";
const VERSION: u32 = 1;
// Cap on capacity reserved from counts read off disk.
const PREALLOC_LIMIT: usize = 4096;

impl Gplot {
    /// Write the serialized form to `w`.
    pub fn to_writer<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        writeln!(w, "{MAGIC} {VERSION}")?;
        writeln!(w, "rootname: {}", escape(self.rootname()))?;
        writeln!(w, "output format: {}", self.output_format().tag())?;
        writeln!(w, "output name: {}", escape(self.output_name()))?;
        writeln!(w, "scaling: {}", self.scaling().tag())?;
        writeln!(w, "title: {}", escape(self.title()))?;
        writeln!(w, "x label: {}", escape(self.xlabel()))?;
        writeln!(w, "y label: {}", escape(self.ylabel()))?;
        writeln!(w, "series count: {}", self.series().len())?;
        for (i, s) in self.series().iter().enumerate() {
            writeln!(w, "series {}", i + 1)?;
            writeln!(w, "style: {}", s.style().tag())?;
            writeln!(w, "legend: {}", escape(s.legend()))?;
            writeln!(w, "points: {}", s.len())?;
            for (x, y) in s.points() {
                writeln!(w, "{x} {y}")?;
            }
        }
        Ok(())
    }

    pub fn to_serialized_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.to_writer(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Persist to `path`, replacing any existing file.
    pub fn serialize(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| GplotError::io(path, e))?;
        let mut w = std::io::BufWriter::new(file);
        self.to_writer(&mut w).map_err(|e| GplotError::io(path, e))?;
        w.flush().map_err(|e| GplotError::io(path, e))?;
        log::info!("serialized '{}' to {}", self.title(), path.display());
        Ok(())
    }

    /// Read a plot description previously written by [`Gplot::serialize`].
    pub fn deserialize(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GplotError::io(path, e))?;
        let plot = text.parse::<Gplot>()?;
        log::info!("deserialized '{}' from {}", plot.title(), path.display());
        Ok(plot)
    }

    pub fn from_reader<R: Read>(mut r: R) -> Result<Self> {
        let mut text = String::new();
        r.read_to_string(&mut text).map_err(|e| GplotError::io("<reader>", e))?;
        text.parse()
    }
}

impl FromStr for Gplot {
    type Err = GplotError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cur = Cursor::new(s);

        let (line, header) = cur.next_line()?;
        let version = header
            .strip_prefix(MAGIC)
            .and_then(|v| v.strip_prefix(' '))
            .ok_or_else(|| GplotError::parse(line, "missing gplot header"))?;
        if version != VERSION.to_string() {
            return Err(GplotError::parse(line, format!("unsupported version {version}")));
        }

        let rootname = cur.text_field("rootname")?;
        let format = cur.tag_field("output format")?;
        let outname = cur.text_field("output name")?;
        let scaling = cur.tag_field("scaling")?;
        let title = cur.text_field("title")?;
        let xlabel = cur.text_field("x label")?;
        let ylabel = cur.text_field("y label")?;
        let count: usize = cur.number_field("series count")?;

        let mut series = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for i in 1..=count {
            let (line, head) = cur.next_line()?;
            if head != format!("series {i}") {
                return Err(GplotError::parse(line, format!("expected 'series {i}'")));
            }
            let style = cur.tag_field("style")?;
            let legend = cur.text_field("legend")?;
            let (line, n) = cur.number_field_at("points")?;
            let mut x = Numa::with_capacity(n.min(PREALLOC_LIMIT));
            let mut y = Numa::with_capacity(n.min(PREALLOC_LIMIT));
            for _ in 0..n {
                let (line, row) = cur.next_line()?;
                let (xs, ys) = row
                    .split_once(' ')
                    .ok_or_else(|| GplotError::parse(line, "expected 'x y' pair"))?;
                x.push(parse_float(line, xs)?);
                y.push(parse_float(line, ys)?);
            }
            let s = PlotSeries::try_new(x, y, style, legend)
                .map_err(|e| GplotError::parse(line, e.to_string()))?;
            series.push(s);
        }

        if let Some((line, extra)) = cur.trailing() {
            return Err(GplotError::parse(line, format!("unexpected trailing content '{extra}'")));
        }

        Ok(Gplot::from_parts(rootname, format, outname, scaling, title, xlabel, ylabel, series))
    }
}

struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines(), line: 0 }
    }

    /// Next line with its 1-based number.
    fn next_line(&mut self) -> Result<(usize, &'a str)> {
        let text = self
            .lines
            .next()
            .ok_or_else(|| GplotError::parse(self.line + 1, "unexpected end of input"))?;
        self.line += 1;
        Ok((self.line, text))
    }

    fn trailing(&mut self) -> Option<(usize, &'a str)> {
        while let Ok((line, text)) = self.next_line() {
            if !text.trim().is_empty() {
                return Some((line, text));
            }
        }
        None
    }

    fn raw_field(&mut self, key: &str) -> Result<(usize, &'a str)> {
        let (line, text) = self.next_line()?;
        let value = text
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix(": ").or_else(|| (rest == ":").then_some("")))
            .ok_or_else(|| GplotError::parse(line, format!("expected '{key}:'")))?;
        Ok((line, value))
    }

    fn text_field(&mut self, key: &str) -> Result<String> {
        let (line, raw) = self.raw_field(key)?;
        unescape(raw).map_err(|m| GplotError::parse(line, m))
    }

    fn tag_field<T: FromStr<Err = GplotError>>(&mut self, key: &str) -> Result<T> {
        let (line, raw) = self.raw_field(key)?;
        raw.parse().map_err(|e: GplotError| GplotError::parse(line, e.to_string()))
    }

    fn number_field(&mut self, key: &str) -> Result<usize> {
        self.number_field_at(key).map(|(_, n)| n)
    }

    fn number_field_at(&mut self, key: &str) -> Result<(usize, usize)> {
        let (line, raw) = self.raw_field(key)?;
        let n = raw
            .parse()
            .map_err(|_| GplotError::parse(line, format!("invalid {key} '{raw}'")))?;
        Ok((line, n))
    }
}

fn parse_float(line: usize, s: &str) -> Result<f64> {
    s.parse().map_err(|_| GplotError::parse(line, format!("invalid number '{s}'")))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(text: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => return Err(format!("unknown escape '\\{other}'")),
            None => return Err("dangling '\\' at end of value".to_string()),
        }
    }
    Ok(out)
}
