// File: crates/gplot-core/src/render.rs
// Summary: Gnuplot command-file and data-file generation, with optional gnuplot invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GplotError, Result};
use crate::plot::Gplot;
use crate::series::PlotSeries;
use crate::types::{OutputFormat, HEIGHT, WIDTH};

pub struct RenderOptions {
    /// Png terminal size in pixels.
    pub width: u32,
    pub height: u32,
    /// Run gnuplot on the command file after writing it.
    pub run_gnuplot: bool,
    pub gnuplot_program: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            run_gnuplot: false,
            gnuplot_program: "gnuplot".to_string(),
        }
    }
}

impl Gplot {
    /// Text of the gnuplot command file for this plot.
    pub fn command_script(&self, opts: &RenderOptions) -> String {
        let mut lines = vec![
            format!("set title {}", quote(self.title())),
            format!("set xlabel {}", quote(self.xlabel())),
            format!("set ylabel {}", quote(self.ylabel())),
        ];

        let terminal = match self.output_format() {
            OutputFormat::Png => format!("png size {},{}", opts.width, opts.height),
            OutputFormat::Ps => "postscript".to_string(),
            OutputFormat::Eps => "postscript eps".to_string(),
            OutputFormat::Latex => "latex".to_string(),
            OutputFormat::X11 => "x11".to_string(),
        };
        lines.push(format!("set terminal {terminal}"));
        if !self.output_format().is_interactive() {
            lines.push(format!("set output {}", quote(self.output_name())));
        }

        if let Some(axes) = self.scaling().logscale_axes() {
            lines.push(format!("set logscale {axes}"));
        }

        let n = self.series().len();
        for (i, s) in self.series().iter().enumerate() {
            let lead = if i == 0 { "plot" } else { "    " };
            let cont = if i + 1 < n { ", \\" } else { "" };
            lines.push(format!(
                "{lead} {} title {} with {}{cont}",
                quote(&self.data_path(i).display().to_string()),
                quote(s.legend()),
                s.style().tag(),
            ));
        }

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }

    /// Write the command file and one data file per series; returns the paths written.
    pub fn render(&self, opts: &RenderOptions) -> Result<Vec<PathBuf>> {
        let cmd_path = self.command_path();
        ensure_parent(&cmd_path)?;
        std::fs::write(&cmd_path, self.command_script(opts))
            .map_err(|e| GplotError::io(&cmd_path, e))?;
        log::debug!("wrote {}", cmd_path.display());

        let mut written = vec![cmd_path];
        for (i, s) in self.series().iter().enumerate() {
            let data_path = self.data_path(i);
            write_data_file(&data_path, s)?;
            log::debug!("wrote {} ({} points)", data_path.display(), s.len());
            written.push(data_path);
        }

        log::info!(
            "rendered '{}' as {} ({} series)",
            self.title(),
            self.output_format().tag(),
            self.series().len()
        );

        if opts.run_gnuplot {
            self.run_gnuplot(opts)?;
        }
        Ok(written)
    }

    fn run_gnuplot(&self, opts: &RenderOptions) -> Result<()> {
        let mut cmd = Command::new(&opts.gnuplot_program);
        if self.output_format().is_interactive() {
            cmd.arg("-persist");
        }
        cmd.arg(self.command_path());
        let status = cmd
            .status()
            .map_err(|e| GplotError::io(&opts.gnuplot_program, e))?;
        if !status.success() {
            return Err(GplotError::Gnuplot { status });
        }
        Ok(())
    }
}

fn write_data_file(path: &Path, series: &PlotSeries) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| GplotError::io(path, e))?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    for (x, y) in series.points() {
        wtr.write_record([x.to_string(), y.to_string()])?;
    }
    wtr.flush().map_err(|e| GplotError::io(path, e))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GplotError::io(parent, e))?;
    }
    Ok(())
}

/// Gnuplot double-quoted string; line breaks become `\n`/`\r` escapes so each command stays on one line.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
