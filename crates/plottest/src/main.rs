// File: crates/plottest/src/main.rs
// Summary: Builds sine/cosine plots, renders them, and checks that serialization round-trips byte-for-byte.

use anyhow::{bail, Context, Result};
use env_logger::Env;
use gplot_core::{Gplot, Numa, OutputFormat, PlotStyle, RenderOptions};
use log::info;
use std::path::Path;

const STYLE: PlotStyle = PlotStyle::Lines;
const OUTPUT: OutputFormat = OutputFormat::X11;
const NPOINTS: usize = 180;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if std::env::args().len() != 1 {
        bail!("Syntax: plottest");
    }

    let dir = std::env::temp_dir().join("gplot");
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let opts = RenderOptions::default();

    let (nax, nay1, nay2) = generate_data(NPOINTS);

    // 1) Show the plot, then also save it as png
    let mut plot1 = example_plot(&root(&dir, "plotroot1"), "Example plots", &nax, &nay1, &nay2)?;
    plot1.render(&opts)?;
    plot1.set_output_format(OutputFormat::Png);
    plot1.render(&opts)?;
    info!("png output: {}", plot1.output_name());

    // 2) Serialize, read back, serialize again; both files must match
    let file1 = dir.join("gplot1");
    let file2 = dir.join("gplot2");
    plot1.serialize(&file1)?;
    let plot2 = Gplot::deserialize(&file1).context("gplot read failure")?;
    plot2.serialize(&file2)?;
    compare_files(&file1, &file2)?;
    check_recovered(&plot2, &[&nay1, &nay2], &nax)?;

    // 3) Regenerate from the second file under a new title
    let mut plot3 = Gplot::deserialize(&file2).context("gplot read failure")?;
    plot3.set_title("Example plots regen");
    plot3.set_output_format(OutputFormat::X11);
    plot3.render(&opts)?;

    // 4) Build without rendering, then write, read back and render
    let plot4 = example_plot(&root(&dir, "plotroot2"), "Example plots 2", &nax, &nay1, &nay2)?;
    let file4 = dir.join("gplot4");
    plot4.serialize(&file4)?;
    let plot5 = Gplot::deserialize(&file4).context("gplot read failure")?;
    plot5.render(&opts)?;

    info!("all outputs written under {}", dir.display());
    Ok(())
}

/// theta = i * pi / 180 for i in 0..n, with sin(2.4 theta) and cos(2.4 theta).
fn generate_data(n: usize) -> (Numa, Numa, Numa) {
    let mut nax = Numa::with_capacity(n);
    let mut nay1 = Numa::with_capacity(n);
    let mut nay2 = Numa::with_capacity(n);
    for i in 0..n {
        let x = std::f64::consts::PI / 180.0 * i as f64;
        nax.push(x);
        nay1.push((2.4 * x).sin());
        nay2.push((2.4 * x).cos());
    }
    (nax, nay1, nay2)
}

fn example_plot(rootname: &str, title: &str, nax: &Numa, nay1: &Numa, nay2: &Numa) -> Result<Gplot> {
    let mut plot = Gplot::new(rootname, OUTPUT, title, "theta", "f(theta)");
    plot.add_series(Some(nax), nay1, STYLE, "sin (2.4 * theta)")?;
    plot.add_series(Some(nax), nay2, STYLE, "cos (2.4 * theta)")?;
    Ok(plot)
}

fn root(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

fn compare_files(a: &Path, b: &Path) -> Result<()> {
    let bytes1 = std::fs::read(a).with_context(|| format!("reading {}", a.display()))?;
    let bytes2 = std::fs::read(b).with_context(|| format!("reading {}", b.display()))?;
    if bytes1.len() != bytes2.len() {
        bail!("size mismatch: {} = {}, {} = {}", a.display(), bytes1.len(), b.display(), bytes2.len());
    }
    info!("Correct: size1 = size2 = {}", bytes1.len());
    if bytes1 != bytes2 {
        bail!("contents differ: {} vs {}", a.display(), b.display());
    }
    info!("Correct: str1 == str2");
    Ok(())
}

fn check_recovered(plot: &Gplot, ys: &[&Numa], x: &Numa) -> Result<()> {
    if plot.series().len() != ys.len() {
        bail!("expected {} series after reload, found {}", ys.len(), plot.series().len());
    }
    for (i, (s, y)) in plot.series().iter().zip(ys).enumerate() {
        if s.x().as_slice() != x.as_slice() || s.y().as_slice() != y.as_slice() {
            bail!("series {} data changed across the round trip", i + 1);
        }
    }
    info!("Correct: reloaded data matches the original");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn out_dir(name: &str) -> PathBuf {
        let dir = PathBuf::from("target/test_out/plottest").join(name);
        std::fs::create_dir_all(&dir).expect("create out dir");
        dir
    }

    #[test]
    fn compare_files_accepts_identical_bytes() {
        let dir = out_dir("same");
        std::fs::write(dir.join("a"), "gplot 1\n").expect("write a");
        std::fs::write(dir.join("b"), "gplot 1\n").expect("write b");
        compare_files(&dir.join("a"), &dir.join("b")).expect("identical files compare equal");
    }

    #[test]
    fn compare_files_rejects_size_and_content_changes() {
        let dir = out_dir("differ");
        std::fs::write(dir.join("a"), "gplot 1\n").expect("write a");
        std::fs::write(dir.join("longer"), "gplot 12\n").expect("write longer");
        std::fs::write(dir.join("same_len"), "gplot 2\n").expect("write same_len");

        let err = compare_files(&dir.join("a"), &dir.join("longer")).unwrap_err();
        assert!(err.to_string().contains("size mismatch"), "{err}");

        let err = compare_files(&dir.join("a"), &dir.join("same_len")).unwrap_err();
        assert!(err.to_string().contains("contents differ"), "{err}");

        assert!(compare_files(&dir.join("a"), &dir.join("missing")).is_err());
    }

    #[test]
    fn check_recovered_detects_changed_data() {
        let (nax, nay1, nay2) = generate_data(8);
        let plot = example_plot("target/test_out/plottest/recovered", "Example plots", &nax, &nay1, &nay2)
            .expect("build plot");

        check_recovered(&plot, &[&nay1, &nay2], &nax).expect("original data matches");

        let shifted: Numa = nay2.iter().map(|v| v + 1e-12).collect();
        let err = check_recovered(&plot, &[&nay1, &shifted], &nax).unwrap_err();
        assert!(err.to_string().contains("series 2"), "{err}");

        let err = check_recovered(&plot, &[&nay1], &nax).unwrap_err();
        assert!(err.to_string().contains("expected 1 series"), "{err}");
    }
}
