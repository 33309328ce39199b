// File: crates/gplot-examples/src/bin/quickplot.rs
// Summary: Minimal example that emits a two-line png plot with the simple-plot helper.

use gplot_core::{simple_plot, Numa, OutputFormat};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let squares: Numa = (0..20).map(|i| (i * i) as f64).collect();
    let ramp = (0..20).map(|i| 10.0 * i as f64).collect::<Numa>().with_parameters(0.5, 1.0);

    let out = std::path::PathBuf::from("target/out/quickplot");
    let plot = simple_plot(&[&squares, &ramp], OutputFormat::Png, out.display().to_string(), "Quick plot")?;
    println!("Wrote {}", plot.command_path().display());
    Ok(())
}
