// File: crates/gplot-core/tests/smoke.rs
// Purpose: Create-then-render writes a non-empty command file and one data file per series, for every terminal.

use gplot_core::{Gplot, GplotError, Numa, OutputFormat, PlotStyle, RenderOptions};

fn ramp(n: usize) -> (Numa, Numa) {
    let x: Numa = (0..n).map(|i| i as f64 * 0.5).collect();
    let y: Numa = (0..n).map(|i| (i as f64 * 0.5).sin()).collect();
    (x, y)
}

#[test]
fn render_every_format() {
    let (x, y) = ramp(16);
    for format in OutputFormat::ALL {
        let root = format!("target/test_out/smoke_{}", format.tag());
        let mut plot = Gplot::new(root, format, "Smoke", "x", "sin(x)");
        plot.add_series(Some(&x), &y, PlotStyle::LinesPoints, "sin").expect("add series");

        let written = plot.render(&RenderOptions::default()).expect("render should succeed");
        assert_eq!(written.len(), 2, "command file plus one data file");

        let meta = std::fs::metadata(plot.command_path()).expect("command file exists");
        assert!(meta.len() > 0, "command file should be non-empty");

        let data = std::fs::read_to_string(plot.data_path(0)).expect("data file exists");
        assert_eq!(data.lines().count(), 16);
    }
}

#[test]
fn render_without_series_still_writes_header() {
    let plot = Gplot::new("target/test_out/smoke_empty", OutputFormat::Ps, "Empty", "", "");
    let written = plot.render(&RenderOptions::default()).expect("render");
    assert_eq!(written, vec![plot.command_path()]);
    let script = std::fs::read_to_string(plot.command_path()).expect("read cmd");
    assert!(script.starts_with("set title \"Empty\"\n"));
    assert!(!script.contains("plot \""));
}

#[test]
fn data_file_holds_space_separated_pairs() {
    let x = Numa::from(vec![0.0, 1.0, 2.0]);
    let y = Numa::from(vec![-0.5, 0.25, 3.0]);
    let mut plot = Gplot::new("target/test_out/smoke_pairs", OutputFormat::Png, "Pairs", "x", "y");
    plot.add_series(Some(&x), &y, PlotStyle::Points, "pts").expect("add series");
    plot.render(&RenderOptions::default()).expect("render");

    let data = std::fs::read_to_string(plot.data_path(0)).expect("read data");
    assert_eq!(data, "0 -0.5\n1 0.25\n2 3\n");
}

#[test]
fn terminal_and_output_follow_format() {
    let (x, y) = ramp(4);
    let mut plot = Gplot::new("target/test_out/smoke_term", OutputFormat::X11, "T", "x", "y");
    plot.add_series(Some(&x), &y, PlotStyle::Lines, "l").expect("add series");

    let opts = RenderOptions::default();
    let x11 = plot.command_script(&opts);
    assert!(x11.contains("set terminal x11\n"));
    assert!(!x11.contains("set output"));
    assert_eq!(plot.output_name(), "");

    plot.set_output_format(OutputFormat::Eps);
    let eps = plot.command_script(&opts);
    assert!(eps.contains("set terminal postscript eps\n"));
    assert!(eps.contains("set output \"target/test_out/smoke_term.eps\"\n"));

    plot.set_output_format(OutputFormat::Latex);
    assert_eq!(plot.output_name(), "target/test_out/smoke_term.tex");

    let mut small = RenderOptions::default();
    small.width = 320;
    small.height = 200;
    plot.set_output_format(OutputFormat::Png);
    assert!(plot.command_script(&small).contains("set terminal png size 320,200\n"));
}

#[test]
fn line_breaks_stay_inside_one_command() {
    let x = Numa::from(vec![0.0, 1.0]);
    let y = Numa::from(vec![1.0, 2.0]);
    let mut plot = Gplot::new("target/test_out/smoke_multiline", OutputFormat::Png, "line one\nline two", "say \"x\"", "a\\b\r");
    plot.add_series(Some(&x), &y, PlotStyle::Lines, "a\nb").expect("add series");

    let script = plot.command_script(&RenderOptions::default());
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines[0], r#"set title "line one\nline two""#);
    assert_eq!(lines[1], r#"set xlabel "say \"x\"""#);
    assert_eq!(lines[2], r#"set ylabel "a\\b\r""#);
    assert_eq!(lines.last().copied(), Some(r#"plot "target/test_out/smoke_multiline.data.1" title "a\nb" with lines"#));
    assert!(lines.iter().all(|l| l.starts_with("set ") || l.starts_with("plot ")), "{script}");
}

#[cfg(unix)]
#[test]
fn failing_gnuplot_reports_exit_status() {
    let (x, y) = ramp(4);
    let mut plot = Gplot::new("target/test_out/smoke_run_false", OutputFormat::Png, "Run", "x", "y");
    plot.add_series(Some(&x), &y, PlotStyle::Lines, "l").expect("add series");

    let mut opts = RenderOptions::default();
    opts.run_gnuplot = true;
    opts.gnuplot_program = "false".to_string();
    let err = plot.render(&opts).unwrap_err();
    assert!(matches!(err, GplotError::Gnuplot { .. }), "got {err:?}");
    assert!(std::fs::metadata(plot.command_path()).expect("command file written first").len() > 0);
}

#[test]
fn missing_gnuplot_program_is_an_io_error() {
    let (x, y) = ramp(4);
    let mut plot = Gplot::new("target/test_out/smoke_run_missing", OutputFormat::X11, "Run", "x", "y");
    plot.add_series(Some(&x), &y, PlotStyle::Lines, "l").expect("add series");

    let mut opts = RenderOptions::default();
    opts.run_gnuplot = true;
    opts.gnuplot_program = "gplot-no-such-program".to_string();
    match plot.render(&opts) {
        Err(GplotError::Io { path, source }) => {
            assert_eq!(path, std::path::PathBuf::from("gplot-no-such-program"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn unwritable_data_file_names_its_path() {
    let (x, y) = ramp(4);
    let mut plot = Gplot::new("target/test_out/smoke_blocked", OutputFormat::Png, "Blocked", "x", "y");
    plot.add_series(Some(&x), &y, PlotStyle::Lines, "l").expect("add series");

    // A directory where the data file should go makes the create fail.
    std::fs::create_dir_all(plot.data_path(0)).expect("create blocking dir");
    match plot.render(&RenderOptions::default()) {
        Err(GplotError::Io { path, .. }) => assert_eq!(path, plot.data_path(0)),
        other => panic!("expected io error, got {other:?}"),
    }
}
