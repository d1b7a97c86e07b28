//! Normalize and color a coordinate CSV from the command line.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use warehouse_mapper::{
    export_csv, initial_viewport, process_reader, ColorStrategy, HeaderMode, MapView,
    PipelineOptions,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Normalized table as CSV
    Csv,
    /// Map view as JSON
    Json,
    /// One line per point with its fill color
    Summary,
}

/// Normalize a latitude/longitude CSV and assign point colors
#[derive(Parser, Debug)]
#[command(name = "mapcsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Header handling (auto, present, absent)
    #[arg(long, default_value = "auto")]
    header: String,

    /// Color strategy (sweep, random)
    #[arg(long, default_value = "sweep")]
    strategy: String,

    /// Alpha for swept colors
    #[arg(long, default_value_t = warehouse_mapper::color::DEFAULT_ALPHA)]
    alpha: u8,

    /// Seed for the random strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Point radius in meters (json output)
    #[arg(long, default_value_t = warehouse_mapper::render::DEFAULT_POINT_RADIUS)]
    radius: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli, io::stdout().lock())
}

/// Read the input named by `cli` and write the requested format to `out`
fn run<W: Write>(cli: &Cli, mut out: W) -> Result<()> {
    let options = PipelineOptions {
        header_mode: cli.header.parse::<HeaderMode>()?,
        color_strategy: cli.strategy.parse::<ColorStrategy>()?,
        alpha: cli.alpha,
        random_seed: cli.seed,
    };

    let reader: Box<dyn Read> = match &cli.input {
        Some(path) if path.as_os_str() != "-" => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        _ => Box::new(io::stdin().lock()),
    };

    let colored = process_reader(reader, &options).context("reading coordinate table")?;

    match cli.format {
        OutputFormat::Csv => export_csv(colored.table(), out)?,
        OutputFormat::Json => {
            let view = MapView::from_colored(&colored, cli.radius);
            writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
        }
        OutputFormat::Summary => {
            writeln!(out, "{} points", colored.len())?;
            for (record, fill) in colored.rows() {
                writeln!(
                    out,
                    "  {:>12.6} {:>12.6}  {}  {}",
                    record.latitude,
                    record.longitude,
                    fill.to_hex(),
                    fill
                )?;
            }
            let viewport = initial_viewport(colored.table());
            writeln!(
                out,
                "viewport: center ({:.4}, {:.4}) zoom {}",
                viewport.latitude, viewport.longitude, viewport.zoom
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(contents: &str, extra: &[&str]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        std::fs::write(&path, contents).unwrap();

        let mut argv = vec!["mapcsv", path.to_str().unwrap()];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_output() {
        let output = run_on("Lat,Lon\n10.5,20\nbad,1\n-3,4.25\n", &["--format", "csv"]);
        assert_eq!(output, "latitude,longitude\n10.5,20\n-3,4.25\n");
    }

    #[test]
    fn test_csv_output_keeps_colors() {
        let output = run_on("1,2,#fff\n3,4,\n", &["--format", "csv"]);
        assert_eq!(output, "latitude,longitude,color\n1,2,#fff\n3,4,\n");
    }

    #[test]
    fn test_json_output() {
        let output = run_on("1,2\n", &["--format", "json", "--radius", "500"]);
        let view: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(view["radius_meters"], 500);
        assert_eq!(view["points"][0]["position"], serde_json::json!([2.0, 1.0]));
    }

    #[test]
    fn test_summary_output() {
        let output = run_on("1,2\n3,4\n", &[]);
        assert!(output.starts_with("2 points\n"));
        assert!(output.contains("viewport: center (2.0000, 3.0000) zoom 4"));
    }

    #[test]
    fn test_bad_header_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        std::fs::write(&path, "1,2\n").unwrap();

        let cli =
            Cli::try_parse_from(["mapcsv", path.to_str().unwrap(), "--header", "maybe"]).unwrap();
        assert!(run(&cli, Vec::new()).is_err());
    }
}
