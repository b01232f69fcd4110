use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use curvetrim::data::reader::{read_series_file, ColumnSelector};
use curvetrim::data::writer;
use curvetrim::scale::Viewport;
use curvetrim::simplify::simplify_series;
use curvetrim::stats::{ReductionStats, SeriesStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// Reduce a dense time series to the points needed to draw it faithfully at
/// a given pixel resolution.
#[derive(Parser, Debug)]
#[command(name = "curvetrim", version)]
struct Cli {
    /// Input CSV file.
    input: PathBuf,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time column, by header name or zero-based index.
    #[arg(long, default_value = "0")]
    time_column: ColumnSelector,

    /// Value column, by header name or zero-based index.
    #[arg(long, default_value = "1")]
    value_column: ColumnSelector,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Maximum allowed deviation in pixels.
    #[arg(long, default_value_t = 1.0)]
    epsilon: f64,

    /// JSON viewport file ({"width": .., "height": ..}); overrides
    /// --width/--height.
    #[arg(long)]
    viewport: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log summary statistics for the input values and the reduction.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let viewport = match &cli.viewport {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read viewport file {path:?}: {e}"))?;
            serde_json::from_str::<Viewport>(&json)
                .map_err(|e| format!("cannot parse viewport file {path:?}: {e}"))?
        }
        None => Viewport::new(cli.width, cli.height),
    };

    let loaded = read_series_file(&cli.input, &cli.time_column, &cli.value_column)?;
    let series = loaded.series;
    tracing::info!(points = series.len(), input = ?cli.input, "loaded series");

    // Map the data extent onto the viewport. Times are assumed
    // chronological, so the span is the extent.
    let (t_min, t_max) = series.time_span().unwrap_or((0.0, 1.0));
    let (v_min, v_max) = value_extent(series.values());
    let xs = viewport.x_scale(t_min, t_max);
    let ys = viewport.y_scale(v_min, v_max);

    let simplified =
        simplify_series(&series, cli.epsilon, |t| xs.apply(t), |v| ys.apply(v as f64))?;

    if cli.stats {
        if let Some(stats) = SeriesStats::compute(series.values()) {
            tracing::info!("\n{}", stats.report("input values"));
        }
        let reduction = ReductionStats::new(series.len(), simplified.len());
        tracing::info!(epsilon = cli.epsilon, "{}", reduction.report());
    }

    let as_datetime = loaded.time_format.is_datetime();
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            std::fs::File::create(path).map_err(|e| format!("cannot create {path:?}: {e}"))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    match cli.format {
        OutputFormat::Csv => writer::write_csv(&mut out, &simplified, as_datetime)?,
        OutputFormat::Json => writer::write_json(&mut out, &simplified)?,
    }

    tracing::info!(output_points = simplified.len(), "wrote simplified series");
    Ok(())
}

fn value_extent(values: &[f32]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        let v = v as f64;
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}
