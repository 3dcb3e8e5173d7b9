use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use segment_metrics::{CoordinateSelector, Metric, Point, Segment};

/// Inspect points and measure the distance between them.
#[derive(Parser)]
#[command(name = "segment-metrics")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance between two points
    Distance(DistanceArgs),
    /// Read one coordinate of a point by axis name or index
    Coordinate {
        /// Comma separated coordinates, e.g. "1,2,3"
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        /// x, y, z or an integer index
        #[arg(long, allow_hyphen_values = true)]
        axis: String,
    },
    /// Print a point and whether it can be plotted
    Describe {
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
}

#[derive(Args)]
struct DistanceArgs {
    #[arg(long, allow_hyphen_values = true, requires = "end", conflicts_with = "input")]
    start: Option<String>,
    #[arg(long, allow_hyphen_values = true, requires = "start")]
    end: Option<String>,
    /// CSV file without headers; the first two records are the start and end points
    #[arg(long)]
    input: Option<PathBuf>,
    /// manhattan, euclidean, minkowski[:p] or canberra
    #[arg(long, default_value = "euclidean")]
    metric: String,
    /// Minkowski order, overrides any order given with --metric
    #[arg(long)]
    order: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Distance(args) => distance(args),
        Commands::Coordinate { point, axis } => {
            let point = parse_point(&point)?;
            let selector: CoordinateSelector = axis.parse()?;
            println!("{}", point.select(&selector)?);
            Ok(())
        }
        Commands::Describe { point } => {
            let point = parse_point(&point)?;
            println!("{point}");
            println!("graphable: {}", point.is_graphable());
            Ok(())
        }
    }
}

fn distance(args: DistanceArgs) -> Result<()> {
    let (start, end) = match (&args.start, &args.end, &args.input) {
        (Some(start), Some(end), None) => (parse_point(start)?, parse_point(end)?),
        (None, None, Some(path)) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_two_points(file).with_context(|| format!("reading {}", path.display()))?
        }
        _ => bail!("give either --start and --end, or --input"),
    };

    let mut metric: Metric = args.metric.parse()?;
    if let Some(order) = args.order {
        if !matches!(metric, Metric::Minkowski { .. }) {
            bail!("--order only applies to the minkowski metric");
        }
        metric = Metric::minkowski(order)?;
    }

    let segment = Segment::new(&start, &end)?;
    info!(%segment, %metric, "measuring");
    println!("{}", segment.distance(metric)?);
    Ok(())
}

fn points<R: Read>(reader: R) -> csv::DeserializeRecordsIntoIter<R, Point> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
}

fn parse_point(text: &str) -> Result<Point> {
    let mut records = points(text.as_bytes());
    let point = records
        .next()
        .unwrap_or_else(|| Ok(Point::new()))
        .with_context(|| format!("'{text}' is not a comma separated list of numbers"))?;
    if records.next().is_some() {
        bail!("'{text}' holds more than one point");
    }
    debug!(%point, "parsed");
    Ok(point)
}

fn read_two_points<R: Read>(reader: R) -> Result<(Point, Point)> {
    let mut records = points(reader);
    let mut next = |which: &str| -> Result<Point> {
        match records.next() {
            Some(point) => Ok(point?),
            None => bail!("missing {which} point"),
        }
    };
    let start = next("start")?;
    let end = next("end")?;
    Ok((start, end))
}
