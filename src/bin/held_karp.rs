use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use held_karp::distance::DistanceMatrix;
use held_karp::exact::{HeldKarp, HeldKarpConfig, SolveStats};
use held_karp::io::read_locations;
use held_karp::models::Tour;
use serde::Serialize;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("held-karp: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("held-karp: {err}");
        process::exit(1);
    }
}

fn run(options: &Options) -> held_karp::Result<()> {
    let start = Instant::now();

    log::info!("loading {}", options.input.display());
    let locations = read_locations(&options.input)?;
    let distances = DistanceMatrix::from_locations(&locations);

    let config = HeldKarpConfig::default().with_max_cities(options.max_cities);
    let (tour, stats) = HeldKarp::with_config(&distances, config)?.solve_with_stats()?;
    let elapsed = start.elapsed();

    if options.json {
        let report = Report {
            input: &options.input,
            tour: &tour,
            stats,
            elapsed_ns: elapsed.as_nanos(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| held_karp::Error::internal(format!("json output failed: {e}")))?;
        println!("{json}");
    } else {
        println!("Path = {tour}");
        println!("Cost = {}", tour.cost());
        println!(
            "Running time = {} nano seconds, {} seconds",
            elapsed.as_nanos(),
            elapsed.as_secs_f64()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a PathBuf,
    tour: &'a Tour,
    stats: SolveStats,
    elapsed_ns: u128,
}

struct Options {
    input: PathBuf,
    json: bool,
    max_cities: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut input = None;
        let mut json = false;
        let mut max_cities = HeldKarpConfig::default().max_cities();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if arg == "--json" {
                json = true;
            } else if let Some(value) = arg.strip_prefix("--max-cities=") {
                max_cities = parse_max_cities(value)?;
            } else if arg == "--max-cities" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-cities".to_string())?
                    .into();
                max_cities = parse_max_cities(&value)?;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else if input.is_some() {
                return Err(format!("unexpected extra input '{arg}'"));
            } else {
                input = Some(PathBuf::from(arg));
            }
        }

        Ok(Self {
            input: input.ok_or_else(|| "missing input file".to_string())?,
            json,
            max_cities,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: held-karp <FILE> [options]

Solves the TSP exactly for the cities in FILE, one `id x y` line per city.
City 0 is the first line of the file.

Options:
  --json                 Print a JSON report instead of text
  --max-cities <N>       Refuse instances larger than N cities (default: 20, at most 24)
  -h, --help             Print this help message

Logging follows RUST_LOG, e.g. RUST_LOG=held_karp=debug.
"
        );
    }
}

fn parse_max_cities(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "max cities must be a positive integer".to_string())
}
