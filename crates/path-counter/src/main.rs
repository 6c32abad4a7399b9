//! Timing harness for the two path counters.
//!
//! Usage:
//!   timing <ALGO> <N> [options]
//!   timing <ALGO> --file <field> [options]
//!   timing <ALGO> --stdin [options]
//!
//! <ALGO> is `dyn` or `exh`. With <N>, a random field with
//! `n = r + c - 2` is generated; otherwise the field is read as a JSON array
//! of row strings or as plain text with one row per line.
//!
//! Options:
//!   --seed <n>             Seed for the field generator (default: random)
//!   --blocked-one-in <k>   A cell is blocked with probability 1/k (default: 5)
//!   --json                 Print a JSON report instead of text
//!   --verify               Also run the other solver and compare counts
//!
//! Set RUST_LOG=debug to see solver diagnostics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use path_counter::{
    count_paths, dimensions_for, random_field, Algorithm, Grid, PathCount, Timer,
    DEFAULT_BLOCKED_ONE_IN, MAX_EXHAUSTIVE_MOVES, MIN_N,
};

const USAGE_ERROR: u8 = 1;
const MAX_PREVIEW_ROWS: usize = 20;

#[derive(Parser)]
#[command(name = "timing")]
#[command(about = "Time the exhaustive and dynamic-programming path counters")]
#[command(version)]
struct Cli {
    /// Algorithm to run: dyn or exh
    #[arg(value_name = "ALGO")]
    algo: Algorithm,

    /// Problem size n = r + c - 2 (at least 4)
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = parse_n,
        required_unless_present_any = ["file", "stdin"]
    )]
    n: Option<usize>,

    /// Read the field from a file instead of generating one
    #[arg(long, value_name = "FILE", conflicts_with_all = ["n", "stdin"])]
    file: Option<PathBuf>,

    /// Read the field from stdin instead of generating one
    #[arg(long, conflicts_with = "n")]
    stdin: bool,

    /// Seed for the random field generator
    #[arg(long)]
    seed: Option<u64>,

    /// Each generated cell is blocked with probability 1/K
    #[arg(long, value_name = "K", default_value_t = DEFAULT_BLOCKED_ONE_IN,
          value_parser = clap::value_parser!(u32).range(1..))]
    blocked_one_in: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also run the other algorithm and fail if the counts differ
    #[arg(long)]
    verify: bool,
}

fn parse_n(s: &str) -> std::result::Result<usize, String> {
    let n: i64 = s
        .parse()
        .map_err(|_| "<N> must be an integer".to_string())?;
    if n < 0 {
        return Err("<N> must be non-negative".to_string());
    }
    let n = n as usize;
    if n < MIN_N {
        return Err(format!("<N> must be at least {}", MIN_N));
    }
    Ok(n)
}

/// Report printed after a run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimingReport {
    algorithm: Algorithm,
    n: usize,
    rows: usize,
    columns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Vec<String>>,
    solution: PathCount,
    elapsed_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
}

/// Where the field came from
struct Field {
    grid: Grid,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(USAGE_ERROR);
            }
        },
    };

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // Check the exhaustive limit before generating a field that may be huge.
    if let Some(n) = cli.n {
        if !cli.algo.accepts_moves(n) {
            return Ok(limit_exceeded());
        }
    }

    let Field { grid, seed } = load_field(cli)?;
    let n = grid.moves();
    if !cli.algo.accepts_moves(n) {
        return Ok(limit_exceeded());
    }
    info!(
        "running {} on {}x{} field ({} blocked)",
        cli.algo,
        grid.rows(),
        grid.columns(),
        grid.blocked_count()
    );

    // No output while the timer runs.
    let timer = Timer::new();
    let result = count_paths(cli.algo, &grid);
    let elapsed = timer.elapsed();

    let solution = result.with_context(|| format!("{} solver failed", cli.algo))?;

    let verified = if cli.verify {
        verify(cli.algo, &grid, solution)?
    } else {
        None
    };

    let report = TimingReport {
        algorithm: cli.algo,
        n,
        rows: grid.rows(),
        columns: grid.columns(),
        seed,
        field: (grid.rows() <= MAX_PREVIEW_ROWS).then(|| grid.to_rows()),
        solution,
        elapsed_seconds: elapsed,
        verified,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if verified == Some(false) {
        return Ok(ExitCode::from(USAGE_ERROR));
    }
    Ok(ExitCode::SUCCESS)
}

fn limit_exceeded() -> ExitCode {
    println!(
        "error: exhaustive search is limited to n < {}",
        MAX_EXHAUSTIVE_MOVES + 1
    );
    ExitCode::from(USAGE_ERROR)
}

fn load_field(cli: &Cli) -> Result<Field> {
    let text = if cli.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read field from stdin")?;
        Some(buffer)
    } else if let Some(path) = &cli.file {
        Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read field file {:?}", path))?,
        )
    } else {
        None
    };

    if let Some(text) = text {
        return Ok(Field {
            grid: parse_field(&text)?,
            seed: None,
        });
    }

    let Some(n) = cli.n else {
        bail!("either <N>, --file or --stdin is required");
    };
    let (rows, columns) = dimensions_for(n);
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!("generating {}x{} field with seed {}", rows, columns, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Field {
        grid: random_field(rows, columns, cli.blocked_one_in, &mut rng),
        seed: Some(seed),
    })
}

/// Accept either a JSON array of row strings or one row per line.
fn parse_field(text: &str) -> Result<Grid> {
    if text.trim_start().starts_with('[') {
        serde_json::from_str(text).context("invalid field JSON")
    } else {
        text.parse::<Grid>().context("invalid field")
    }
}

/// Run the other solver when it can handle the field. `None` means the
/// comparison was skipped.
fn verify(algo: Algorithm, grid: &Grid, solution: PathCount) -> Result<Option<bool>> {
    let other = algo.other();
    if !other.accepts_moves(grid.moves()) {
        warn!(
            "skipping verification: {} cannot handle n = {}",
            other,
            grid.moves()
        );
        return Ok(None);
    }
    let expected = count_paths(other, grid)
        .with_context(|| format!("{} solver failed during verification", other))?;
    if expected != solution {
        warn!("{} returned {}, {} returned {}", algo, solution, other, expected);
    }
    Ok(Some(expected == solution))
}

fn print_bar() {
    println!("{}", "-".repeat(79));
}

fn print_report(report: &TimingReport) {
    print_bar();
    println!("algo = {}", report.algorithm);
    println!("n = {}", report.n);
    match &report.field {
        Some(rows) => {
            for row in rows {
                println!("{}", row);
            }
        }
        None => println!("(field too large to print)"),
    }
    println!("solution = {}", report.solution);
    println!("elapsed time={} seconds", report.elapsed_seconds);
    if let Some(verified) = report.verified {
        println!(
            "verified = {}",
            if verified { "agree" } else { "MISMATCH" }
        );
    }
    print_bar();
}
