//! Facilitated-diffusion parameter sweep.
//!
//! Runs repeated trials over a grid of mean sliding lengths and target line
//! counts and writes one CSV row per trial.
//!
//! # Usage
//!
//! ```bash
//! # Reference sweep (18 x 6 configurations, 2048 trials each)
//! cargo run --release -p slide-sweep
//!
//! # Small sweep on 8 threads
//! cargo run --release -p slide-sweep -- --sliding-lengths 0,10 --num-lines 1,10 \
//!     --repetitions 5 --threads 8 --output small.csv
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use slide_core::{DEFAULT_SIDE_LENGTH, DEFAULT_SOFT_STEP_LIMIT, RailLayout, SimConfig};
use slide_sweep::{
    DEFAULT_NUM_LINES, DEFAULT_REPETITIONS, DEFAULT_SLIDING_LENGTHS, SweepGrid,
    print_summary_table, run_sweep, summarize, write_csv,
};

#[derive(Parser, Debug)]
#[command(name = "slide-sweep")]
#[command(about = "Facilitated-diffusion search sweep: 3D diffusion with 1D sliding on rails")]
struct Args {
    /// Mean sliding lengths to sweep (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SLIDING_LENGTHS.to_vec())]
    sliding_lengths: Vec<u64>,

    /// Target line counts to sweep (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_NUM_LINES.to_vec())]
    num_lines: Vec<usize>,

    /// Trials per configuration
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Lattice side length (also the number of rails)
    #[arg(long, default_value_t = DEFAULT_SIDE_LENGTH)]
    side_length: usize,

    /// How rail cross-sections are generated
    #[arg(long, value_enum, default_value_t = RailLayoutArg::Permutation)]
    rail_layout: RailLayoutArg,

    /// Random seed (drawn from the OS when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (rayon default when omitted)
    #[arg(long)]
    threads: Option<usize>,

    /// Output CSV path
    #[arg(long, short, default_value = "results.csv")]
    output: PathBuf,

    /// Warn when a single walk exceeds this many steps
    #[arg(long, default_value_t = DEFAULT_SOFT_STEP_LIMIT)]
    soft_step_limit: u64,

    /// Abort the sweep when a single walk exceeds this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Skip the per-configuration summary table
    #[arg(long)]
    no_summary: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RailLayoutArg {
    /// Two independent permutations paired index-wise
    Permutation,
    /// Unique (y, z) pairs
    DistinctPairs,
}

impl From<RailLayoutArg> for RailLayout {
    fn from(arg: RailLayoutArg) -> Self {
        match arg {
            RailLayoutArg::Permutation => RailLayout::Permutation,
            RailLayoutArg::DistinctPairs => RailLayout::DistinctPairs,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure rayon thread pool")?;
    }

    let config = SimConfig::default()
        .side_length(args.side_length)
        .rail_layout(args.rail_layout.into())
        .soft_step_limit(args.soft_step_limit)
        .max_steps(args.max_steps);

    let grid = SweepGrid {
        sliding_lengths: args.sliding_lengths,
        num_lines: args.num_lines,
        repetitions: args.repetitions,
    };
    grid.validate(&config).context("invalid sweep configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "Sweep: {} configurations x {} trials on a {}^3 lattice ({:?} rails), seed {}, {} threads",
        grid.num_configurations(),
        grid.repetitions,
        config.side_length,
        config.rail_layout,
        seed,
        rayon::current_num_threads()
    );

    let t0 = Instant::now();
    let rows = run_sweep(&grid, &config, seed).context("sweep aborted")?;
    info!(
        "Finished {} trials in {:.1}s",
        rows.len(),
        t0.elapsed().as_secs_f64()
    );

    info!("Writing {} now!", args.output.display());
    write_csv(&args.output, &rows)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    if !args.no_summary {
        print_summary_table(std::io::stdout().lock(), &summarize(&rows))
            .context("failed to print summary")?;
    }

    Ok(())
}
