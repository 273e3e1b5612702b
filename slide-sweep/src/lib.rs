//! Parameter sweeps over slide-core trials.
//!
//! - [`grid`] - Sliding length x target line grid and repetition count
//! - [`sweep`] - Parallel dispatch with per-trial seeding
//! - [`stats`] - CSV rows and per-configuration summaries
//! - [`output`] - CSV file and console table writers

pub mod grid;
pub mod output;
pub mod stats;
pub mod sweep;

pub use grid::{DEFAULT_NUM_LINES, DEFAULT_REPETITIONS, DEFAULT_SLIDING_LENGTHS, SweepGrid};
pub use output::{print_summary_table, write_csv, write_rows};
pub use stats::{CSV_HEADER, ConfigSummary, StepStats, TrialRow, summarize};
pub use sweep::{run_sweep, trial_seed};
