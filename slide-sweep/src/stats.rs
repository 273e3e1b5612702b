//! Per-trial CSV rows and per-configuration summary statistics.

use slide_core::{TrialParams, TrialResult};

/// CSV header for sweep output. Downstream analysis depends on this exact schema.
pub const CSV_HEADER: &str = "avgSlidingLen,numLines,iterations1D,iterations3D";

/// One trial of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRow {
    /// Mean sliding length of the configuration.
    pub avg_sliding_len: u64,
    /// Number of target lines of the configuration.
    pub num_lines: usize,
    /// Step counts of the trial.
    pub result: TrialResult,
}

impl TrialRow {
    /// Pair a trial result with its configuration.
    pub fn new(params: &TrialParams, result: TrialResult) -> Self {
        Self {
            avg_sliding_len: params.avg_sliding_len,
            num_lines: params.num_target_lines,
            result,
        }
    }

    /// Format as CSV row.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{}",
            self.avg_sliding_len,
            self.num_lines,
            self.result.iterations_1d,
            self.result.iterations_3d,
        )
    }
}

/// Search-time statistics for one (sliding length, line count) configuration.
#[derive(Debug, Clone)]
pub struct ConfigSummary {
    /// Mean sliding length.
    pub avg_sliding_len: u64,
    /// Number of target lines.
    pub num_lines: usize,
    /// Number of trials.
    pub trials: usize,
    /// Mean total steps.
    pub mean_steps: f64,
    /// Standard error of the mean total steps.
    pub sem_steps: f64,
    /// Search time percentiles.
    pub steps: StepStats,
    /// Mean share of steps spent sliding.
    pub mean_1d_fraction: f64,
    /// Mean number of attach events per trial.
    pub mean_attach_events: f64,
}

impl ConfigSummary {
    /// Summarise the trials of a single configuration.
    pub fn from_rows(rows: &[TrialRow]) -> Option<Self> {
        let first = rows.first()?;
        let totals: Vec<u64> = rows.iter().map(|r| r.result.total_steps()).collect();
        let n = rows.len() as f64;

        let mean_steps = totals.iter().map(|&t| t as f64).sum::<f64>() / n;
        let variance = if rows.len() > 1 {
            totals
                .iter()
                .map(|&t| (t as f64 - mean_steps).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };

        let mean_1d_fraction = rows
            .iter()
            .map(|r| {
                let total = r.result.total_steps();
                if total > 0 {
                    r.result.iterations_1d as f64 / total as f64
                } else {
                    0.0
                }
            })
            .sum::<f64>()
            / n;

        let mean_attach_events =
            rows.iter().map(|r| r.result.attach_events as f64).sum::<f64>() / n;

        Some(Self {
            avg_sliding_len: first.avg_sliding_len,
            num_lines: first.num_lines,
            trials: rows.len(),
            mean_steps,
            sem_steps: (variance / n).sqrt(),
            steps: calculate_percentiles(&totals),
            mean_1d_fraction,
            mean_attach_events,
        })
    }
}

/// Group consecutive rows by configuration and summarise each group.
pub fn summarize(rows: &[TrialRow]) -> Vec<ConfigSummary> {
    rows.chunk_by(|a, b| a.avg_sliding_len == b.avg_sliding_len && a.num_lines == b.num_lines)
        .filter_map(ConfigSummary::from_rows)
        .collect()
}

/// Step-count statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StepStats {
    pub min: u64,
    pub max: u64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
}

/// Calculate percentile statistics from a list of step counts.
pub fn calculate_percentiles(values: &[u64]) -> StepStats {
    if values.is_empty() {
        return StepStats {
            min: 0,
            max: 0,
            p50: 0,
            p95: 0,
            p99: 0,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    StepStats {
        min: sorted[0],
        max: sorted[n - 1],
        p50: percentile(&sorted, 50.0),
        p95: percentile(&sorted, 95.0),
        p99: percentile(&sorted, 99.0),
    }
}

fn percentile(sorted: &[u64], p: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let idx = (p / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Format a large number with K/M/G suffixes.
pub fn format_number(n: f64) -> String {
    if n >= 1e9 {
        format!("{:.1}G", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{:.0}", n)
    }
}
