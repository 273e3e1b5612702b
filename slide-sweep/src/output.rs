//! CSV and console output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::stats::{CSV_HEADER, ConfigSummary, TrialRow, format_number};

/// Write the header and one line per trial to `out`.
pub fn write_rows<W: Write>(mut out: W, rows: &[TrialRow]) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(out, "{}", row.to_csv())?;
    }
    out.flush()
}

/// Write sweep results to a CSV file, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[TrialRow]) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows)
}

/// Print a per-configuration table of search times.
pub fn print_summary_table<W: Write>(mut out: W, summaries: &[ConfigSummary]) -> std::io::Result<()> {
    let header = format!(
        "{:>8} {:>6} {:>7} {:>10} {:>9} {:>10} {:>10} {:>10} {:>7} {:>9}",
        "slideLen", "lines", "trials", "mean", "±sem", "p50", "p95", "p99", "1D%", "attaches"
    );
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for s in summaries {
        writeln!(
            out,
            "{:>8} {:>6} {:>7} {:>10} {:>9} {:>10} {:>10} {:>10} {:>6.1}% {:>9.1}",
            s.avg_sliding_len,
            s.num_lines,
            s.trials,
            format_number(s.mean_steps),
            format_number(s.sem_steps),
            format_number(s.steps.p50 as f64),
            format_number(s.steps.p95 as f64),
            format_number(s.steps.p99 as f64),
            s.mean_1d_fraction * 100.0,
            s.mean_attach_events,
        )?;
    }

    writeln!(out)
}
