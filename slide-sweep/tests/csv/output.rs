//! End-to-end CSV output of a small sweep.

use std::fs;

use slide_core::SimConfig;
use slide_sweep::{CSV_HEADER, SweepGrid, run_sweep, write_csv};

#[test]
fn test_small_grid_csv_layout() {
    let grid = SweepGrid {
        sliding_lengths: vec![0, 10],
        num_lines: vec![1, 10],
        repetitions: 5,
    };
    let config = SimConfig::default();
    let rows = run_sweep(&grid, &config, 2024).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    write_csv(&path, &rows).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[0], "avgSlidingLen,numLines,iterations1D,iterations3D");

    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<u64> = line
            .split(',')
            .map(|f| f.parse().expect("non-integer field"))
            .collect();
        assert_eq!(fields.len(), 4, "line {}: {}", i + 1, line);

        // Rows come in grid order, five per configuration.
        let expected = [(0, 1), (0, 10), (10, 1), (10, 10)][i / 5];
        assert_eq!((fields[0], fields[1]), expected);
        if fields[0] == 0 {
            assert_eq!(fields[2], 0, "1D steps without sliding: {}", line);
        }
    }
}

#[test]
fn test_write_csv_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents\nmore\nlines\n").unwrap();

    write_csv(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", CSV_HEADER));
}
