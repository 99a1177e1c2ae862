// File: crates/demo/src/main.rs
// Summary: Demo loads a wide CSV (key column + one column per series) and prints aggregates.

use anyhow::{Context, Result};
use chart_data::{Series, SeriesSet};
use std::path::Path;

fn main() -> Result<()> {
    let set = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_series_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => sample_set(),
    };

    if set.is_empty() {
        anyhow::bail!("no series loaded — check headers/delimiter.");
    }

    println!("Loaded {} series:", set.len());
    for series in &set {
        let (r, g, b, a) = series.color_as_rgba()?;
        println!(
            "  {:<12} {} points, color rgba({r},{g},{b},{a})",
            series.title,
            series.len()
        );
    }

    let (key_min, key_max) = set.key_range()?;
    let (val_min, val_max) = set.value_range()?;
    println!("Key range:   [{key_min:.4}, {key_max:.4}]");
    println!("Value range: [{val_min:.4}, {val_max:.4}]");
    println!("Union keys:  {}", set.keys().len());

    println!("Totals (interpolated across all series):");
    for total in set.totals() {
        let (key, sum) = total?;
        println!("  {key:>10.4}  {sum:>12.4}");
    }

    Ok(())
}

/// Load a wide CSV: first column is the key, every other column one series.
/// The header row supplies series titles; rows with an unparseable key are
/// skipped, as are blank cells within a row.
fn load_series_csv(path: &Path) -> Result<SeriesSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    println!("Headers: {headers:?}");
    if headers.len() < 2 {
        anyhow::bail!("need at least a key column and one value column");
    }

    let mut columns: Vec<Vec<(f64, f64)>> = vec![Vec::new(); headers.len() - 1];
    for rec in rdr.records() {
        let rec = rec?;
        let key = match rec.get(0).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(k) => k,
            None => continue,
        };
        for (col, points) in columns.iter_mut().enumerate() {
            if let Some(v) = rec.get(col + 1).and_then(|s| s.trim().parse::<f64>().ok()) {
                points.push((key, v));
            }
        }
    }

    let mut set = SeriesSet::new();
    for (col, points) in columns.into_iter().enumerate() {
        if points.is_empty() {
            println!("Warning: column '{}' has no numeric values.", headers[col + 1]);
            continue;
        }
        set.add_series(Series::new(&headers[col + 1], points));
    }
    Ok(set)
}

/// Built-in sample: two partially overlapping series.
fn sample_set() -> SeriesSet {
    let mut set = SeriesSet::new();
    set.add_series(
        Series::new("alpha", vec![(0.0, 0.0), (1.0, 1.2), (2.0, 0.8), (3.0, 1.8)])
            .with_color("#40a0ffff"),
    );
    set.add_series(
        Series::new("beta", vec![(1.0, 2.0), (2.5, 1.0), (4.0, 3.0)]).with_color("#dc5050ff"),
    );
    set
}
