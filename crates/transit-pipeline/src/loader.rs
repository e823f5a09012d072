//! Photometry table loader
//!
//! Reads a CSV table with `time`, `flux` and optional `flux_err` columns.
//! Parsing is delegated to the `csv` crate; this module only enforces the
//! light curve invariants on what comes out: rows with non-finite time or
//! flux are skipped, the rest are sorted chronologically, and duplicate
//! timestamps are rejected.

use serde::Deserialize;
use std::path::Path;
use transit_core::{Error, LightCurve, Result};

#[derive(Debug, Deserialize)]
struct PhotometryRow {
    time: f64,
    flux: f64,
    #[serde(default)]
    flux_err: Option<f64>,
}

/// Load a photometry table from disk.
///
/// The uncertainty column is used only when every surviving row carries a
/// finite, non-negative value; otherwise it is ignored.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<LightCurve> {
    let mut reader = csv::Reader::from_path(path.as_ref())
        .map_err(|e| Error::Other(e.into()))?;

    let mut rows: Vec<PhotometryRow> = Vec::new();
    for record in reader.deserialize() {
        let row: PhotometryRow = record.map_err(|e| Error::Other(e.into()))?;
        if row.time.is_finite() && row.flux.is_finite() {
            rows.push(row);
        }
    }

    rows.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
    for pair in rows.windows(2) {
        if pair[0].time == pair[1].time {
            return Err(Error::InvalidInput(format!(
                "duplicate timestamp {} in photometry table",
                pair[0].time
            )));
        }
    }

    let time: Vec<f64> = rows.iter().map(|r| r.time).collect();
    let flux: Vec<f64> = rows.iter().map(|r| r.flux).collect();
    let errs: Option<Vec<f64>> = rows
        .iter()
        .map(|r| r.flux_err.filter(|e| e.is_finite() && *e >= 0.0))
        .collect();

    match errs {
        Some(errs) => LightCurve::with_errors(time, flux, errs),
        None => LightCurve::new(time, flux),
    }
}
