//! Bundled synthetic example data.
//!
//! A small public-health style panel: one value per region, indicator, and
//! year. Values are synthetic, produced by deterministic pseudo-variation
//! around per-indicator baselines, so guides and tests reproduce exactly.
//! They carry no real-world meaning.

use anyhow::Result;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::path::Path;

/// Regions covered by the synthetic panel.
pub const REGIONS: [&str; 4] = ["Seattle", "North", "East", "South"];

/// First year of the synthetic panel.
pub const FIRST_YEAR: i32 = 2015;

/// Last year of the synthetic panel (inclusive).
pub const LAST_YEAR: i32 = 2024;

/// Indicator names with the value range the generator keeps them in.
const INDICATORS: [(&str, f64, f64); 4] = [
    ("Adult smoking (%)", 6.0, 16.0),
    ("Obesity (%)", 18.0, 32.0),
    ("Uninsured (%)", 3.0, 12.0),
    ("Frequent mental distress (%)", 8.0, 20.0),
];

/// One observation of the bundled panel (region x indicator x year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub region: String,
    pub year: i32,
    pub indicator: String,
    pub value: f64,
}

/// Generate the bundled synthetic panel: every region, indicator, and year
/// combination, in a fixed order. Identical output on every call.
///
/// ### Example
/// ```
/// use apde_graphs::datasets::synthetic_observations;
///
/// let panel = synthetic_observations();
/// assert_eq!(panel.len(), 160); // 4 regions x 4 indicators x 10 years
/// assert_eq!(panel, synthetic_observations());
/// ```
pub fn synthetic_observations() -> Vec<Observation> {
    let mut out = Vec::new();
    for (indicator, lo, hi) in INDICATORS {
        for region in REGIONS {
            for year in FIRST_YEAR..=LAST_YEAR {
                out.push(Observation {
                    region: region.to_string(),
                    year,
                    indicator: indicator.to_string(),
                    value: synthetic_value(region, indicator, year, lo, hi),
                });
            }
        }
    }
    out
}

/// Deterministic value in `[lo, hi]`, rounded to one decimal: a stable
/// per-series baseline plus a mild per-series trend and a per-year wobble.
fn synthetic_value(region: &str, indicator: &str, year: i32, lo: f64, hi: f64) -> f64 {
    let series = stable_hash64((region, indicator));
    // Baseline in [0.2, 0.7] of the span; trend and wobble stay within
    // +/- 0.2 combined, so the total fraction never leaves [0, 0.9].
    let baseline = 0.2 + 0.5 * map_u64_to_range(series, 0.0, 1.0);
    let progress = f64::from(year - FIRST_YEAR) / f64::from(LAST_YEAR - FIRST_YEAR);
    let trend = map_u64_to_range(series.rotate_left(13), -0.15, 0.15) * progress;
    let wobble = map_u64_to_range(stable_hash64((region, indicator, year)), -0.05, 0.05);
    let value = lo + (hi - lo) * (baseline + trend + wobble);
    (value * 10.0).round() / 10.0
}

fn stable_hash64<T: Hash>(t: T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

fn map_u64_to_range(x: u64, min: f64, max: f64) -> f64 {
    let t = (x as f64) / (u64::MAX as f64); // 0..1
    min + t * (max - min)
}

/// Save observations as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[Observation], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("region", "year", "indicator", "value"))?;
    for r in rows {
        wtr.serialize((&r.region, r.year, &r.indicator, r.value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save observations as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[Observation], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
