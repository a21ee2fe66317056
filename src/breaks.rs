//! Axis and legend break calculation.
//!
//! Two placement strategies over a numeric sample, both returning whole
//! numbers (clean tick labels, no fractional cutoffs):
//! - [`linear_breaks`]: evenly spaced across the whole-number span of the
//!   data, for continuous axes.
//! - [`quantile_breaks`]: placed at data quantiles so each interval holds
//!   roughly the same share of observations, for choropleth-style legends.
//!
//! Both use the type-7 quantile estimator (the default of most statistical
//! software) and truncate interpolated values toward zero. Use
//! [`format_breaks`] to render the results as locale-aware tick labels.

use num_format::{Locale, ToFormattedString};

use crate::error::{Error, Result};

/// Number of breaks produced when the caller does not override it.
pub const DEFAULT_BREAK_COUNT: usize = 5;

/// Options shared by [`linear_breaks`] and [`quantile_breaks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOptions {
    /// How many breaks to produce, including both endpoints. Minimum 2.
    pub n: usize,
}

impl Default for BreakOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_BREAK_COUNT,
        }
    }
}

// ------------------------ Break placement ------------------------

/// Breaks evenly spaced across the whole-number span of the data.
///
/// The span runs from the smallest integer at or above the data minimum to
/// the largest integer at or below the data maximum; the breaks are the
/// type-7 quantiles of that integer range, truncated toward zero. First and
/// last break are exactly the span endpoints.
///
/// Data confined to a sub-unit window (say everything strictly between 1
/// and 2) leaves no whole number in the span; that degenerate request fails
/// with [`Error::InvalidArgument`] rather than producing an inverted
/// sequence.
///
/// ### Example
/// ```
/// use apde_graphs::{BreakOptions, linear_breaks};
///
/// let breaks = linear_breaks(&[0.0, 42.5, 99.9, 100.0], &BreakOptions::default())?;
/// assert_eq!(breaks, vec![0, 25, 50, 75, 100]);
/// # Ok::<(), apde_graphs::Error>(())
/// ```
pub fn linear_breaks(data: &[f64], options: &BreakOptions) -> Result<Vec<i64>> {
    validate(data, options)?;
    let (min, max) = min_max(data);
    let bottom = min.ceil();
    let top = max.floor();
    if bottom > top {
        return Err(Error::invalid(format!(
            "data range [{min}, {max}] contains no whole number to anchor breaks on"
        )));
    }
    // Type-7 quantiles of the integer range bottom..=top collapse to linear
    // interpolation between the endpoints, so the range is never materialized.
    let breaks = probabilities(options.n)
        .map(|p| (bottom + p * (top - bottom)) as i64)
        .collect();
    Ok(breaks)
}

/// Breaks at evenly spaced quantiles of the data itself.
///
/// Computes the type-7 quantiles of the sample at probabilities `0`,
/// `1/(n-1)`, ..., `1` and truncates each toward zero. The first and last
/// break are the truncated data minimum and maximum. Skewed data gives
/// unevenly spaced breaks; that is the point.
///
/// ### Example
/// ```
/// use apde_graphs::{BreakOptions, quantile_breaks};
///
/// // Heavy right tail: the last interval stretches to hold the outlier.
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
/// let breaks = quantile_breaks(&data, &BreakOptions::default())?;
/// assert_eq!(breaks, vec![1, 2, 3, 4, 100]);
/// # Ok::<(), apde_graphs::Error>(())
/// ```
pub fn quantile_breaks(data: &[f64], options: &BreakOptions) -> Result<Vec<i64>> {
    validate(data, options)?;
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let breaks = probabilities(options.n)
        .map(|p| quantile_type7(&sorted, p) as i64)
        .collect();
    Ok(breaks)
}

/// Evenly spaced probabilities `0`, `1/(n-1)`, ..., `1`. Caller guarantees
/// `n >= 2`.
fn probabilities(n: usize) -> impl Iterator<Item = f64> {
    let last = (n - 1) as f64;
    (0..n).map(move |i| i as f64 / last)
}

/// Type-7 quantile estimator over a sorted sample: position `h = p (N - 1)`
/// with linear interpolation between the bracketing order statistics.
fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    let h = p * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

fn validate(data: &[f64], options: &BreakOptions) -> Result<()> {
    if data.is_empty() {
        return Err(Error::invalid("data must be a non-empty numeric slice"));
    }
    if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
        return Err(Error::invalid(format!(
            "data must contain only finite numbers, found {bad}"
        )));
    }
    if options.n < 2 {
        return Err(Error::invalid(format!(
            "break count must be at least 2, got {}",
            options.n
        )));
    }
    Ok(())
}

fn min_max(data: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in data {
        min = min.min(*v);
        max = max.max(*v);
    }
    (min, max)
}

// ------------------------ Label formatting ------------------------

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`,
/// `german`, `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Render break values as tick labels with locale-aware digit grouping
/// (`30,000` for `en`, `30.000` for `de`).
pub fn format_breaks(breaks: &[i64], locale_tag: &str) -> Vec<String> {
    let locale = map_locale(locale_tag);
    breaks
        .iter()
        .map(|b| b.to_formatted_string(locale))
        .collect()
}
