//! Standardized chart captions.
//!
//! Every chart carries the same attribution block: the producing division
//! with the production date, then the data source on its own line. Callers
//! can prepend free-form note lines; the block itself is not configurable
//! beyond the division name, which keeps captions uniform across reports.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};

/// Division line used when the caller does not override it.
pub const DEFAULT_DIVISION: &str = "Health Sciences, APDE";

/// Options for [`build_caption`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionOptions {
    /// Organization label for the attribution line.
    pub division: String,
    /// Free-form note lines placed before the attribution block, joined
    /// with no separator; by convention each note carries its own trailing
    /// newline.
    pub additional_text: Option<Vec<String>>,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            division: DEFAULT_DIVISION.to_string(),
            additional_text: None,
        }
    }
}

/// A ready-to-place caption string.
///
/// Lines are separated by `\n`; drawing code decides how to stack them (see
/// [`crate::plotters_adapter::draw_caption`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionLabel(String);

impl CaptionLabel {
    /// Caption text with embedded newlines.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines in drawing order (notes first, attribution block last).
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl std::fmt::Display for CaptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CaptionLabel> for String {
    fn from(label: CaptionLabel) -> String {
        label.0
    }
}

/// Assemble the standard caption, dated today.
///
/// Reads the local clock; everything else is pure. The result is
/// `[notes][division]: [Month DD, YYYY]\nData source: [data_source]`,
/// with the day zero-padded (`January 08, 2025`).
///
/// An empty `data_source` fails with [`Error::InvalidArgument`]; a chart
/// without attribution is not acceptable output.
///
/// ### Example
/// ```
/// use apde_graphs::{CaptionOptions, build_caption};
///
/// let caption = build_caption("Synthetic regional panel", &CaptionOptions::default())?;
/// assert!(caption.as_str().starts_with("Health Sciences, APDE: "));
/// assert!(caption.as_str().ends_with("\nData source: Synthetic regional panel"));
/// # Ok::<(), apde_graphs::Error>(())
/// ```
pub fn build_caption(data_source: &str, options: &CaptionOptions) -> Result<CaptionLabel> {
    caption_for_date(data_source, options, Local::now().date_naive())
}

/// Clock-independent variant of [`build_caption`]: same output, with the
/// date passed in. This is what reports pinned to a publication date use,
/// and what tests assert exact strings against.
pub fn caption_for_date(
    data_source: &str,
    options: &CaptionOptions,
    date: NaiveDate,
) -> Result<CaptionLabel> {
    if data_source.is_empty() {
        return Err(Error::invalid("data_source must be a non-empty string"));
    }

    let mut text = String::new();
    if let Some(notes) = &options.additional_text {
        for note in notes {
            text.push_str(note);
        }
    }
    // %d is zero-padded by design: "January 08, 2025".
    let stamp = date.format("%B %d, %Y");
    text.push_str(&format!(
        "{}: {}\nData source: {}",
        options.division, stamp, data_source
    ));
    Ok(CaptionLabel(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_8_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()
    }

    #[test]
    fn standard_caption_matches_expected_block() {
        let label = caption_for_date(
            "ACS 5-year estimates",
            &CaptionOptions::default(),
            jan_8_2025(),
        )
        .unwrap();
        assert_eq!(
            label.as_str(),
            "Health Sciences, APDE: January 08, 2025\nData source: ACS 5-year estimates"
        );
    }

    #[test]
    fn notes_are_prepended_without_separator() {
        let options = CaptionOptions {
            additional_text: Some(vec![
                "Rates are age-adjusted.\n".to_string(),
                "Small counts suppressed.\n".to_string(),
            ]),
            ..CaptionOptions::default()
        };
        let label = caption_for_date("Vital statistics", &options, jan_8_2025()).unwrap();
        assert_eq!(
            label.as_str(),
            "Rates are age-adjusted.\nSmall counts suppressed.\nHealth Sciences, APDE: \
             January 08, 2025\nData source: Vital statistics"
        );
        let lines: Vec<&str> = label.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Rates are age-adjusted.");
        assert_eq!(lines[3], "Data source: Vital statistics");
    }

    #[test]
    fn custom_division_replaces_default() {
        let options = CaptionOptions {
            division: "Assessment, Policy Development & Evaluation".to_string(),
            additional_text: None,
        };
        let label = caption_for_date("CHAT", &options, jan_8_2025()).unwrap();
        assert!(
            label
                .as_str()
                .starts_with("Assessment, Policy Development & Evaluation: ")
        );
    }

    #[test]
    fn empty_data_source_is_rejected() {
        let err = caption_for_date("", &CaptionOptions::default(), jan_8_2025()).unwrap_err();
        assert!(err.to_string().contains("data_source"));
    }

    #[test]
    fn todays_caption_uses_the_local_date() {
        // Sample the clock before and after to stay correct across midnight.
        let before = Local::now().date_naive();
        let label = build_caption("Synthetic data", &CaptionOptions::default()).unwrap();
        let after = Local::now().date_naive();
        let expected = |d: NaiveDate| {
            caption_for_date("Synthetic data", &CaptionOptions::default(), d)
                .unwrap()
        };
        assert!(label == expected(before) || label == expected(after));
    }
}
