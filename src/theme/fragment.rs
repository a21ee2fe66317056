//! Theme fragments: partial styling that layers over a full theme.
//!
//! A [`ThemeFragment`] carries only the attributes it wants to change;
//! merging it into a [`Theme`](super::Theme) leaves every unset attribute
//! alone. Fragments compose by folding in order, later fragments winning.

use crate::error::{Error, Result};

use super::elements::LegendPosition;

/// Default rotation angle for [`rotate_axis_labels`], in degrees.
pub const DEFAULT_ROTATION_DEG: f64 = 45.0;

/// Default horizontal justification for rotated labels (right-aligned, so
/// the label end sits under its tick).
pub const DEFAULT_ROTATION_HJUST: f64 = 1.0;

/// Partial override of a [`TextElement`](super::TextElement). `None` fields
/// leave the base element untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextPatch {
    pub size_pt: Option<f64>,
    pub angle_deg: Option<f64>,
    pub hjust: Option<f64>,
    pub vjust: Option<f64>,
}

impl TextPatch {
    /// True if the patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial theme override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeFragment {
    pub axis_text_x: Option<TextPatch>,
    pub axis_text_y: Option<TextPatch>,
    pub legend_position: Option<LegendPosition>,
}

/// Options for [`rotate_axis_labels`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateOptions {
    /// Rotation angle in degrees, 0..=360.
    pub angle_deg: f64,
    /// Horizontal justification of the rotated label, 0..=1.
    pub h_justify: f64,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ROTATION_DEG,
            h_justify: DEFAULT_ROTATION_HJUST,
        }
    }
}

/// Build a fragment that rotates x-axis tick labels.
///
/// The fragment touches only the rotation angle and horizontal justification
/// of the x tick labels; size, weight, and every other theme attribute stay
/// whatever the base theme says. Out-of-range options (angle outside
/// 0..=360, justification outside 0..=1, or NaN) fail with
/// [`Error::InvalidArgument`].
///
/// ### Example
/// ```
/// use apde_graphs::theme::{rotate_axis_labels, RotateOptions};
///
/// let fragment = rotate_axis_labels(&RotateOptions::default())?;
/// assert!(fragment.axis_text_x.is_some());
/// assert!(fragment.legend_position.is_none());
/// # Ok::<(), apde_graphs::Error>(())
/// ```
pub fn rotate_axis_labels(options: &RotateOptions) -> Result<ThemeFragment> {
    if !(0.0..=360.0).contains(&options.angle_deg) {
        return Err(Error::invalid(format!(
            "rotation angle must be within 0..=360 degrees, got {}",
            options.angle_deg
        )));
    }
    if !(0.0..=1.0).contains(&options.h_justify) {
        return Err(Error::invalid(format!(
            "h_justify must be within 0..=1, got {}",
            options.h_justify
        )));
    }
    Ok(ThemeFragment {
        axis_text_x: Some(TextPatch {
            angle_deg: Some(options.angle_deg),
            hjust: Some(options.h_justify),
            ..TextPatch::default()
        }),
        ..ThemeFragment::default()
    })
}
