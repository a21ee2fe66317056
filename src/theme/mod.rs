//! Chart theme construction.
//!
//! [`build_theme`] layers the house style over a minimal base:
//! - bold, centered title at 130% of the base size; centered subtitle,
//! - bold axis titles with consistent breathing room,
//! - tick, legend, and caption text stepped down from the base size,
//! - vertical major grid lines and all minor grid lines hidden,
//! - legend fixed to the right of the plotting area,
//! - uniform outer margin, zero spacing between facet panels, and facet
//!   strips drawn as bare bold text outside the axes.
//!
//! Font families resolve against an explicit registry ([`FontBook`]) and
//! fall back to [`GENERIC_SANS_FAMILY`] with a warning when the requested
//! family is unavailable or ambiguous, so a chart is always produced.
//!
//! Themes are plain values. Layer partial overrides on top with
//! [`Theme::merge`] or fold a whole list with [`Theme::merged`]; see
//! [`rotate_axis_labels`] for a ready-made fragment.

pub mod elements;
pub mod fonts;
pub mod fragment;

pub use elements::{
    FontWeight, GridLines, LegendPosition, Margin, Rgba, StripPlacement, TextElement,
};
pub use fonts::{FontBook, FontResolver, GENERIC_SANS_FAMILY};
pub use fragment::{
    DEFAULT_ROTATION_DEG, DEFAULT_ROTATION_HJUST, RotateOptions, TextPatch, ThemeFragment,
    rotate_axis_labels,
};

use log::{info, warn};

use crate::error::{Error, Result};

/// Default base font size in points.
pub const DEFAULT_BASE_SIZE_PT: f64 = 12.0;

/// Default requested font family. Resolved like any other request, so with
/// the standard registry it falls back to [`GENERIC_SANS_FAMILY`] unless a
/// matching family has been registered.
pub const DEFAULT_BASE_FAMILY: &str = "Arial";

// ------------------------ Relative text sizes ------------------------
// Fractions of the base size, applied uniformly regardless of base.

const REL_TITLE: f64 = 1.3; // title stands out
const REL_SUBTITLE: f64 = 1.0;
const REL_AXIS_TITLE: f64 = 1.0;
const REL_AXIS_TEXT: f64 = 0.8; // tick labels recede
const REL_LEGEND_TEXT: f64 = 0.8;
const REL_CAPTION: f64 = 0.6; // caption is fine print

/// Options for [`build_theme`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOptions {
    /// Base font size in points; all element sizes scale from it.
    pub base_size_pt: f64,
    /// Requested font family; resolved against the font registry.
    pub base_family: String,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            base_size_pt: DEFAULT_BASE_SIZE_PT,
            base_family: DEFAULT_BASE_FAMILY.to_string(),
        }
    }
}

/// Complete visual theme for a chart.
///
/// Produced by [`build_theme`]; every field is public so consumers can map
/// it onto their drawing pipeline (see [`crate::plotters_adapter`]) or
/// adjust single attributes directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Base size the element sizes were derived from, in points.
    pub base_size_pt: f64,
    /// Resolved font family: a canonical registered name or the generic
    /// fallback. Never the raw unresolved request.
    pub family: String,
    pub title: TextElement,
    pub subtitle: TextElement,
    pub axis_title_x: TextElement,
    pub axis_title_y: TextElement,
    pub axis_text_x: TextElement,
    pub axis_text_y: TextElement,
    pub legend_title: TextElement,
    pub legend_text: TextElement,
    pub caption: TextElement,
    pub strip_text: TextElement,
    pub grid: GridLines,
    pub legend_position: LegendPosition,
    /// Uniform outer margin around the whole chart.
    pub plot_margin: Margin,
    /// Spacing between facet panels, in points.
    pub panel_spacing_pt: f64,
    /// Fill behind facet strip labels; `None` removes the box entirely.
    pub strip_background: Option<Rgba>,
    pub strip_placement: StripPlacement,
}

/// Build the standard theme using the default font registry.
///
/// The default registry knows only the generic sans-serif family, so any
/// other `base_family` request (including the default `"Arial"`) logs a
/// warning and falls back. Register families first or use
/// [`build_theme_with`] to resolve against your own registry.
///
/// ### Example
/// ```
/// use apde_graphs::theme::{FontWeight, LegendPosition, ThemeOptions, build_theme};
///
/// let theme = build_theme(&ThemeOptions::default())?;
/// assert_eq!(theme.family, "sans-serif");
/// assert_eq!(theme.title.weight, FontWeight::Bold);
/// assert_eq!(theme.legend_position, LegendPosition::Right);
/// # Ok::<(), apde_graphs::Error>(())
/// ```
pub fn build_theme(options: &ThemeOptions) -> Result<Theme> {
    build_theme_with(options, &FontBook::standard())
}

/// Build the standard theme, resolving the font family against `fonts`.
///
/// Fails only on invalid options (`base_size_pt` not a positive finite
/// number). An unresolvable family is not an error; it falls back to
/// [`GENERIC_SANS_FAMILY`] with a warning through the `log` facade.
pub fn build_theme_with(options: &ThemeOptions, fonts: &dyn FontResolver) -> Result<Theme> {
    if !options.base_size_pt.is_finite() || options.base_size_pt <= 0.0 {
        return Err(Error::invalid(format!(
            "base_size_pt must be a positive number, got {}",
            options.base_size_pt
        )));
    }

    let family = resolve_family(&options.base_family, fonts);
    let base = options.base_size_pt;
    // Spacing quantum for margins around titles and the plot edge.
    let half = base / 2.0;

    Ok(Theme {
        base_size_pt: base,
        family,
        title: TextElement::sized(base * REL_TITLE).bold().align(0.5),
        subtitle: TextElement::sized(base * REL_SUBTITLE).align(0.5),
        axis_title_x: TextElement::sized(base * REL_AXIS_TITLE)
            .bold()
            .with_margin(Margin::new(half, 0.0, half, 0.0)),
        axis_title_y: TextElement::sized(base * REL_AXIS_TITLE)
            .bold()
            .with_margin(Margin::new(0.0, half, 0.0, half)),
        axis_text_x: TextElement::sized(base * REL_AXIS_TEXT),
        axis_text_y: TextElement::sized(base * REL_AXIS_TEXT),
        legend_title: TextElement::sized(base).bold(),
        legend_text: TextElement::sized(base * REL_LEGEND_TEXT),
        caption: TextElement::sized(base * REL_CAPTION)
            .align(0.0)
            .with_margin(Margin::new(base, 0.0, 0.0, 0.0)),
        strip_text: TextElement::sized(base).bold(),
        grid: GridLines {
            major_x: false,
            major_y: true,
            minor_x: false,
            minor_y: false,
        },
        legend_position: LegendPosition::Right,
        plot_margin: Margin::even(half),
        panel_spacing_pt: 0.0,
        strip_background: None,
        strip_placement: StripPlacement::Outside,
    })
}

/// Resolve `requested` to a renderable family name, falling back to the
/// generic family instead of failing.
fn resolve_family(requested: &str, fonts: &dyn FontResolver) -> String {
    match fonts.resolve(requested) {
        Some(canonical) => {
            if canonical != requested {
                info!("font family {requested:?} resolved to registered family {canonical:?}");
            }
            canonical
        }
        None => {
            warn!(
                "font family {requested:?} is not registered (or matches several \
                 registered families); falling back to {GENERIC_SANS_FAMILY:?}"
            );
            GENERIC_SANS_FAMILY.to_string()
        }
    }
}

// ------------------------ Merging ------------------------

impl Theme {
    /// Layer one fragment over this theme. Attributes the fragment sets
    /// override; everything else keeps the base value.
    pub fn merge(&self, fragment: &ThemeFragment) -> Theme {
        let mut out = self.clone();
        if let Some(patch) = &fragment.axis_text_x {
            apply_patch(&mut out.axis_text_x, patch);
        }
        if let Some(patch) = &fragment.axis_text_y {
            apply_patch(&mut out.axis_text_y, patch);
        }
        if let Some(position) = fragment.legend_position {
            out.legend_position = position;
        }
        out
    }

    /// Fold an ordered list of fragments onto this theme; later fragments
    /// win where they overlap.
    ///
    /// ### Example
    /// ```
    /// use apde_graphs::theme::{RotateOptions, ThemeOptions, build_theme, rotate_axis_labels};
    ///
    /// let theme = build_theme(&ThemeOptions::default())?
    ///     .merged([rotate_axis_labels(&RotateOptions::default())?]);
    /// assert_eq!(theme.axis_text_x.angle_deg, 45.0);
    /// assert_eq!(theme.axis_text_x.hjust, 1.0);
    /// # Ok::<(), apde_graphs::Error>(())
    /// ```
    pub fn merged<I>(self, fragments: I) -> Theme
    where
        I: IntoIterator<Item = ThemeFragment>,
    {
        fragments
            .into_iter()
            .fold(self, |theme, fragment| theme.merge(&fragment))
    }
}

fn apply_patch(element: &mut TextElement, patch: &TextPatch) {
    if let Some(v) = patch.size_pt {
        element.size_pt = v;
    }
    if let Some(v) = patch.angle_deg {
        element.angle_deg = v;
    }
    if let Some(v) = patch.hjust {
        element.hjust = v;
    }
    if let Some(v) = patch.vjust {
        element.vjust = v;
    }
}
