//! Adapter helpers to use [`Theme`] and [`CaptionLabel`] with the plotters
//! crate.
//!
//! The theme itself is plain data; this module maps it onto plotters types
//! (fonts, text styles, stroke styles) and draws the pieces plotters has no
//! built-in slot for, like a multi-line caption under the plot.
//!
//! Usage example (inside your plotting function):
//! ```ignore
//!     use plotters::prelude::*;
//!     use plotters_svg::SVGBackend;
//!     use apde_graphs::plotters_adapter::{
//!         axis_text_style, draw_caption, draw_title, grid_line_style, margin_px,
//!     };
//!
//!     let root = SVGBackend::new("chart.svg", (800, 600)).into_drawing_area();
//!     root.fill(&WHITE)?;
//!
//!     let mut chart = ChartBuilder::on(&root)
//!         .margin(margin_px(&theme))
//!         .set_label_area_size(LabelAreaPosition::Left, 48)
//!         .set_label_area_size(LabelAreaPosition::Bottom, 36)
//!         .build_cartesian_2d(2015.0..2024.0, 0.0..30.0)?;
//!
//!     let mut mesh = chart.configure_mesh();
//!     mesh.light_line_style(grid_line_style())
//!         .label_style(axis_text_style(&theme));
//!     if !theme.grid.major_x {
//!         mesh.disable_x_mesh();
//!     }
//!     mesh.draw()?;
//!
//!     // ... draw_series calls ...
//!
//!     draw_title(&root, "Obesity by region", &theme)?;
//!     draw_caption(&root, &caption, &theme)?;
//!     root.present()?;
//! ```
//!
//! Text note: the `ab_glyph` text path renders only registered fonts. SVG
//! output embeds family names and needs no registration; bitmap output
//! rasterizes glyphs, so call [`register_font_bytes`] (or stick to shapes)
//! before drawing text to a bitmap backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

use crate::caption::CaptionLabel;
use crate::error::{Error, Result};
use crate::theme::{FontWeight, TextElement, Theme};

/// Point-to-pixel conversion used throughout the adapter (CSS 96 dpi).
const PX_PER_PT: f64 = 96.0 / 72.0;

/// Stroke color for the grid lines a theme keeps visible.
const GRID_GRAY: RGBColor = RGBColor(224, 224, 224);

/// Horizontal padding between text and the drawing-area edge, in pixels.
const TEXT_PAD_PX: i32 = 4;

// ------------------------ Style mapping ------------------------

/// Rounded pixel size of a text element, convenient for label-area sizing.
#[inline]
pub fn size_px(element: &TextElement) -> u32 {
    (element.size_pt * PX_PER_PT).round() as u32
}

/// Outer chart margin in pixels. Uniform themes use the same value on all
/// sides, so the top value stands in for all of them.
#[inline]
pub fn margin_px(theme: &Theme) -> u32 {
    (theme.plot_margin.top_pt * PX_PER_PT).round() as u32
}

fn font_style(weight: FontWeight) -> FontStyle {
    match weight {
        FontWeight::Normal => FontStyle::Normal,
        FontWeight::Bold => FontStyle::Bold,
    }
}

/// Plotters font descriptor for one themed text element.
pub fn font_desc<'a>(theme: &'a Theme, element: &TextElement) -> FontDesc<'a> {
    FontDesc::new(
        FontFamily::Name(&theme.family),
        element.size_pt * PX_PER_PT,
        font_style(element.weight),
    )
}

/// Plotters text style (font plus ink color) for one themed text element.
pub fn text_style<'a>(theme: &'a Theme, element: &TextElement) -> TextStyle<'a> {
    let color = element
        .color
        .map(|c| RGBAColor(c.r, c.g, c.b, f64::from(c.a) / 255.0))
        .unwrap_or_else(|| BLACK.to_rgba());
    font_desc(theme, element).color(&color)
}

/// Text style for axis tick labels (both axes share size and weight; pass
/// it to `.label_style(...)` on the mesh).
pub fn axis_text_style<'a>(theme: &'a Theme) -> TextStyle<'a> {
    text_style(theme, &theme.axis_text_x)
}

/// Stroke for the grid lines a theme keeps visible. Pair with
/// `disable_x_mesh`/`disable_y_mesh` for the ones it hides.
pub fn grid_line_style() -> ShapeStyle {
    GRID_GRAY.stroke_width(1)
}

/// Plotters series-label position for the theme's legend placement, for
/// pipelines that use the built-in series-label legend.
pub fn series_label_position(theme: &Theme) -> SeriesLabelPosition {
    use crate::theme::LegendPosition;
    match theme.legend_position {
        LegendPosition::Inside => SeriesLabelPosition::UpperLeft,
        LegendPosition::Right => SeriesLabelPosition::UpperRight,
        LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
        LegendPosition::Bottom => SeriesLabelPosition::LowerMiddle,
    }
}

// ------------------------ Text drawing ------------------------

fn h_pos(hjust: f64) -> HPos {
    if hjust >= 0.75 {
        HPos::Right
    } else if hjust >= 0.25 {
        HPos::Center
    } else {
        HPos::Left
    }
}

fn anchor_x(hjust: f64, width: i32) -> i32 {
    match h_pos(hjust) {
        HPos::Left => TEXT_PAD_PX,
        HPos::Center => width / 2,
        HPos::Right => width - TEXT_PAD_PX,
    }
}

/// Line height in pixels for stacked text of one element.
fn line_height_px(element: &TextElement) -> i32 {
    (element.size_pt * PX_PER_PT * 1.4).round() as i32
}

/// Anchor positions for each caption line inside an area of `area_px`
/// pixels: stacked upward from the bottom edge, aligned per the element's
/// `hjust`. Pure layout, split out so it can be tested without a backend.
pub fn caption_layout(
    label: &CaptionLabel,
    element: &TextElement,
    area_px: (u32, u32),
) -> Vec<(String, (i32, i32))> {
    let (w, h) = (area_px.0 as i32, area_px.1 as i32);
    let lh = line_height_px(element);
    let lines: Vec<String> = label.lines().map(str::to_string).collect();
    let x = anchor_x(element.hjust, w);
    let top = h - TEXT_PAD_PX - lh * lines.len() as i32;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (line, (x, top + lh * i as i32)))
        .collect()
}

/// Draw a caption along the bottom edge of `area`, one text element per
/// line. Alignment and size come from the theme's caption element.
pub fn draw_caption<DB>(
    area: &DrawingArea<DB, Shift>,
    label: &CaptionLabel,
    theme: &Theme,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
{
    let element = &theme.caption;
    let style = text_style(theme, element).pos(Pos::new(h_pos(element.hjust), VPos::Top));
    for (line, pos) in caption_layout(label, element, area.dim_in_pixel()) {
        area.draw(&Text::new(line, pos, style.clone()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Draw a chart title along the top edge of `area`, styled and aligned per
/// the theme's title element.
///
/// Unlike `ChartBuilder::caption`, this never measures text, so it works on
/// backends without a registered font (SVG embeds the family name instead).
pub fn draw_title<DB>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    theme: &Theme,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
{
    let element = &theme.title;
    let style = text_style(theme, element).pos(Pos::new(h_pos(element.hjust), VPos::Top));
    let (w, _) = area.dim_in_pixel();
    let x = anchor_x(element.hjust, w as i32);
    let y = TEXT_PAD_PX + (element.margin.top_pt * PX_PER_PT).round() as i32;
    area.draw(&Text::new(text.to_string(), (x, y), style))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

// ------------------------ Font registration ------------------------

/// Register a font with the plotters `ab_glyph` text path under `family`.
///
/// The pure-Rust text path does not discover OS fonts; bitmap backends can
/// only rasterize families registered this way. Registering the family also
/// makes it worth listing in a [`FontBook`](crate::theme::FontBook) so theme
/// requests resolve to it. Safe to call more than once per family;
/// unparseable font bytes fail with [`Error::InvalidArgument`].
pub fn register_font_bytes(family: &str, weight: FontWeight, bytes: &'static [u8]) -> Result<()> {
    plotters::style::register_font(family, font_style(weight), bytes).map_err(|_| {
        Error::invalid(format!(
            "font data for family {family:?} could not be parsed"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::{CaptionOptions, caption_for_date};
    use crate::theme::{ThemeOptions, build_theme};
    use chrono::NaiveDate;

    fn sample_caption() -> CaptionLabel {
        let date = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        caption_for_date("Synthetic data", &CaptionOptions::default(), date).unwrap()
    }

    #[test]
    fn caption_layout_stacks_lines_bottom_up_in_order() {
        let theme = build_theme(&ThemeOptions::default()).unwrap();
        let placed = caption_layout(&sample_caption(), &theme.caption, (800, 600));
        assert_eq!(placed.len(), 2);
        assert!(placed[0].0.starts_with("Health Sciences, APDE: "));
        assert!(placed[1].0.starts_with("Data source: "));
        // Same x (left-aligned), increasing y, last line above the bottom edge.
        assert_eq!(placed[0].1.0, placed[1].1.0);
        assert!(placed[0].1.1 < placed[1].1.1);
        assert!(placed[1].1.1 < 600);
    }

    #[test]
    fn caption_layout_honors_horizontal_justification() {
        let theme = build_theme(&ThemeOptions::default()).unwrap();
        let mut centered = theme.caption.clone();
        centered.hjust = 0.5;
        let placed = caption_layout(&sample_caption(), &centered, (800, 600));
        assert!(placed.iter().all(|(_, (x, _))| *x == 400));
    }

    #[test]
    fn element_sizes_convert_points_to_pixels() {
        let theme = build_theme(&ThemeOptions::default()).unwrap();
        // 12pt base at 96 dpi is 16px; tick labels at 80% are 13px rounded.
        assert_eq!(size_px(&theme.subtitle), 16);
        assert_eq!(size_px(&theme.axis_text_x), 13);
        assert_eq!(margin_px(&theme), 8);
    }
}
