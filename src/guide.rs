//! # apde-graphs guide
//!
//! This module is a standalone, end-to-end walkthrough of the crate's public
//! API. It exists so chart code across reports reads the same way; if you
//! are assembling a chart, start here. If you are looking for the contract
//! of a single function, its own documentation is the reference.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Theme`](crate::Theme): a complete description of how a chart looks,
//!   built by [`build_theme`](crate::build_theme)
//! - [`ThemeFragment`](crate::ThemeFragment): a partial override, layered
//!   onto a theme with [`Theme::merge`](crate::Theme::merge) or
//!   [`Theme::merged`](crate::Theme::merged)
//! - [`CaptionLabel`](crate::CaptionLabel): the standard attribution block,
//!   built by [`build_caption`](crate::build_caption)
//! - [`linear_breaks`](crate::linear_breaks) and
//!   [`quantile_breaks`](crate::quantile_breaks): whole-number tick and
//!   legend stops
//! - [`plotters_adapter`](crate::plotters_adapter): maps all of the above
//!   onto the plotters crate
//!
//! Everything is a plain value. The builders hold no state, share nothing,
//! and can run from any thread; two calls with equal inputs give equal
//! outputs (captions are dated, so pin the date with
//! [`caption_for_date`](crate::caption_for_date) when you need exact
//! reproduction).
//!
//! ---
//!
//! ## Captions that match the report template
//!
//! The attribution block is deliberately rigid: division and date on one
//! line, data source on the next. Only the division name and optional note
//! lines vary.
//!
//! ```
//! use apde_graphs::{CaptionOptions, caption_for_date};
//! use chrono::NaiveDate;
//!
//! let options = CaptionOptions {
//!     additional_text: Some(vec!["Rates are age-adjusted.\n".to_string()]),
//!     ..CaptionOptions::default()
//! };
//! let date = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
//! let caption = caption_for_date("Synthetic regional panel", &options, date)?;
//! assert_eq!(
//!     caption.as_str(),
//!     "Rates are age-adjusted.\nHealth Sciences, APDE: January 08, 2025\n\
//!      Data source: Synthetic regional panel"
//! );
//! # Ok::<(), apde_graphs::Error>(())
//! ```
//!
//! ---
//!
//! ## Legend stops for a choropleth
//!
//! Skewed rates make evenly spaced legend intervals useless: most areas land
//! in one bin. Quantile stops put roughly the same number of areas in each
//! interval instead.
//!
//! ```
//! use apde_graphs::{BreakOptions, format_breaks, quantile_breaks};
//!
//! let rates = [3.2_f64, 4.1, 4.4, 5.0, 5.6, 6.3, 7.9, 9.4, 11.8, 30.4];
//! let stops = quantile_breaks(&rates, &BreakOptions::default())?;
//! assert_eq!(stops, vec![3, 4, 5, 9, 30]);
//!
//! let labels = format_breaks(&stops, "en");
//! assert_eq!(labels.last().unwrap(), "30");
//! # Ok::<(), apde_graphs::Error>(())
//! ```
//!
//! ---
//!
//! ## A themed chart, start to finish
//!
//! The walkthrough below draws the bundled synthetic panel as a line chart:
//! standard theme, rotated x tick labels, linear y breaks, caption under the
//! plot.
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use apde_graphs::datasets::{REGIONS, synthetic_observations};
//! use apde_graphs::plotters_adapter::{self, axis_text_style, grid_line_style};
//! use apde_graphs::{
//!     BreakOptions, CaptionOptions, RotateOptions, ThemeOptions, build_caption, build_theme,
//!     linear_breaks, rotate_axis_labels,
//! };
//! use plotters::prelude::*;
//! use plotters_svg::SVGBackend;
//!
//! fn main() -> Result<()> {
//!     // 1) Data: one indicator, all regions.
//!     let panel = synthetic_observations();
//!     let indicator = "Obesity (%)";
//!     let values: Vec<f64> = panel
//!         .iter()
//!         .filter(|o| o.indicator == indicator)
//!         .map(|o| o.value)
//!         .collect();
//!
//!     // 2) Styling: standard theme, x labels rotated for long year ranges.
//!     let theme = build_theme(&ThemeOptions::default())?
//!         .merged([rotate_axis_labels(&RotateOptions::default())?]);
//!     let caption = build_caption("Synthetic regional panel", &CaptionOptions::default())?;
//!     let breaks = linear_breaks(&values, &BreakOptions::default())?;
//!     let (y0, y1) = (breaks[0] as f64, breaks[breaks.len() - 1] as f64);
//!
//!     // 3) Assembly.
//!     let root = SVGBackend::new("obesity_by_region.svg", (900, 600)).into_drawing_area();
//!     root.fill(&WHITE)?;
//!
//!     let mut chart = ChartBuilder::on(&root)
//!         .margin(plotters_adapter::margin_px(&theme))
//!         .x_label_area_size(40)
//!         .y_label_area_size(48)
//!         .build_cartesian_2d(2014f64..2025f64, y0..y1)?;
//!
//!     let mut mesh = chart.configure_mesh();
//!     mesh.light_line_style(grid_line_style())
//!         .label_style(axis_text_style(&theme))
//!         .y_labels(breaks.len());
//!     if !theme.grid.major_x {
//!         mesh.disable_x_mesh();
//!     }
//!     if !theme.grid.major_y {
//!         mesh.disable_y_mesh();
//!     }
//!     mesh.draw()?;
//!
//!     for (idx, region) in REGIONS.iter().enumerate() {
//!         let color = Palette99::pick(idx).mix(1.0);
//!         let series: Vec<(f64, f64)> = panel
//!             .iter()
//!             .filter(|o| o.indicator == indicator && o.region == *region)
//!             .map(|o| (f64::from(o.year), o.value))
//!             .collect();
//!         chart
//!             .draw_series(LineSeries::new(series, color.stroke_width(2)))?
//!             .label(*region)
//!             .legend(move |(x, y)| {
//!                 PathElement::new(vec![(x, y), (x + 24, y)], color.clone())
//!             });
//!     }
//!
//!     chart
//!         .configure_series_labels()
//!         .border_style(&BLACK)
//!         .position(plotters_adapter::series_label_position(&theme))
//!         .background_style(&WHITE.mix(0.85))
//!         .label_font(plotters_adapter::text_style(&theme, &theme.legend_text))
//!         .draw()?;
//!
//!     plotters_adapter::draw_title(&root, "Obesity by region", &theme)?;
//!     plotters_adapter::draw_caption(&root, &caption, &theme)?;
//!     root.present()?;
//!     Ok(())
//! }
//! ```
//!
//! ---
//!
//! ## Fonts, and why the default theme says "sans-serif"
//!
//! The plotters `ab_glyph` text path renders only fonts registered at run
//! time; it never discovers OS fonts. The theme builder therefore resolves
//! the requested family against an explicit registry
//! ([`FontBook`](crate::FontBook)) and falls back to the generic family,
//! logging a warning, rather than failing the chart. Out of the box only
//! `"sans-serif"` is listed, so the default request of `"Arial"` falls
//! back.
//!
//! To actually use Arial (or any licensed face) in bitmap output:
//!
//! ```ignore
//!     use apde_graphs::plotters_adapter::register_font_bytes;
//!     use apde_graphs::theme::{FontBook, FontWeight};
//!     use apde_graphs::{ThemeOptions, build_theme_with};
//!
//!     register_font_bytes("Arial", FontWeight::Normal, include_bytes!("../assets/arial.ttf"))?;
//!
//!     let mut fonts = FontBook::standard();
//!     fonts.add_family("Arial");
//!     let theme = build_theme_with(&ThemeOptions::default(), &fonts)?;
//!     assert_eq!(theme.family, "Arial");
//! ```
//!
//! SVG output is the exception: family names are embedded in the file and
//! resolved by the viewer, so no registration is needed there. The
//! built-in series legend and `ChartBuilder::caption` measure text while
//! laying out, which does need a registered font on bitmap backends; the
//! adapter's [`draw_title`](crate::plotters_adapter::draw_title) and
//! [`draw_caption`](crate::plotters_adapter::draw_caption) place text by
//! anchor instead and avoid the measurement path entirely.
