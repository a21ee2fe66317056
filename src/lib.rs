//! apde-graphs
//!
//! Standardized styling for plotters-based statistical graphics: one visual
//! theme, uniform captions, and whole-number axis breaks, so charts across
//! reports look like they came from the same shop.
//!
//! ### Features
//! - Standard caption block with division, production date, and data source
//! - House theme built over a minimal base, with font fallback that warns
//!   instead of failing
//! - Theme fragments for small overrides (rotated tick labels) that merge
//!   over any theme
//! - Linear and quantile whole-number breaks for axes and choropleth legends
//! - Bundled deterministic synthetic dataset for guides and tests
//! - Adapter mapping themes and captions onto the `plotters` crate
//!
//! All builders are stateless and deterministic (captions are dated; pin
//! the date with [`caption_for_date`] to reproduce exactly). See the
//! [`guide`] module for an end-to-end walkthrough.
//!
//! ### Example
//! ```
//! use apde_graphs::{BreakOptions, CaptionOptions, ThemeOptions};
//! use apde_graphs::{build_caption, build_theme, linear_breaks};
//!
//! let theme = build_theme(&ThemeOptions::default())?;
//! let caption = build_caption("Synthetic regional panel", &CaptionOptions::default())?;
//! let breaks = linear_breaks(&[3.1, 12.4, 28.9], &BreakOptions::default())?;
//!
//! assert_eq!(theme.family, "sans-serif");
//! assert!(caption.as_str().contains("Data source: Synthetic regional panel"));
//! assert_eq!(breaks, vec![4, 10, 16, 22, 28]);
//! # Ok::<(), apde_graphs::Error>(())
//! ```

pub mod breaks;
pub mod caption;
pub mod datasets;
pub mod error;
pub mod guide;
pub mod plotters_adapter;
pub mod theme;

pub use breaks::{
    BreakOptions, DEFAULT_BREAK_COUNT, format_breaks, linear_breaks, quantile_breaks,
};
pub use caption::{CaptionLabel, CaptionOptions, DEFAULT_DIVISION, build_caption, caption_for_date};
pub use error::{Error, Result};
pub use theme::{
    FontBook, FontResolver, RotateOptions, Theme, ThemeFragment, ThemeOptions, build_theme,
    build_theme_with, rotate_axis_labels,
};
