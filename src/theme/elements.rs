//! Style building blocks shared by full themes and theme fragments.
//!
//! Everything here is plain data: sizes in points, justifications as 0..=1
//! fractions, colors as RGBA. Backend mapping (points to pixels, weights to
//! font styles) lives in [`crate::plotters_adapter`].

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Font weight of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Margin around an element, in points (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    pub top_pt: f64,
    pub right_pt: f64,
    pub bottom_pt: f64,
    pub left_pt: f64,
}

impl Margin {
    /// Create a margin with explicit sides.
    pub fn new(top_pt: f64, right_pt: f64, bottom_pt: f64, left_pt: f64) -> Self {
        Self {
            top_pt,
            right_pt,
            bottom_pt,
            left_pt,
        }
    }

    /// Same spacing on all four sides.
    pub fn even(pt: f64) -> Self {
        Self::new(pt, pt, pt, pt)
    }
}

/// Styling of one text element of a chart (title, tick labels, caption, ...).
///
/// `hjust`/`vjust` are 0..=1 fractions (0 = left/bottom, 1 = right/top);
/// `angle_deg` rotates counter-clockwise. A `color` of `None` means the
/// consumer's default ink color.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub size_pt: f64,
    pub weight: FontWeight,
    pub hjust: f64,
    pub vjust: f64,
    pub angle_deg: f64,
    pub color: Option<Rgba>,
    pub margin: Margin,
}

impl Default for TextElement {
    fn default() -> Self {
        Self {
            size_pt: 12.0,
            weight: FontWeight::Normal,
            hjust: 0.0,
            vjust: 0.5,
            angle_deg: 0.0,
            color: None,
            margin: Margin::default(),
        }
    }
}

impl TextElement {
    /// Element with the given size and default everything else.
    pub fn sized(size_pt: f64) -> Self {
        Self {
            size_pt,
            ..Self::default()
        }
    }

    /// Switch the element to bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set the horizontal justification (0 = left, 0.5 = center, 1 = right).
    pub fn align(mut self, hjust: f64) -> Self {
        self.hjust = hjust;
        self
    }

    /// Set the margin around the element.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }
}

/// Which grid lines a chart draws. `x` lines are the vertical ones (at
/// x-axis breaks), `y` lines the horizontal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLines {
    pub major_x: bool,
    pub major_y: bool,
    pub minor_x: bool,
    pub minor_y: bool,
}

impl Default for GridLines {
    /// Everything on, as an unthemed chart would draw it.
    fn default() -> Self {
        Self {
            major_x: true,
            major_y: true,
            minor_x: true,
            minor_y: true,
        }
    }
}

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    /// Overlay legend inside the plotting area (may overlap data).
    Inside,
    /// Separate, non-overlapping legend panel on the right side.
    Right,
    /// Separate, non-overlapping legend band at the top.
    Top,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
}

/// Facet strip placement relative to the panel axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripPlacement {
    /// Strip drawn between panel and axis.
    Inside,
    /// Strip drawn outside the axis, clear of tick labels.
    #[default]
    Outside,
}
