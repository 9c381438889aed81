//! The dark "cyberpunk" look shared by the demo charts.

use plotly::common::Font;
use plotly::layout::{Axis, Layout};

/// Chart background fill.
pub const BACKGROUND: &str = "#212946";
/// Gridline color, a shade lighter than the background.
pub const GRID: &str = "#2A3459";
/// Axis label and legend text color.
pub const FOREGROUND: &str = "#D7D7D7";

/// Number of shadow traces stacked under a line to fake a glow.
pub const GLOW_LINES: usize = 10;
/// Line-width increment per shadow trace.
pub const GLOW_WIDTH_STEP: f64 = 1.05;
/// Total alpha spread across the shadow traces.
pub const GLOW_ALPHA: f64 = 0.3;

/// An RGB color that can render itself as an `rgba(...)` string for
/// plotly traces.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Formats the color with the given alpha, e.g. `rgba(0, 255, 0, 0.5)`.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }

    /// Formats the color fully opaque.
    pub fn solid(&self) -> String {
        self.rgba(1.0)
    }
}

/// The series palette of the original demos: blue, lime, red, pink.
pub const PALETTE: [Rgb; 4] = [
    Rgb(0, 0, 255),
    Rgb(0, 255, 0),
    Rgb(255, 0, 0),
    Rgb(255, 192, 203),
];

/// Returns the palette color for series `i`, cycling past the end.
pub fn series_color(i: usize) -> Rgb {
    PALETTE[i % PALETTE.len()]
}

/// The widths of the glow shadow traces, innermost first.
pub fn glow_widths(base_width: f64) -> Vec<f64> {
    (1..=GLOW_LINES)
        .map(|i| base_width + GLOW_WIDTH_STEP * i as f64)
        .collect()
}

/// Per-shadow-trace alpha so the stacked glow sums to [`GLOW_ALPHA`].
pub fn glow_alpha() -> f64 {
    GLOW_ALPHA / GLOW_LINES as f64
}

/// A dark layout with titled axes, gridlines and a legend.
pub fn layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(title)
        .paper_background_color(BACKGROUND)
        .plot_background_color(BACKGROUND)
        .font(Font::new().color(FOREGROUND))
        .show_legend(true)
        .x_axis(axis(x_title))
        .y_axis(axis(y_title))
}

/// A titled axis with themed gridlines.
pub fn axis(title: &str) -> Axis {
    Axis::new()
        .title(title)
        .grid_color(GRID)
        .show_grid(true)
        .zero_line(false)
}
