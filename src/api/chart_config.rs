use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

/// Value below which a bar's value label is emphasised as under target.
pub const DEFAULT_UNDER_TARGET_THRESHOLD: f64 = 800.0;
pub const DEFAULT_Y_TICK_COUNT: usize = 4;
/// Upper bound on requested value-axis ticks.
pub const MAX_Y_TICK_COUNT: usize = 100;

/// Colors and sizes used when building scene primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartStyle {
    pub bar_color: Color,
    pub highlight_color: Color,
    pub label_color: Color,
    pub under_target_color: Color,
    pub axis_color: Color,
    pub font_size_px: f64,
    pub axis_line_width_px: f64,
    /// Length of value-axis tick lines, inner and outer.
    pub axis_tick_size_px: f64,
    /// Gap between a tick line and its label.
    pub axis_tick_padding_px: f64,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb8(0x46, 0x82, 0xb4),
            highlight_color: Color::rgb8(0xff, 0x8c, 0x00),
            label_color: Color::rgb8(0x22, 0x22, 0x22),
            under_target_color: Color::rgb(1.0, 0.0, 0.0),
            axis_color: Color::rgb8(0x22, 0x22, 0x22),
            font_size_px: 10.0,
            axis_line_width_px: 1.0,
            axis_tick_size_px: 6.0,
            axis_tick_padding_px: 3.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Layout margins are fixed and
/// intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub user_max: Option<f64>,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default = "default_under_target_threshold")]
    pub under_target_threshold: f64,
    /// Clamp bars of values above the axis ceiling to the plot height.
    #[serde(default = "default_clamp_to_max")]
    pub clamp_to_max: bool,
    #[serde(default)]
    pub style: BarChartStyle,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            user_max: None,
            y_tick_count: default_y_tick_count(),
            under_target_threshold: default_under_target_threshold(),
            clamp_to_max: default_clamp_to_max(),
            style: BarChartStyle::default(),
        }
    }

    /// Sets the initial value-axis ceiling; `None` derives it from data.
    #[must_use]
    pub fn with_max(mut self, user_max: Option<f64>) -> Self {
        self.user_max = user_max;
        self
    }

    #[must_use]
    pub fn with_y_tick_count(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    #[must_use]
    pub fn with_under_target_threshold(mut self, threshold: f64) -> Self {
        self.under_target_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_clamp_to_max(mut self, clamp: bool) -> Self {
        self.clamp_to_max = clamp;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: BarChartStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 200)
}

fn default_y_tick_count() -> usize {
    DEFAULT_Y_TICK_COUNT
}

fn default_under_target_threshold() -> f64 {
    DEFAULT_UNDER_TARGET_THRESHOLD
}

fn default_clamp_to_max() -> bool {
    true
}
