use crate::core::{
    DataPoint, LinearScale, format_integer_tick, format_value_label, linear_ticks,
};
use crate::render::{
    AxisTickPrimitive, ElementShape, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use super::BarChartConfig;
use super::chart_state::ChartState;

pub const BAR_CLASS: &str = "bar";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const LABEL_CLASS: &str = "label";
pub const UNDER_TARGET_CLASS: &str = "under-target";

/// Frozen numbers of one draw pass, shared by every layer builder.
#[derive(Debug, Clone, Copy)]
pub(super) struct LayerGeometry {
    height_px: f64,
    top: f64,
    bottom: f64,
    plot_width: f64,
    plot_height: f64,
    bar_width: f64,
    data_max: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
    config: BarChartConfig,
}

impl LayerGeometry {
    pub(super) fn new(state: &ChartState, config: BarChartConfig) -> Self {
        Self {
            height_px: f64::from(state.viewport.height),
            top: state.margins.top,
            bottom: state.margins.bottom,
            plot_width: state.plot_width(),
            plot_height: state.plot_height(),
            bar_width: state.bar_width,
            data_max: state.data_max,
            x_scale: state.x_scale,
            y_scale: state.y_scale,
            config,
        }
    }

    /// Pixel height of a bar: `y(dataMax - value)`, i.e. `plotH * value / dataMax`.
    ///
    /// A zero ceiling yields zero-height bars. Values above the ceiling are
    /// capped at the plot height when clamping is enabled.
    pub(super) fn bar_height(&self, value: f64) -> f64 {
        if self.data_max <= 0.0 {
            return 0.0;
        }
        let height = self.y_scale.map(self.data_max - value).max(0.0);
        if self.config.clamp_to_max {
            height.min(self.plot_height)
        } else {
            height
        }
    }

    pub(super) fn is_under_target(&self, value: f64) -> bool {
        value < self.config.under_target_threshold
    }

    fn bar_left(&self, index: usize) -> f64 {
        self.x_scale.map(index as f64)
    }

    pub(super) fn bar(&self, index: usize, point: &DataPoint) -> ElementShape {
        let style = self.config.style;
        let height = self.bar_height(point.value);
        let fill = if point.highlight {
            style.highlight_color
        } else {
            style.bar_color
        };
        let mut rect = RectPrimitive::new(
            self.bar_left(index),
            self.plot_height - height,
            self.bar_width,
            height,
            fill,
        )
        .with_class(BAR_CLASS);
        if point.highlight {
            rect = rect.with_class(HIGHLIGHT_CLASS);
        }
        ElementShape::Rect(rect)
    }

    pub(super) fn category_label(&self, index: usize, point: &DataPoint) -> ElementShape {
        let style = self.config.style;
        ElementShape::Text(
            TextPrimitive::new(
                point.name.as_str(),
                self.bar_left(index) - 0.5 + self.bar_width / 2.0,
                0.0,
                style.font_size_px,
                style.label_color,
                TextHAlign::Center,
            )
            .with_dy_em(1.0)
            .with_class(LABEL_CLASS),
        )
    }

    pub(super) fn value_label(&self, index: usize, point: &DataPoint) -> ElementShape {
        let style = self.config.style;
        let under_target = self.is_under_target(point.value);
        let color = if under_target {
            style.under_target_color
        } else {
            style.label_color
        };
        let mut text = TextPrimitive::new(
            format_value_label(point.value),
            self.bar_left(index) + self.bar_width / 2.0,
            self.height_px - self.bottom - self.top * 1.5 - self.bar_height(point.value),
            style.font_size_px,
            color,
            TextHAlign::Center,
        )
        .with_bold(under_target)
        .with_class(LABEL_CLASS);
        if under_target {
            text = text.with_class(UNDER_TARGET_CLASS);
        }
        ElementShape::Text(text)
    }

    /// Line across the top of the category label band.
    pub(super) fn label_boundary(&self) -> LinePrimitive {
        let style = self.config.style;
        LinePrimitive::new(
            0.0,
            0.0,
            self.plot_width,
            0.0,
            style.axis_line_width_px,
            style.axis_color,
        )
    }

    /// Keyed value-axis ticks. A zero ceiling collapses the axis to one `0` tick.
    pub(super) fn y_ticks(&self) -> Vec<(String, f64)> {
        if self.data_max <= 0.0 {
            return vec![("0".to_owned(), 0.0)];
        }
        linear_ticks(self.y_scale, self.config.y_tick_count)
            .into_iter()
            .map(|value| (format!("{value}"), value))
            .collect()
    }

    pub(super) fn y_tick(&self, value: f64) -> ElementShape {
        let style = self.config.style;
        let label = format_integer_tick(value).map(|text| {
            TextPrimitive::new(
                text,
                -(style.axis_tick_size_px + style.axis_tick_padding_px),
                0.0,
                style.font_size_px,
                style.label_color,
                TextHAlign::Right,
            )
            .with_dy_em(0.32)
        });
        ElementShape::Tick(AxisTickPrimitive {
            value,
            offset_y: self.y_scale.map(value),
            line: LinePrimitive::new(
                0.0,
                0.0,
                -style.axis_tick_size_px,
                0.0,
                style.axis_line_width_px,
                style.axis_color,
            ),
            label,
        })
    }

    /// Axis domain line with outer ticks at both range ends.
    pub(super) fn y_domain(&self) -> Vec<LinePrimitive> {
        let style = self.config.style;
        let (bottom, top) = self.y_scale.range();
        let outer = -style.axis_tick_size_px;
        let width = style.axis_line_width_px;
        let mut lines = vec![LinePrimitive::new(0.0, bottom, 0.0, top, width, style.axis_color)];
        if style.axis_tick_size_px > 0.0 {
            lines.push(LinePrimitive::new(outer, bottom, 0.0, bottom, width, style.axis_color));
            lines.push(LinePrimitive::new(outer, top, 0.0, top, width, style.axis_color));
        }
        lines
    }
}
