use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// CSS classes attached to a rendered element.
pub type ClassList = SmallVec<[&'static str; 2]>;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// `#rrggbb` form; alpha is emitted separately as an opacity attribute.
    #[must_use]
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

/// Draw command for one line segment in layer-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub classes: ClassList,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            classes: ClassList::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|entry| *entry == class)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect height must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in layer-local pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Baseline shift in `em` units.
    pub dy_em: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
    pub classes: ClassList,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            dy_em: 0.0,
            font_size_px,
            color,
            h_align,
            bold: false,
            classes: ClassList::new(),
        }
    }

    #[must_use]
    pub fn with_dy_em(mut self, dy_em: f64) -> Self {
        self.dy_em = dy_em;
        self
    }

    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|entry| *entry == class)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.dy_em.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One value-axis tick: a group offset vertically to the tick position,
/// holding a short tick line and an optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTickPrimitive {
    pub value: f64,
    pub offset_y: f64,
    pub line: LinePrimitive,
    pub label: Option<TextPrimitive>,
}

impl AxisTickPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || !self.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "axis tick position must be finite".to_owned(),
            ));
        }
        self.line.validate()?;
        if let Some(label) = &self.label {
            label.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, RectPrimitive};

    #[test]
    fn hex_form_rounds_channels() {
        assert_eq!(Color::rgb8(0x22, 0x22, 0x22).to_hex(), "#222222");
        assert_eq!(Color::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn zero_height_rect_is_valid_but_negative_is_not() {
        let fill = Color::rgb(0.0, 0.0, 0.0);
        assert!(RectPrimitive::new(0.0, 0.0, 10.0, 0.0, fill).validate().is_ok());
        assert!(RectPrimitive::new(0.0, 0.0, 10.0, -1.0, fill).validate().is_err());
    }
}
