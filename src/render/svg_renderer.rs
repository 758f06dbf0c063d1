use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    AxisTickPrimitive, ClassList, ElementShape, LinePrimitive, RectPrimitive, Renderer, Scene,
    SceneLayer, TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes each rendered scene into a standalone SVG document.
///
/// The latest document replaces the previous one, mirroring a live SVG node
/// that is mutated in place by every draw pass.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document, empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn write_to_path(&self, path: &Path) -> ChartResult<()> {
        fs::write(path, &self.document).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        let mut document = String::with_capacity(256 + scene.element_count() * 160);
        write_scene(&mut document, scene)
            .map_err(|_| ChartError::InvalidData("failed to format svg document".to_owned()))?;
        trace!(bytes = document.len(), "svg document rendered");
        self.document = document;
        Ok(())
    }
}

fn write_scene(out: &mut String, scene: &Scene) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE}" class="Barchart" width="{}" height="{}">"#,
        scene.viewport.width, scene.viewport.height
    )?;
    for layer in scene.layers() {
        write_layer(out, layer)?;
    }
    writeln!(out, "</svg>")
}

fn write_layer(out: &mut String, layer: &SceneLayer) -> fmt::Result {
    writeln!(
        out,
        r#"  <g class="{}" transform="translate({},{})">"#,
        layer.kind.class_name(),
        num(layer.origin_x),
        num(layer.origin_y)
    )?;
    for guide in &layer.guides {
        out.push_str("    ");
        write_line(out, guide)?;
        out.push('\n');
    }
    for element in layer.elements() {
        out.push_str("    ");
        match &element.shape {
            ElementShape::Rect(rect) => write_rect(out, rect)?,
            ElementShape::Text(text) => write_text(out, text)?,
            ElementShape::Tick(tick) => write_tick(out, tick)?,
        }
        out.push('\n');
    }
    writeln!(out, "  </g>")
}

fn write_line(out: &mut String, line: &LinePrimitive) -> fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" shape-rendering="crispEdges"{}/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.stroke_width),
        Opacity("stroke-opacity", line.color.alpha)
    )
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> fmt::Result {
    write!(
        out,
        r#"<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
        Classes(&rect.classes),
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill.to_hex(),
        Opacity("fill-opacity", rect.fill.alpha)
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text{} x="{}" y="{}""#,
        Classes(&text.classes),
        num(text.x),
        num(text.y)
    )?;
    if text.dy_em != 0.0 {
        write!(out, r#" dy="{}em""#, num(text.dy_em))?;
    }
    write!(
        out,
        r#" text-anchor="{anchor}" font-size="{}" fill="{}""#,
        num(text.font_size_px),
        text.color.to_hex()
    )?;
    if text.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    write!(out, ">{}</text>", Escaped(&text.text))
}

fn write_tick(out: &mut String, tick: &AxisTickPrimitive) -> fmt::Result {
    write!(
        out,
        r#"<g class="tick" transform="translate(0,{})">"#,
        num(tick.offset_y)
    )?;
    write_line(out, &tick.line)?;
    if let Some(label) = &tick.label {
        write_text(out, label)?;
    }
    out.push_str("</g>");
    Ok(())
}

/// Coordinates rounded to a thousandth of a pixel, without trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}

struct Classes<'a>(&'a ClassList);

impl fmt::Display for Classes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, r#" class="{}""#, self.0.join(" "))
    }
}

struct Opacity(&'static str, f64);

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 >= 1.0 {
            return Ok(());
        }
        write!(f, r#" {}="{}""#, self.0, num(self.1))
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}
