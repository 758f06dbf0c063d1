use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::{LayerKind, Renderer, Scene};

use super::BarChart;
use super::layer_geometry::{HIGHLIGHT_CLASS, UNDER_TARGET_CLASS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub element_id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSnapshot {
    pub element_id: u64,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTickSnapshot {
    pub value: f64,
    pub y: f64,
    pub label: Option<String>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Keyed layers are stored as `IndexMap`s so draw order survives a JSON
/// round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub user_max: Option<f64>,
    pub data_max: f64,
    pub bar_count: usize,
    pub bar_width: f64,
    pub bars: IndexMap<String, BarSnapshot>,
    pub value_labels: IndexMap<String, LabelSnapshot>,
    pub category_labels: IndexMap<String, LabelSnapshot>,
    pub y_ticks: Vec<AxisTickSnapshot>,
}

impl<R: Renderer, T> BarChart<R, T> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.state.viewport,
            user_max: self.state.user_max,
            data_max: self.state.data_max,
            bar_count: self.state.bar_count,
            bar_width: self.state.bar_width,
            bars: bar_snapshots(&self.scene),
            value_labels: label_snapshots(&self.scene, LayerKind::XValues),
            category_labels: label_snapshots(&self.scene, LayerKind::XLabels),
            y_ticks: tick_snapshots(&self.scene),
        }
    }
}

fn bar_snapshots(scene: &Scene) -> IndexMap<String, BarSnapshot> {
    scene
        .layer(LayerKind::Bars)
        .elements()
        .filter_map(|element| {
            let rect = element.shape.as_rect()?;
            Some((
                element.key.clone(),
                BarSnapshot {
                    element_id: element.id.get(),
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    highlight: rect.has_class(HIGHLIGHT_CLASS),
                },
            ))
        })
        .collect()
}

fn label_snapshots(scene: &Scene, kind: LayerKind) -> IndexMap<String, LabelSnapshot> {
    scene
        .layer(kind)
        .elements()
        .filter_map(|element| {
            let text = element.shape.as_text()?;
            Some((
                element.key.clone(),
                LabelSnapshot {
                    element_id: element.id.get(),
                    text: text.text.clone(),
                    x: text.x,
                    y: text.y,
                    emphasized: text.has_class(UNDER_TARGET_CLASS),
                },
            ))
        })
        .collect()
}

fn tick_snapshots(scene: &Scene) -> Vec<AxisTickSnapshot> {
    scene
        .layer(LayerKind::YLabels)
        .elements()
        .filter_map(|element| element.shape.as_tick())
        .map(|tick| AxisTickSnapshot {
            value: tick.value,
            y: tick.offset_y,
            label: tick.label.as_ref().map(|label| label.text.clone()),
        })
        .collect()
}
