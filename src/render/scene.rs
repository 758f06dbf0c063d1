use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{JoinCounts, Viewport, plan_join};
use crate::error::{ChartError, ChartResult};

use super::{
    AxisTickPrimitive, LayerKind, LinePrimitive, RectPrimitive, TextPrimitive,
};

/// Identity of a rendered element. Stays fixed while its key persists across
/// draw passes; a key that exits and later re-enters gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementShape {
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Tick(AxisTickPrimitive),
}

impl ElementShape {
    #[must_use]
    pub fn as_rect(&self) -> Option<&RectPrimitive> {
        match self {
            Self::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_tick(&self) -> Option<&AxisTickPrimitive> {
        match self {
            Self::Tick(tick) => Some(tick),
            _ => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Tick(tick) => tick.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub key: String,
    pub shape: ElementShape,
}

/// One persistent group of keyed elements, translated by `origin`.
///
/// `guides` are unkeyed decorations (axis domain, boundary lines) that are
/// replaced wholesale on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayer {
    pub kind: LayerKind,
    pub origin_x: f64,
    pub origin_y: f64,
    pub guides: Vec<LinePrimitive>,
    elements: IndexMap<String, SceneElement>,
}

impl SceneLayer {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            origin_x: 0.0,
            origin_y: 0.0,
            guides: Vec::new(),
            elements: IndexMap::new(),
        }
    }

    /// Elements in draw order.
    pub fn elements(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    #[must_use]
    pub fn element(&self, key: &str) -> Option<&SceneElement> {
        self.elements.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
    }

    fn reconcile<T>(
        &mut self,
        next: &[T],
        key: impl Fn(&T) -> &str,
        next_id: &mut u64,
        mut build: impl FnMut(usize, &T) -> ElementShape,
    ) -> JoinCounts {
        let join = plan_join(self.keys(), next, &key);
        let mut previous = std::mem::take(&mut self.elements);
        for exited in &join.exit {
            previous.swap_remove(exited.as_str());
        }

        let mut reconciled = IndexMap::with_capacity(next.len());
        for (index, item) in next.iter().enumerate() {
            let item_key = key(item);
            if reconciled.contains_key(item_key) {
                continue;
            }
            let id = match previous.swap_remove(item_key) {
                Some(existing) => existing.id,
                None => {
                    *next_id += 1;
                    ElementId(*next_id)
                }
            };
            reconciled.insert(
                item_key.to_owned(),
                SceneElement {
                    id,
                    key: item_key.to_owned(),
                    shape: build(index, item),
                },
            );
        }
        self.elements = reconciled;
        join.counts()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(ChartError::InvalidData(
                "layer origin must be finite".to_owned(),
            ));
        }
        for guide in &self.guides {
            guide.validate()?;
        }
        for element in self.elements.values() {
            element.shape.validate()?;
        }
        Ok(())
    }
}

/// Retained element tree of one chart: a root of `viewport` size holding the
/// layers in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    layers: Vec<SceneLayer>,
    next_element_id: u64,
}

impl Scene {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: LayerKind::CANONICAL_ORDER
                .into_iter()
                .map(SceneLayer::new)
                .collect(),
            next_element_id: 0,
        }
    }

    #[must_use]
    pub fn layers(&self) -> &[SceneLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &SceneLayer {
        &self.layers[kind.index()]
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut SceneLayer {
        &mut self.layers[kind.index()]
    }

    /// Keyed enter/update/exit of one layer against `next`.
    ///
    /// Persisting keys keep their element id, new keys get a fresh one, and
    /// the layer ends up ordered exactly like `next`.
    pub fn reconcile_layer<T>(
        &mut self,
        kind: LayerKind,
        next: &[T],
        key: impl Fn(&T) -> &str,
        build: impl FnMut(usize, &T) -> ElementShape,
    ) -> JoinCounts {
        let layer = &mut self.layers[kind.index()];
        layer.reconcile(next, key, &mut self.next_element_id, build)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.layers.iter().map(SceneLayer::len).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementShape, Scene};
    use crate::core::Viewport;
    use crate::render::{Color, LayerKind, RectPrimitive};

    fn rect(_index: usize, value: &(&str, f64)) -> ElementShape {
        ElementShape::Rect(RectPrimitive::new(0.0, 0.0, 1.0, value.1, Color::rgb(0.0, 0.0, 0.0)))
    }

    #[test]
    fn persisting_keys_keep_their_ids_and_follow_data_order() {
        let mut scene = Scene::new(Viewport::new(100, 100));
        let first = [("a", 1.0), ("b", 2.0)];
        scene.reconcile_layer(LayerKind::Bars, &first, |item| item.0, rect);
        let id_b = scene.layer(LayerKind::Bars).element("b").map(|e| e.id);

        let second = [("b", 3.0), ("c", 4.0), ("a", 5.0)];
        let counts = scene.reconcile_layer(LayerKind::Bars, &second, |item| item.0, rect);

        assert_eq!(counts.entered, 1);
        assert_eq!(counts.updated, 2);
        assert_eq!(counts.exited, 0);
        let layer = scene.layer(LayerKind::Bars);
        assert_eq!(layer.keys().collect::<Vec<_>>(), vec!["b", "c", "a"]);
        assert_eq!(layer.element("b").map(|e| e.id), id_b);
    }

    #[test]
    fn re_entering_key_gets_a_fresh_id() {
        let mut scene = Scene::new(Viewport::new(100, 100));
        scene.reconcile_layer(LayerKind::Bars, &[("a", 1.0)], |item| item.0, rect);
        let old = scene.layer(LayerKind::Bars).element("a").map(|e| e.id);
        scene.reconcile_layer(LayerKind::Bars, &[("z", 1.0)], |item| item.0, rect);
        scene.reconcile_layer(LayerKind::Bars, &[("a", 1.0)], |item| item.0, rect);
        let new = scene.layer(LayerKind::Bars).element("a").map(|e| e.id);
        assert_ne!(old, new);
    }
}
