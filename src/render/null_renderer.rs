use crate::error::ChartResult;
use crate::render::{LayerKind, Renderer, Scene};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates scene content so tests catch invalid geometry without
/// producing a document.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_element_count: usize,
    pub last_bar_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_element_count = scene.element_count();
        self.last_bar_count = scene.layer(LayerKind::Bars).len();
        Ok(())
    }
}
