mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;
mod svg_renderer;

pub use layer_stack::LayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisTickPrimitive, ClassList, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use scene::{ElementId, ElementShape, Scene, SceneElement, SceneLayer};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the retained, already reconciled `Scene` so drawing code
/// stays isolated from scale math and data binding.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}
