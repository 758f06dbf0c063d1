use tracing::debug;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::BarChart;
use super::validation::validate_user_max;

impl<R: Renderer, T> BarChart<R, T> {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.state.viewport.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.state.viewport.height
    }

    /// Current value-axis ceiling override.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.state.user_max
    }

    /// Sets the chart width and redraws the last data, if any.
    ///
    /// A failed redraw leaves the previous size in place.
    pub fn set_width(&mut self, width: u32) -> ChartResult<()> {
        self.resize(Viewport::new(width, self.state.viewport.height))
    }

    /// Sets the chart height and redraws the last data, if any.
    pub fn set_height(&mut self, height: u32) -> ChartResult<()> {
        self.resize(Viewport::new(self.state.viewport.width, height))
    }

    /// Sets both dimensions with a single redraw.
    pub fn set_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.resize(Viewport::new(width, height))
    }

    /// Overrides the automatic value-axis ceiling; `None` restores it.
    ///
    /// The change is only committed when the redraw succeeds.
    pub fn set_max(&mut self, user_max: Option<f64>) -> ChartResult<()> {
        let user_max = validate_user_max(user_max)?;
        let checkpoint = self.checkpoint();
        self.state.user_max = user_max;
        self.config.user_max = user_max;
        if let Err(err) = self.redraw() {
            self.restore(checkpoint);
            return Err(err);
        }
        debug!(user_max = ?user_max, "chart max changed");
        self.emit_plugin_event(PluginEvent::MaxChanged { user_max });
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.state.margins.validate_viewport(viewport)?;
        let checkpoint = self.checkpoint();
        if let Err(err) = self.apply_resize(viewport) {
            self.restore(checkpoint);
            return Err(err);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "chart resized"
        );
        self.emit_plugin_event(PluginEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    fn apply_resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.state.viewport = viewport;
        self.state.update_ranges()?;
        self.config.viewport = viewport;
        self.scene.viewport = viewport;
        self.sync_layer_origins();
        self.redraw()?;
        Ok(())
    }
}
