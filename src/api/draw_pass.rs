use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DataPoint, JoinCounts};
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::render::{LayerKind, Renderer};

use super::BarChart;
use super::layer_geometry::LayerGeometry;
use super::validation::validate_points;

/// Per-layer reconciliation counts of one draw pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    pub y_ticks: JoinCounts,
    pub bars: JoinCounts,
    pub x_values: JoinCounts,
    pub x_labels: JoinCounts,
}

impl<R: Renderer, T> BarChart<R, T> {
    /// Transforms, validates and draws `data`, replacing the previously drawn set.
    ///
    /// Rejected data, including data whose geometry cannot be drawn, leaves
    /// the previously drawn data and scene untouched.
    pub fn draw(&mut self, data: &[T]) -> ChartResult<DrawReport> {
        let points = (self.transform)(data)?;
        self.draw_points(points)
    }

    /// Re-runs the draw pass over the last drawn data.
    ///
    /// Returns `Ok(None)` when nothing has been drawn yet.
    pub fn redraw(&mut self) -> ChartResult<Option<DrawReport>> {
        let Some(points) = self.state.data.clone() else {
            return Ok(None);
        };
        self.draw_points(points).map(Some)
    }

    /// Runs one draw pass; any failure restores the previously committed
    /// data and scene before the error is returned.
    fn draw_points(&mut self, points: Vec<DataPoint>) -> ChartResult<DrawReport> {
        validate_points(&points)?;
        let checkpoint = self.checkpoint();
        match self.apply_draw_pass(points) {
            Ok(report) => {
                self.emit_plugin_event(PluginEvent::Drawn { bars: report.bars });
                Ok(report)
            }
            Err(err) => {
                self.restore(checkpoint);
                Err(err)
            }
        }
    }

    fn apply_draw_pass(&mut self, points: Vec<DataPoint>) -> ChartResult<DrawReport> {
        self.state.bind(points)?;

        let geometry = LayerGeometry::new(&self.state, self.config);
        debug!(
            bar_count = self.state.bar_count,
            bar_width = self.state.bar_width,
            data_max = self.state.data_max,
            "draw pass"
        );
        if self.state.bar_count > 0 && self.state.bar_width <= 0.0 {
            warn!(
                bar_count = self.state.bar_count,
                plot_width = self.state.plot_width(),
                "bars do not fit the plot width, drawing zero-width bars"
            );
        }
        if self.state.data_max <= 0.0 && self.state.bar_count > 0 {
            warn!("value axis ceiling is zero, drawing zero-height bars");
        }

        let ticks = geometry.y_ticks();
        let y_ticks = self.scene.reconcile_layer(
            LayerKind::YLabels,
            &ticks,
            |tick| tick.0.as_str(),
            |_, tick| geometry.y_tick(tick.1),
        );
        self.scene.layer_mut(LayerKind::YLabels).guides = geometry.y_domain();

        let points = self.state.data.as_deref().unwrap_or_default();
        let bars = self.scene.reconcile_layer(
            LayerKind::Bars,
            points,
            |point| point.name.as_str(),
            |index, point| geometry.bar(index, point),
        );
        let x_values = self.scene.reconcile_layer(
            LayerKind::XValues,
            points,
            |point| point.name.as_str(),
            |index, point| geometry.value_label(index, point),
        );
        let x_labels = self.scene.reconcile_layer(
            LayerKind::XLabels,
            points,
            |point| point.name.as_str(),
            |index, point| geometry.category_label(index, point),
        );
        self.scene.layer_mut(LayerKind::XLabels).guides = vec![geometry.label_boundary()];

        let report = DrawReport {
            y_ticks,
            bars,
            x_values,
            x_labels,
        };
        trace!(?report, "layers reconciled");

        // Overflowing unclamped bars can produce infinite coordinates.
        self.scene.validate()?;
        self.renderer.render(&self.scene)?;
        Ok(report)
    }
}
