use std::sync::Arc;

use tracing::debug;

use crate::core::{ChartMargins, DataPoint, LinearScale, Viewport};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::render::{LayerKind, Renderer, Scene};

use super::chart_state::ChartState;
use super::validation::validate_config;
use super::BarChartConfig;

/// Converts caller records into bar data before every draw pass.
pub type DataTransform<T> = Arc<dyn Fn(&[T]) -> ChartResult<Vec<DataPoint>> + Send + Sync>;

/// Committed chart state restored when an operation fails part-way.
pub(super) struct Checkpoint {
    state: ChartState,
    scene: Scene,
    config: BarChartConfig,
}

/// Bar chart facade consumed by host applications.
///
/// `BarChart` owns its scales, its retained scene and the last drawn data.
/// Every setter that changes geometry re-runs the draw pass over that data,
/// then hands the reconciled scene to the renderer.
pub struct BarChart<R: Renderer, T = DataPoint> {
    pub(super) renderer: R,
    pub(super) transform: DataTransform<T>,
    pub(super) config: BarChartConfig,
    pub(super) state: ChartState,
    pub(super) scene: Scene,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> BarChart<R> {
    /// Creates a chart that draws `DataPoint`s as given.
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        Self::with_transform(renderer, config, Arc::new(identity_transform))
    }
}

fn identity_transform(points: &[DataPoint]) -> ChartResult<Vec<DataPoint>> {
    Ok(points.to_vec())
}

impl<R: Renderer, T> BarChart<R, T> {
    /// Creates a chart whose `draw` input is mapped through `transform`.
    pub fn with_transform(
        renderer: R,
        config: BarChartConfig,
        transform: DataTransform<T>,
    ) -> ChartResult<Self> {
        let margins = ChartMargins::DEFAULT;
        let config = validate_config(config, margins)?;
        let state = ChartState::new(config.viewport, margins, config.user_max)?;

        let mut chart = Self {
            renderer,
            transform,
            config,
            state,
            scene: Scene::new(config.viewport),
            plugins: Vec::new(),
        };
        chart.sync_layer_origins();
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            user_max = ?config.user_max,
            "bar chart created"
        );
        Ok(chart)
    }

    pub(super) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            scene: self.scene.clone(),
            config: self.config,
        }
    }

    pub(super) fn restore(&mut self, checkpoint: Checkpoint) {
        self.state = checkpoint.state;
        self.scene = checkpoint.scene;
        self.config = checkpoint.config;
    }

    /// Places the four layer groups relative to the margins and current height.
    pub(super) fn sync_layer_origins(&mut self) {
        let margins = self.state.margins;
        let height = f64::from(self.state.viewport.height);
        self.scene
            .layer_mut(LayerKind::YLabels)
            .set_origin(margins.left - 1.0, margins.top + 1.0);
        self.scene
            .layer_mut(LayerKind::Bars)
            .set_origin(margins.left, margins.top + 1.0);
        self.scene
            .layer_mut(LayerKind::XValues)
            .set_origin(margins.left, margins.top + 1.0);
        self.scene
            .layer_mut(LayerKind::XLabels)
            .set_origin(margins.left, height - margins.bottom + 1.0);
    }

    #[must_use]
    pub fn config(&self) -> BarChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    #[must_use]
    pub fn margins(&self) -> ChartMargins {
        self.state.margins
    }

    /// Last drawn data, `None` before the first draw.
    #[must_use]
    pub fn data(&self) -> Option<&[DataPoint]> {
        self.state.data.as_deref()
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.state.bar_count
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.state.bar_width
    }

    /// Effective value-axis ceiling of the last draw pass.
    #[must_use]
    pub fn data_max(&self) -> f64 {
        self.state.data_max
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.state.plot_height()
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.state.plot_width()
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.state.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.state.y_scale
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
