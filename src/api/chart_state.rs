use ordered_float::OrderedFloat;

use crate::core::{ChartMargins, DataPoint, LinearScale, Viewport};
use crate::error::ChartResult;

/// Mutable per-chart state: dimensions, the axis ceiling override, the last
/// bound data and everything derived from them.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartState {
    pub(super) viewport: Viewport,
    pub(super) margins: ChartMargins,
    pub(super) user_max: Option<f64>,
    /// `None` until the first draw pass.
    pub(super) data: Option<Vec<DataPoint>>,
    pub(super) bar_count: usize,
    pub(super) bar_width: f64,
    pub(super) data_max: f64,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
}

impl ChartState {
    pub(super) fn new(
        viewport: Viewport,
        margins: ChartMargins,
        user_max: Option<f64>,
    ) -> ChartResult<Self> {
        let mut state = Self {
            viewport,
            margins,
            user_max,
            data: None,
            bar_count: 0,
            bar_width: 0.0,
            data_max: user_max.unwrap_or(0.0),
            x_scale: LinearScale::default(),
            y_scale: LinearScale::default(),
        };
        state.update_ranges()?;
        Ok(state)
    }

    pub(super) fn plot_width(&self) -> f64 {
        self.margins.plot_width(self.viewport)
    }

    pub(super) fn plot_height(&self) -> f64 {
        self.margins.plot_height(self.viewport)
    }

    /// Recomputes scale ranges from the viewport: x spans `[0, plotW]`, y is
    /// inverted to `[plotH, 0]`.
    pub(super) fn update_ranges(&mut self) -> ChartResult<()> {
        self.x_scale = self.x_scale.with_range(0.0, self.plot_width())?;
        self.y_scale = self.y_scale.with_range(self.plot_height(), 0.0)?;
        Ok(())
    }

    /// Binds `points` and recomputes bar layout and both scale domains.
    pub(super) fn bind(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        let bar_count = points.len();
        let bar_width = self.margins.bar_width(self.plot_width(), bar_count);
        let data_max = self.user_max.unwrap_or_else(|| max_value(&points));
        let x_scale = self.x_scale.with_domain(0.0, bar_count as f64)?;
        let y_scale = self.y_scale.with_domain(0.0, data_max)?;

        self.data = Some(points);
        self.bar_count = bar_count;
        self.bar_width = bar_width;
        self.data_max = data_max;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        Ok(())
    }
}

fn max_value(points: &[DataPoint]) -> f64 {
    points
        .iter()
        .map(|point| OrderedFloat(point.value))
        .max()
        .map_or(0.0, OrderedFloat::into_inner)
}
