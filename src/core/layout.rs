use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Margins reserved around the plot for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Horizontal gap between adjacent bars.
    pub padding: f64,
}

impl ChartMargins {
    pub const DEFAULT: Self = Self {
        top: 10.0,
        bottom: 15.0,
        left: 50.0,
        right: 0.0,
        padding: 10.0,
    };

    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> f64 {
        f64::from(viewport.width) - self.left - self.right
    }

    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> f64 {
        f64::from(viewport.height) - self.bottom - self.top
    }

    /// Rejects viewports that leave no room for the plot after margins.
    pub fn validate_viewport(self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid()
            || self.plot_width(viewport) <= 0.0
            || self.plot_height(viewport) <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(())
    }

    /// Width of one bar once `bar_count - 1` paddings are taken out of the plot.
    ///
    /// Returns `0.0` for an empty chart and when the paddings alone exceed the
    /// plot width.
    #[must_use]
    pub fn bar_width(self, plot_width: f64, bar_count: usize) -> f64 {
        if bar_count == 0 {
            return 0.0;
        }
        let gaps = (bar_count - 1) as f64 * self.padding;
        ((plot_width - gaps) / bar_count as f64).max(0.0)
    }
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self::DEFAULT
    }
}
