use serde::{Deserialize, Serialize};

use crate::core::{JoinCounts, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub user_max: Option<f64>,
    pub data_max: f64,
    pub bar_count: usize,
    pub bar_width: f64,
}

/// Event stream exposed to plugins.
///
/// Every event is emitted once the operation has been committed, so the
/// accompanying `PluginContext` already reflects the redrawn chart. A setter
/// that redraws emits `Drawn` first, then its own change event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Resized { width: u32, height: u32 },
    MaxChanged { user_max: Option<f64> },
    Drawn { bars: JoinCounts },
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read chart context without mutating chart
/// state directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
