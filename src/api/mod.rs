mod chart;
mod chart_config;
mod chart_snapshot;
mod chart_state;
mod dimensions;
mod draw_pass;
mod json_contract;
mod layer_geometry;
mod plugin_registry;
mod validation;

pub use chart::{BarChart, DataTransform};
pub use chart_config::{
    BarChartConfig, BarChartStyle, DEFAULT_UNDER_TARGET_THRESHOLD, DEFAULT_Y_TICK_COUNT,
    MAX_Y_TICK_COUNT,
};
pub use chart_snapshot::{AxisTickSnapshot, BarSnapshot, ChartSnapshot, LabelSnapshot};
pub use draw_pass::DrawReport;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use layer_geometry::{BAR_CLASS, HIGHLIGHT_CLASS, LABEL_CLASS, UNDER_TARGET_CLASS};

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
