//! Optional hooks around the chart core.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
