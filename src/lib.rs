//! barchart-rs: a keyed-reconciliation bar chart rendered to SVG.
//!
//! A `BarChart` binds an ordered set of named values to three aligned layers
//! (bars, value labels, category labels) plus a value axis, recomputing scales
//! whenever data, dimensions or the axis ceiling change.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod source;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
