pub mod axis;
pub mod join;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis::{AxisTicks, format_integer_tick, linear_ticks, nice_tick_step};
pub use join::{JoinCounts, KeyedJoin, plan_join};
pub use layout::ChartMargins;
pub use primitives::{decimal_to_f64, format_value_label};
pub use scale::LinearScale;
pub use types::{DataPoint, Viewport};
