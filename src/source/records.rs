use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Number of most recent weeks shown by the payment chart.
pub const DEFAULT_RECENT_WINDOW: usize = 16;

/// One weekly payment total as exchanged on the wire.
///
/// `start`/`end` are display labels such as `01-Dec`/`07-Dec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub start: String,
    pub end: String,
    pub amount: Decimal,
}

impl PaymentRecord {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>, amount: Decimal) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            amount,
        }
    }
}

pub fn parse_payment_records(input: &str) -> ChartResult<Vec<PaymentRecord>> {
    let records: Vec<PaymentRecord> = serde_json::from_str(input)?;
    debug!(count = records.len(), "parsed payment records");
    Ok(records)
}

pub fn load_payment_records(path: &Path) -> ChartResult<Vec<PaymentRecord>> {
    let raw = fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_payment_records(&raw)
}

/// The trailing `count` entries, or all of them when there are fewer.
#[must_use]
pub fn latest<T>(records: &[T], count: usize) -> &[T] {
    &records[records.len().saturating_sub(count)..]
}

/// Maps records to bars named after the week's end label.
pub fn payment_points(records: &[PaymentRecord]) -> ChartResult<Vec<DataPoint>> {
    records
        .iter()
        .map(|record| {
            Ok(DataPoint::new(
                record.end.as_str(),
                decimal_to_f64(record.amount, "amount")?,
            ))
        })
        .collect()
}
