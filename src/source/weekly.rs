use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::PaymentRecord;

const WEEK_DAYS: i64 = 7;
const LABEL_FORMAT: &str = "%d-%b";

/// A single dated payment before weekly aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Payment {
    #[must_use]
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

/// Sum of the payments made in one 7-day window, `start..=end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotal {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub amount: Decimal,
}

impl WeeklyTotal {
    /// Wire form with `%d-%b` labels, e.g. `01-Dec`/`07-Dec`.
    #[must_use]
    pub fn to_record(&self) -> PaymentRecord {
        PaymentRecord::new(
            self.start.format(LABEL_FORMAT).to_string(),
            self.end.format(LABEL_FORMAT).to_string(),
            self.amount,
        )
    }
}

/// Sums payments into consecutive 7-day windows starting at `origin`.
///
/// Windows are emitted up to and including the one containing `until`; weeks
/// without payments carry a zero amount. Payments outside
/// `[origin, until]` are ignored.
pub fn weekly_totals(
    payments: &[Payment],
    origin: NaiveDate,
    until: NaiveDate,
) -> ChartResult<Vec<WeeklyTotal>> {
    if until < origin {
        return Err(ChartError::InvalidData(
            "weekly range end must not precede its origin".to_owned(),
        ));
    }

    let week_count = (until - origin).num_days() / WEEK_DAYS + 1;
    let mut totals = vec![Decimal::ZERO; week_count as usize];
    for payment in payments {
        if payment.date < origin || payment.date > until {
            continue;
        }
        let week = ((payment.date - origin).num_days() / WEEK_DAYS) as usize;
        totals[week] += payment.amount;
    }

    Ok(totals
        .into_iter()
        .enumerate()
        .map(|(week, amount)| {
            let start = origin + Duration::days(week as i64 * WEEK_DAYS);
            WeeklyTotal {
                start,
                end: start + Duration::days(WEEK_DAYS - 1),
                amount,
            }
        })
        .collect())
}

/// `weekly_totals` in the labelled wire form drawn by the payment chart.
pub fn resample_weekly(
    payments: &[Payment],
    origin: NaiveDate,
    until: NaiveDate,
) -> ChartResult<Vec<PaymentRecord>> {
    Ok(weekly_totals(payments, origin, until)?
        .iter()
        .map(WeeklyTotal::to_record)
        .collect())
}
