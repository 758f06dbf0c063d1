use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::WeeklyTotal;

/// Fixed amounts charged against the account.
///
/// `rent`, `option` and `rates` accrue per week; `penalty` once per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyCharges {
    pub rent: Decimal,
    pub option: Decimal,
    pub rates: Decimal,
    pub penalty: Decimal,
}

impl Default for MonthlyCharges {
    fn default() -> Self {
        Self {
            rent: Decimal::new(420, 0),
            option: Decimal::new(330, 0),
            rates: Decimal::new(50, 0),
            penalty: Decimal::new(100, 0),
        }
    }
}

/// A utility bill charged in the month it falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterBill {
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

impl WaterBill {
    #[must_use]
    pub fn new(year: i32, month: u32, amount: Decimal) -> Self {
        Self {
            year,
            month,
            amount,
        }
    }
}

#[must_use]
pub fn default_water_bills() -> Vec<WaterBill> {
    vec![
        WaterBill::new(2013, 1, Decimal::new(3605, 2)),
        WaterBill::new(2013, 6, Decimal::new(25542, 2)),
        WaterBill::new(2014, 1, Decimal::new(22509, 2)),
        WaterBill::new(2014, 5, Decimal::new(15405, 2)),
    ]
}

/// Payments and charges for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatement {
    /// Abbreviated month name, e.g. `Jan`.
    pub month: String,
    pub year: i32,
    pub paid: Decimal,
    pub bills: Decimal,
    pub rent: Decimal,
    pub option: Decimal,
    pub rates: Decimal,
    pub penalties: Decimal,
    pub owing: Decimal,
}

/// Rolls weekly totals up into chronologically ordered months.
///
/// A week belongs to the month its `end` date falls in. Bills are added to
/// the month they name; a bill for a month with no weeks is dropped.
#[must_use]
pub fn monthly_report(
    weeks: &[WeeklyTotal],
    charges: &MonthlyCharges,
    bills: &[WaterBill],
) -> Vec<MonthlyStatement> {
    let mut months: BTreeMap<(i32, u32), MonthlyStatement> = BTreeMap::new();
    for week in weeks {
        let key = (week.end.year(), week.end.month());
        let month = months.entry(key).or_insert_with(|| MonthlyStatement {
            month: week.end.format("%b").to_string(),
            year: key.0,
            paid: Decimal::ZERO,
            bills: Decimal::ZERO,
            rent: Decimal::ZERO,
            option: Decimal::ZERO,
            rates: Decimal::ZERO,
            penalties: charges.penalty,
            owing: Decimal::ZERO,
        });
        month.paid += week.amount;
        month.rent += charges.rent;
        month.option += charges.option;
        month.rates += charges.rates;
    }

    for bill in bills {
        match months.get_mut(&(bill.year, bill.month)) {
            Some(month) => month.bills += bill.amount,
            None => warn!(
                year = bill.year,
                month = bill.month,
                amount = %bill.amount,
                "water bill falls outside the reported weeks"
            ),
        }
    }

    let report: Vec<MonthlyStatement> = months
        .into_values()
        .map(|mut month| {
            month.owing = month.rent + month.option + month.rates + month.bills + month.penalties;
            month
        })
        .collect();
    debug!(months = report.len(), weeks = weeks.len(), "built monthly report");
    report
}
