//! Data acquisition for the payment chart.
//!
//! Sources produce `PaymentRecord`s and stay independent of chart
//! construction; `payment_points` is the transform that turns them into bars.
//! Bank statement exports are filtered into `Payment`s, summed per week and
//! rolled up into monthly account statements.

mod http;
mod monthly;
mod records;
mod statement;
mod weekly;

#[cfg(feature = "fetch")]
pub use http::ReqwestClient;
pub use http::{HttpClient, fetch_payment_records};
pub use monthly::{
    MonthlyCharges, MonthlyStatement, WaterBill, default_water_bills, monthly_report,
};
pub use records::{
    DEFAULT_RECENT_WINDOW, PaymentRecord, latest, load_payment_records, parse_payment_records,
    payment_points,
};
pub use statement::{
    DEFAULT_EXCLUDED_DESCRIPTIONS, StatementEntry, StatementFilter, load_statement_csv,
    parse_statement_csv,
};
pub use weekly::{Payment, WeeklyTotal, resample_weekly, weekly_totals};
