use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::Payment;

/// Descriptions of payments that do not count towards the account.
pub const DEFAULT_EXCLUDED_DESCRIPTIONS: &str = "alyssa|apple";

/// Day-first formats accepted in the date column, tried in order.
///
/// Two-digit years come first: `%Y` would otherwise read `14` as year 14.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%y", "%d/%m/%Y", "%d-%m-%y", "%d-%m-%Y", "%Y-%m-%d"];

/// One row of a bank statement export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub date: NaiveDate,
    pub paid: Decimal,
    pub description: String,
}

impl StatementEntry {
    #[must_use]
    pub fn new(date: NaiveDate, paid: Decimal, description: impl Into<String>) -> Self {
        Self {
            date,
            paid,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn to_payment(&self) -> Payment {
        Payment::new(self.date, self.paid)
    }
}

/// Parses a headerless `date,paid,description` statement.
///
/// Dates are day-first. Spaces inside the amount are dropped, so `1 250.00`
/// reads as `1250.00`; an empty amount reads as zero. Columns past the third
/// are ignored.
pub fn parse_statement_csv(input: &str) -> ChartResult<Vec<StatementEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let date = parse_day_first(record.get(0).unwrap_or_default())
            .ok_or_else(|| ChartError::InvalidData(format!("line {line}: unreadable date")))?;
        let paid = parse_amount(record.get(1).unwrap_or_default()).ok_or_else(|| {
            ChartError::InvalidData(format!("line {line}: unreadable paid amount"))
        })?;
        let description = record.get(2).unwrap_or_default();
        entries.push(StatementEntry::new(date, paid, description));
    }

    debug!(count = entries.len(), "parsed statement entries");
    Ok(entries)
}

pub fn load_statement_csv(path: &Path) -> ChartResult<Vec<StatementEntry>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_statement_csv(&raw)
}

fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&compact).ok()
}

/// Keeps the statement rows that count as payments towards the account.
#[derive(Debug, Clone)]
pub struct StatementFilter {
    min_paid: Decimal,
    excluded: Regex,
}

impl StatementFilter {
    /// Rows pass when `paid > min_paid` and the description does not match
    /// `excluded_pattern`, compared case-insensitively.
    pub fn new(min_paid: Decimal, excluded_pattern: &str) -> ChartResult<Self> {
        let excluded = RegexBuilder::new(excluded_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| ChartError::InvalidData(format!("invalid exclusion pattern: {err}")))?;
        Ok(Self { min_paid, excluded })
    }

    /// Payments above 1 whose description names neither excluded payer.
    pub fn standard() -> ChartResult<Self> {
        Self::new(Decimal::ONE, DEFAULT_EXCLUDED_DESCRIPTIONS)
    }

    #[must_use]
    pub fn accepts(&self, entry: &StatementEntry) -> bool {
        entry.paid > self.min_paid && !self.excluded.is_match(&entry.description)
    }

    #[must_use]
    pub fn apply(&self, entries: &[StatementEntry]) -> Vec<Payment> {
        let payments: Vec<Payment> = entries
            .iter()
            .filter(|entry| self.accepts(entry))
            .map(StatementEntry::to_payment)
            .collect();
        debug!(
            kept = payments.len(),
            dropped = entries.len() - payments.len(),
            "filtered statement entries"
        );
        payments
    }
}
