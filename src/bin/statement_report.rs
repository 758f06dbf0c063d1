use std::path::PathBuf;

use barchart_rs::source::{
    MonthlyCharges, StatementFilter, WeeklyTotal, default_water_bills, load_statement_csv,
    monthly_report, weekly_totals,
};
use barchart_rs::telemetry::init_default_tracing;
use chrono::NaiveDate;

const USAGE: &str = "usage: statement_report --input <statement.csv> [--origin <yyyy-mm-dd>] \
[--until <yyyy-mm-dd>] [--weekly]";

const DEFAULT_ORIGIN: &str = "2012-12-01";

struct CliArgs {
    input: PathBuf,
    origin: NaiveDate,
    until: NaiveDate,
    weekly: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let entries = load_statement_csv(&args.input).map_err(|err| err.to_string())?;
    let filter = StatementFilter::standard().map_err(|err| err.to_string())?;
    let weeks = weekly_totals(&filter.apply(&entries), args.origin, args.until)
        .map_err(|err| err.to_string())?;

    let json = if args.weekly {
        let records: Vec<_> = weeks.iter().map(WeeklyTotal::to_record).collect();
        serde_json::to_string_pretty(&records)
    } else {
        let report = monthly_report(&weeks, &MonthlyCharges::default(), &default_water_bills());
        serde_json::to_string_pretty(&report)
    }
    .map_err(|err| format!("failed to serialize report: {err}"))?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = None::<PathBuf>;
    let mut origin = parse_date("--origin", DEFAULT_ORIGIN)?;
    let mut until = chrono::Local::now().date_naive();
    let mut weekly = false;

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("missing value for {flag}\n{USAGE}"));
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--origin" => origin = parse_date(&flag, &value()?)?,
            "--until" => until = parse_date(&flag, &value()?)?,
            "--weekly" => weekly = true,
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        origin,
        until,
        weekly,
    })
}

fn parse_date(flag: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid date `{raw}` for {flag}"))
}
