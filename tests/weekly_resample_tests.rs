use barchart_rs::source::{Payment, resample_weekly};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn payments_are_summed_per_seven_day_window() {
    let payments = [
        Payment::new(date(2019, 12, 1), Decimal::new(300, 0)),
        Payment::new(date(2019, 12, 7), Decimal::new(200, 0)),
        Payment::new(date(2019, 12, 8), Decimal::new(125, 0)),
        Payment::new(date(2019, 12, 20), Decimal::new(7550, 2)),
    ];
    let weeks = resample_weekly(&payments, date(2019, 12, 1), date(2019, 12, 21)).expect("resample");

    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[0].start, "01-Dec");
    assert_eq!(weeks[0].end, "07-Dec");
    assert_eq!(weeks[0].amount, Decimal::new(500, 0));
    assert_eq!(weeks[1].start, "08-Dec");
    assert_eq!(weeks[1].end, "14-Dec");
    assert_eq!(weeks[1].amount, Decimal::new(125, 0));
    assert_eq!(weeks[2].end, "21-Dec");
    assert_eq!(weeks[2].amount, Decimal::new(7550, 2));
}

#[test]
fn weeks_without_payments_are_zero() {
    let payments = [Payment::new(date(2020, 1, 20), Decimal::new(800, 0))];
    let weeks = resample_weekly(&payments, date(2020, 1, 5), date(2020, 1, 25)).expect("resample");
    let amounts: Vec<Decimal> = weeks.iter().map(|week| week.amount).collect();
    assert_eq!(amounts, vec![Decimal::ZERO, Decimal::ZERO, Decimal::new(800, 0)]);
}

#[test]
fn window_labels_cross_month_boundaries() {
    let weeks = resample_weekly(&[], date(2019, 12, 29), date(2020, 1, 4)).expect("resample");
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].start, "29-Dec");
    assert_eq!(weeks[0].end, "04-Jan");
}

#[test]
fn payments_outside_the_range_are_ignored() {
    let payments = [
        Payment::new(date(2019, 11, 30), Decimal::new(999, 0)),
        Payment::new(date(2019, 12, 2), Decimal::new(10, 0)),
        Payment::new(date(2019, 12, 9), Decimal::new(999, 0)),
    ];
    let weeks = resample_weekly(&payments, date(2019, 12, 1), date(2019, 12, 7)).expect("resample");
    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].amount, Decimal::new(10, 0));
}

#[test]
fn inverted_range_is_rejected() {
    assert!(resample_weekly(&[], date(2020, 1, 8), date(2020, 1, 1)).is_err());
}
