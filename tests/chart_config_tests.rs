use barchart_rs::api::{
    BarChart, BarChartConfig, BarChartStyle, DEFAULT_UNDER_TARGET_THRESHOLD, DEFAULT_Y_TICK_COUNT,
    MAX_Y_TICK_COUNT,
};
use barchart_rs::core::Viewport;
use barchart_rs::render::{Color, NullRenderer};

#[test]
fn defaults_match_the_payment_chart() {
    let config = BarChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(800, 200));
    assert_eq!(config.user_max, None);
    assert_eq!(config.y_tick_count, DEFAULT_Y_TICK_COUNT);
    assert_eq!(config.under_target_threshold, DEFAULT_UNDER_TARGET_THRESHOLD);
    assert!(config.clamp_to_max);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = BarChartConfig::from_json_str(r#"{"user_max": 2100.0}"#).expect("parse");
    assert_eq!(config.user_max, Some(2100.0));
    assert_eq!(config.viewport, Viewport::new(800, 200));
    assert_eq!(config.style, BarChartStyle::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = BarChartConfig::new(Viewport::new(640, 240))
        .with_max(Some(1500.0))
        .with_y_tick_count(6)
        .with_under_target_threshold(500.0)
        .with_clamp_to_max(false);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(BarChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn malformed_config_json_is_an_error() {
    assert!(BarChartConfig::from_json_str("{\"viewport\": 3}").is_err());
}

#[test]
fn invalid_configs_fail_chart_construction() {
    let zero_ticks = BarChartConfig::default().with_y_tick_count(0);
    assert!(BarChart::new(NullRenderer::default(), zero_ticks).is_err());

    let tiny = BarChartConfig::new(Viewport::new(50, 200));
    assert!(BarChart::new(NullRenderer::default(), tiny).is_err());

    let style = BarChartStyle {
        bar_color: Color::rgba(1.5, 0.0, 0.0, 1.0),
        ..BarChartStyle::default()
    };
    let bad_color = BarChartConfig::default().with_style(style);
    assert!(BarChart::new(NullRenderer::default(), bad_color).is_err());
}

#[test]
fn custom_threshold_changes_emphasis() {
    let config = BarChartConfig::default().with_under_target_threshold(50.0);
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .draw(&[
            barchart_rs::core::DataPoint::new("A", 40.0),
            barchart_rs::core::DataPoint::new("B", 60.0),
        ])
        .expect("draw");
    let snapshot = chart.snapshot();
    assert!(snapshot.value_labels["A"].emphasized);
    assert!(!snapshot.value_labels["B"].emphasized);
}

#[test]
fn y_tick_count_is_bounded() {
    let at_limit = BarChartConfig::default().with_y_tick_count(MAX_Y_TICK_COUNT);
    assert!(BarChart::new(NullRenderer::default(), at_limit).is_ok());

    let config = BarChartConfig::from_json_str(r#"{"y_tick_count": 1000000000}"#).expect("parse");
    assert!(BarChart::new(NullRenderer::default(), config).is_err());
}
