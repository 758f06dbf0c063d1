use approx::assert_abs_diff_eq;
use barchart_rs::core::{ChartMargins, LinearScale, Viewport};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0)
        .and_then(|scale| scale.with_range(0.0, 1000.0))
        .expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px).expect("from pixel");

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn index_scale_places_bars_at_equal_steps() {
    let scale = LinearScale::new(0.0, 4.0)
        .and_then(|scale| scale.with_range(0.0, 750.0))
        .expect("valid scale");

    assert_abs_diff_eq!(scale.map(0.0), 0.0);
    assert_abs_diff_eq!(scale.map(1.0), 187.5);
    assert_abs_diff_eq!(scale.map(4.0), 750.0);
}

#[test]
fn value_scale_is_inverted_for_svg_coordinates() {
    let scale = LinearScale::new(0.0, 800.0)
        .and_then(|scale| scale.with_range(175.0, 0.0))
        .expect("valid scale");

    assert_abs_diff_eq!(scale.map(0.0), 175.0);
    assert_abs_diff_eq!(scale.map(800.0), 0.0);
    assert_abs_diff_eq!(scale.map(800.0 - 100.0), 21.875);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new(0.0, f64::INFINITY).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    assert!(
        LinearScale::default()
            .with_range(0.0, f64::NAN)
            .is_err()
    );
}

#[test]
fn zero_span_domain_never_produces_nan() {
    let scale = LinearScale::new(0.0, 0.0)
        .and_then(|scale| scale.with_range(175.0, 0.0))
        .expect("degenerate scale is allowed");

    for value in [0.0, 1.0, 1_000.0] {
        let px = scale.map(value);
        assert!(px.is_finite());
        assert_abs_diff_eq!(px, 175.0);
    }
}

#[test]
fn empty_range_cannot_be_inverted() {
    let scale = LinearScale::new(0.0, 10.0)
        .and_then(|scale| scale.with_range(5.0, 5.0))
        .expect("valid scale");
    assert!(scale.invert(5.0).is_err());
}

#[test]
fn default_margins_leave_a_750_by_175_plot() {
    let margins = ChartMargins::DEFAULT;
    let viewport = Viewport::new(800, 200);
    assert_abs_diff_eq!(margins.plot_width(viewport), 750.0);
    assert_abs_diff_eq!(margins.plot_height(viewport), 175.0);
}

#[test]
fn bar_width_clamps_to_zero_when_paddings_overflow() {
    let margins = ChartMargins::DEFAULT;
    assert_abs_diff_eq!(margins.bar_width(50.0, 10), 0.0);
    assert_abs_diff_eq!(margins.bar_width(750.0, 16), (750.0 - 150.0) / 16.0);
}
