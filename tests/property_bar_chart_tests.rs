use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::{DataPoint, Viewport};
use barchart_rs::render::{LayerKind, NullRenderer};
use proptest::prelude::*;

fn named(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| DataPoint::new(format!("k{index}"), *value))
        .collect()
}

fn chart(width: u32, height: u32) -> BarChart<NullRenderer> {
    BarChart::new(
        NullRenderer::default(),
        BarChartConfig::new(Viewport::new(width, height)),
    )
    .expect("chart init")
}

proptest! {
    #[test]
    fn every_keyed_layer_holds_one_element_per_point(
        values in proptest::collection::vec(0.0f64..5_000.0, 0..40),
        width in 60u32..2_000,
        height in 30u32..800,
    ) {
        let mut chart = chart(width, height);
        chart.draw(&named(&values)).expect("draw");
        for kind in [LayerKind::Bars, LayerKind::XValues, LayerKind::XLabels] {
            prop_assert_eq!(chart.scene().layer(kind).len(), values.len());
        }
    }

    #[test]
    fn redrawing_identical_data_changes_nothing(
        values in proptest::collection::vec(0.0f64..5_000.0, 1..40),
    ) {
        let mut chart = chart(800, 200);
        let points = named(&values);
        chart.draw(&points).expect("first draw");
        let first = chart.snapshot();

        let report = chart.draw(&points).expect("second draw");
        prop_assert_eq!(report.bars.entered, 0);
        prop_assert_eq!(report.bars.exited, 0);
        prop_assert_eq!(report.bars.updated, values.len());
        prop_assert_eq!(chart.snapshot(), first);
    }

    #[test]
    fn bar_heights_are_monotonic_in_value_and_fit_the_plot(
        values in proptest::collection::vec(0.0f64..5_000.0, 1..40),
        user_max in proptest::option::of(1.0f64..6_000.0),
    ) {
        let mut chart = chart(800, 200);
        chart.set_max(user_max).expect("set max");
        let points = named(&values);
        chart.draw(&points).expect("draw");

        let snapshot = chart.snapshot();
        let plot_height = chart.plot_height();
        for (a, b) in points.iter().zip(points.iter().skip(1)) {
            let height_a = snapshot.bars[a.name.as_str()].height;
            let height_b = snapshot.bars[b.name.as_str()].height;
            if a.value <= b.value {
                prop_assert!(height_a <= height_b + 1e-9);
            } else {
                prop_assert!(height_a + 1e-9 >= height_b);
            }
        }
        for bar in snapshot.bars.values() {
            prop_assert!(bar.height >= 0.0);
            prop_assert!(bar.height <= plot_height + 1e-9);
            prop_assert!((bar.y + bar.height - plot_height).abs() <= 1e-9);
        }
    }

    #[test]
    fn element_ids_persist_for_surviving_keys(
        values in proptest::collection::vec(1.0f64..1_000.0, 2..30),
        keep in 1usize..30,
    ) {
        let mut chart = chart(800, 200);
        let points = named(&values);
        chart.draw(&points).expect("draw");
        let before = chart.snapshot();

        let keep = keep.min(points.len());
        let report = chart.draw(&points[..keep]).expect("draw subset");
        prop_assert_eq!(report.bars.exited, points.len() - keep);

        let after = chart.snapshot();
        for (key, bar) in &after.bars {
            prop_assert_eq!(bar.element_id, before.bars[key].element_id);
        }
    }
}
