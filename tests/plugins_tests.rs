use std::cell::RefCell;
use std::rc::Rc;

use barchart_rs::api::{
    BarChart, BarChartConfig, ChartPlugin, PluginContext, PluginEvent,
};
use barchart_rs::core::{DataPoint, JoinCounts};
use barchart_rs::render::NullRenderer;

struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: &str) -> (Self, Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                id: id.to_owned(),
                events: Rc::clone(&events),
            },
            events,
        )
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn chart() -> BarChart<NullRenderer> {
    BarChart::new(NullRenderer::default(), BarChartConfig::default()).expect("chart init")
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let mut chart = chart();
    let (first, _) = RecordingPlugin::new("recorder");
    let (duplicate, _) = RecordingPlugin::new("recorder");
    let (anonymous, _) = RecordingPlugin::new("");

    chart.register_plugin(Box::new(first)).expect("register");
    assert!(chart.register_plugin(Box::new(duplicate)).is_err());
    assert!(chart.register_plugin(Box::new(anonymous)).is_err());
    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.has_plugin("recorder"));

    assert!(chart.unregister_plugin("recorder"));
    assert!(!chart.unregister_plugin("recorder"));
    assert_eq!(chart.plugin_count(), 0);
}

#[test]
fn draw_emits_bar_join_counts_with_post_draw_context() {
    let mut chart = chart();
    let (plugin, events) = RecordingPlugin::new("recorder");
    chart.register_plugin(Box::new(plugin)).expect("register");

    chart
        .draw(&[DataPoint::new("A", 100.0), DataPoint::new("B", 800.0)])
        .expect("draw");

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    let (event, context) = events[0];
    assert_eq!(
        event,
        PluginEvent::Drawn {
            bars: JoinCounts {
                entered: 2,
                updated: 0,
                exited: 0,
            }
        }
    );
    assert_eq!(context.bar_count, 2);
    assert_eq!(context.data_max, 800.0);
    assert_eq!(context.bar_width, 370.0);
}

#[test]
fn setters_emit_change_events_after_the_redraw() {
    let mut chart = chart();
    chart.draw(&[DataPoint::new("A", 100.0)]).expect("draw");
    let (plugin, events) = RecordingPlugin::new("recorder");
    chart.register_plugin(Box::new(plugin)).expect("register");

    chart.set_width(600).expect("set width");
    chart.set_max(Some(500.0)).expect("set max");

    let redrawn = PluginEvent::Drawn {
        bars: JoinCounts {
            entered: 0,
            updated: 1,
            exited: 0,
        },
    };
    let kinds: Vec<PluginEvent> = events.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        kinds,
        vec![
            redrawn,
            PluginEvent::Resized {
                width: 600,
                height: 200,
            },
            redrawn,
            PluginEvent::MaxChanged {
                user_max: Some(500.0),
            },
        ]
    );
}

#[test]
fn change_events_carry_the_redrawn_context() {
    let mut chart = chart();
    chart.draw(&[DataPoint::new("A", 100.0)]).expect("draw");
    let (plugin, events) = RecordingPlugin::new("recorder");
    chart.register_plugin(Box::new(plugin)).expect("register");

    chart.set_width(600).expect("set width");
    chart.set_max(Some(500.0)).expect("set max");

    let events = events.borrow();
    let (_, resized) = events
        .iter()
        .find(|(event, _)| matches!(event, PluginEvent::Resized { .. }))
        .copied()
        .expect("resized event");
    assert_eq!(resized.bar_width, 550.0);
    assert_eq!(resized.data_max, 100.0);

    let (_, max_changed) = events
        .iter()
        .find(|(event, _)| matches!(event, PluginEvent::MaxChanged { .. }))
        .copied()
        .expect("max changed event");
    assert_eq!(max_changed.data_max, 500.0);
    assert_eq!(max_changed.user_max, Some(500.0));
}

#[test]
fn failed_setters_emit_nothing() {
    let mut chart = chart();
    chart.draw(&[DataPoint::new("A", 100.0)]).expect("draw");
    let (plugin, events) = RecordingPlugin::new("recorder");
    chart.register_plugin(Box::new(plugin)).expect("register");

    assert!(chart.set_width(10).is_err());
    assert!(chart.set_max(Some(-1.0)).is_err());
    assert!(events.borrow().is_empty());
}

#[test]
fn unregistered_plugins_stop_receiving_events() {
    let mut chart = chart();
    let (plugin, events) = RecordingPlugin::new("recorder");
    chart.register_plugin(Box::new(plugin)).expect("register");
    chart.draw(&[DataPoint::new("A", 1.0)]).expect("draw");
    chart.unregister_plugin("recorder");
    chart.draw(&[DataPoint::new("A", 2.0)]).expect("draw");
    assert_eq!(events.borrow().len(), 1);
}
