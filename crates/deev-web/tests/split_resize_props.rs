//! Property checks for the split-pane resize lifecycle.

use deev_web::{
    ContainerBounds, EditorMode, SplitPaneConfig, SplitResizeController, SplitResizeState,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Signal {
    Start,
    Move(f64),
    End,
}

fn signal() -> impl Strategy<Value = Signal> {
    prop_oneof![
        Just(Signal::Start),
        (-400.0f64..1600.0).prop_map(Signal::Move),
        Just(Signal::End),
    ]
}

fn mode() -> impl Strategy<Value = EditorMode> {
    prop_oneof![
        Just(EditorMode::Compiler),
        Just(EditorMode::Web),
        Just(EditorMode::Query),
    ]
}

fn container() -> ContainerBounds {
    ContainerBounds::new(100.0, 1000.0)
}

fn raw_for(pointer_x: f64) -> f64 {
    (pointer_x - container().left) / container().width * 100.0
}

proptest! {
    #[test]
    fn width_stays_in_band_for_any_signal_stream(
        mode in mode(),
        signals in proptest::collection::vec(signal(), 0..64),
    ) {
        let mut controller = SplitResizeController::for_mode(mode);
        for signal in signals {
            match signal {
                Signal::Start => { controller.on_gesture_start(); }
                Signal::Move(x) => { controller.on_pointer_move(x, Some(container())); }
                Signal::End => { controller.on_gesture_end(); }
            }
            prop_assert!(controller.bounds().contains(controller.width().value()));
        }
    }

    #[test]
    fn in_band_samples_apply_exactly_and_out_of_band_hold(
        mode in mode(),
        pointer_x in -400.0f64..1600.0,
    ) {
        let mut controller = SplitResizeController::for_mode(mode);
        controller.on_gesture_start();
        let before = controller.width().value();
        controller.on_pointer_move(pointer_x, Some(container()));
        let raw = raw_for(pointer_x);
        if controller.bounds().contains(raw) {
            prop_assert_eq!(controller.width().value(), raw);
        } else {
            prop_assert_eq!(controller.width().value(), before);
        }
    }

    #[test]
    fn moves_after_gesture_end_change_nothing(
        mode in mode(),
        drag_x in 0.0f64..1200.0,
        later in proptest::collection::vec(-400.0f64..1600.0, 1..32),
    ) {
        let mut controller = SplitResizeController::for_mode(mode);
        controller.on_gesture_start();
        controller.on_pointer_move(drag_x, Some(container()));
        controller.on_gesture_end();
        let held = controller.width();
        for x in later {
            let dispatch = controller.on_pointer_move(x, Some(container()));
            prop_assert!(dispatch.is_ignored());
            prop_assert_eq!(controller.width(), held);
        }
    }

    #[test]
    fn double_start_and_double_end_match_single_calls(mode in mode()) {
        let mut once = SplitResizeController::for_mode(mode);
        let mut twice = SplitResizeController::for_mode(mode);
        once.on_gesture_start();
        twice.on_gesture_start();
        twice.on_gesture_start();
        prop_assert_eq!(once.state(), twice.state());
        once.on_gesture_end();
        twice.on_gesture_end();
        twice.on_gesture_end();
        prop_assert_eq!(once.state(), twice.state());
        prop_assert_eq!(twice.state(), SplitResizeState::Idle);
    }
}

#[test]
fn documented_compiler_scenario() {
    let config = SplitPaneConfig::for_mode(EditorMode::Compiler);
    let mut controller = SplitResizeController::from_config(&config).expect("preset config");
    controller.on_gesture_start();
    controller.on_pointer_move(600.0, Some(container()));
    assert_eq!(controller.width().value(), 50.0);
    controller.on_pointer_move(150.0, Some(container()));
    assert_eq!(controller.width().value(), 50.0);
    controller.on_gesture_end();
    controller.on_pointer_move(900.0, Some(container()));
    assert_eq!(controller.width().value(), 50.0);
}

#[test]
fn documented_web_scenario_accepts_upper_bound() {
    let mut controller = SplitResizeController::for_mode(EditorMode::Web);
    controller.on_gesture_start();
    controller.on_pointer_move(400.0, Some(ContainerBounds::new(0.0, 500.0)));
    assert_eq!(controller.width().value(), 80.0);
}
