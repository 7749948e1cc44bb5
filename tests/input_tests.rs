// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn primary_button_rotates() {
    assert_eq!(drag_mode_for_button(0, false), Some(DragMode::Rotate));
    assert_eq!(drag_mode_for_button(0, true), Some(DragMode::Rotate));
}

#[test]
fn secondary_button_pans_only_when_enabled() {
    assert_eq!(drag_mode_for_button(2, false), None);
    assert_eq!(drag_mode_for_button(2, true), Some(DragMode::Pan));
}

#[test]
fn middle_button_is_ignored() {
    assert_eq!(drag_mode_for_button(1, true), None);
}

#[test]
fn no_delta_without_a_drag() {
    let mut drag = DragState::default();
    assert!(drag.delta_to(10.0, 10.0).is_none());
    assert!(drag.end().is_none());
}

#[test]
fn deltas_are_relative_to_the_previous_move() {
    let mut drag = DragState::default();
    drag.begin(DragMode::Rotate, 100.0, 50.0);

    assert_eq!(drag.delta_to(110.0, 45.0), Some((DragMode::Rotate, 10.0, -5.0)));
    assert_eq!(drag.delta_to(110.0, 45.0), Some((DragMode::Rotate, 0.0, 0.0)));
    assert_eq!(drag.delta_to(100.0, 60.0), Some((DragMode::Rotate, -10.0, 15.0)));
}

#[test]
fn end_reports_the_finished_mode_once() {
    let mut drag = DragState::default();
    drag.begin(DragMode::Pan, 0.0, 0.0);
    assert_eq!(drag.end(), Some(DragMode::Pan));
    assert_eq!(drag.end(), None);
    assert!(drag.delta_to(5.0, 5.0).is_none());
}
