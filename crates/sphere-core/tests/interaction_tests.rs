// Host-side tests for the press/release state machine and how it drives
// the scene's material color.

use sphere_core::{InteractionController, Scene, SceneConfig, Viewport};

fn scene_800x600() -> (Scene, Viewport) {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    (Scene::new(SceneConfig::default(), vp).unwrap(), vp)
}

#[test]
fn pressed_flag_follows_press_and_release() {
    let mut ctl = InteractionController::new();
    assert!(!ctl.is_pressed());
    ctl.press();
    assert!(ctl.is_pressed());
    ctl.release();
    assert!(!ctl.is_pressed());
    ctl.release();
    assert!(!ctl.is_pressed());
}

#[test]
fn moves_without_press_derive_nothing() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let mut ctl = InteractionController::new();
    for (x, y) in [(0.0, 0.0), (400.0, 300.0), (800.0, 600.0), (-5.0, 9000.0)] {
        assert_eq!(ctl.pointer_move(x, y, &vp), None);
    }
    assert_eq!(ctl.last_color(), None);
}

#[test]
fn released_moves_leave_scene_color_unchanged() {
    let (mut scene, vp) = scene_800x600();
    let mut ctl = InteractionController::new();

    ctl.press();
    let rgb = ctl.pointer_move(400.0, 300.0, &vp).unwrap();
    scene.retarget_color(rgb);
    scene.frame(1.0);
    let settled = scene.color();
    let target = scene.color_target();

    ctl.release();
    if let Some(rgb) = ctl.pointer_move(10.0, 10.0, &vp) {
        scene.retarget_color(rgb);
    }
    scene.frame(1.0);
    assert_eq!(scene.color(), settled);
    assert_eq!(scene.color_target(), target);
    assert_eq!(ctl.last_color().map(|c| (c.r, c.g, c.b)), Some((128, 128, 64)));
}

#[test]
fn pressed_move_eases_toward_new_color() {
    let (mut scene, vp) = scene_800x600();
    let start = scene.color();
    let mut ctl = InteractionController::new();
    ctl.press();
    let rgb = ctl.pointer_move(800.0, 600.0, &vp).unwrap();
    scene.retarget_color(rgb);

    scene.frame(0.1);
    let mid = scene.color();
    assert_ne!(mid, start);
    assert!(mid.r > start.r && mid.r < 1.0);

    scene.frame(1.0);
    let end = scene.color();
    assert!((end.r - 1.0).abs() < 1e-6);
    assert!((end.g - 1.0).abs() < 1e-6);
    assert!((end.b - 1.0).abs() < 1e-6);
}

#[test]
fn new_move_retargets_from_current_color() {
    let (mut scene, vp) = scene_800x600();
    let mut ctl = InteractionController::new();
    ctl.press();

    scene.retarget_color(ctl.pointer_move(800.0, 600.0, &vp).unwrap());
    scene.frame(0.2);
    let in_flight = scene.color();

    scene.retarget_color(ctl.pointer_move(0.0, 0.0, &vp).unwrap());
    // No time has passed: the new transition starts where the old one was.
    assert_eq!(scene.color(), in_flight);
    scene.frame(0.5);
    let c = scene.color();
    assert!(c.r.abs() < 1e-6 && c.g.abs() < 1e-6 && c.b.abs() < 1e-6);
}
