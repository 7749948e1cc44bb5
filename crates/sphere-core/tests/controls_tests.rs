// Host-side tests for the orbit controls.

use sphere_core::{OrbitConfig, OrbitControls, PerspectiveCamera, SceneConfig};
use std::f32::consts::TAU;

const DT: f32 = 1.0 / 60.0;

fn camera() -> PerspectiveCamera {
    PerspectiveCamera::new(&SceneConfig::default().camera, 16.0 / 9.0)
}

fn orbit(f: impl FnOnce(&mut OrbitConfig)) -> OrbitControls {
    let mut cfg = SceneConfig::default().orbit;
    f(&mut cfg);
    OrbitControls::new(cfg)
}

#[test]
fn default_config_matches_the_page() {
    let cfg = SceneConfig::default().orbit;
    assert!(cfg.enable_damping);
    assert!(!cfg.enable_pan);
    assert!(!cfg.enable_zoom);
    assert!(cfg.auto_rotate);
}

#[test]
fn auto_rotate_orbits_at_constant_distance() {
    let mut cam = camera();
    let mut controls = orbit(|_| {});
    for _ in 0..600 {
        controls.update(&mut cam, DT);
        assert!((cam.eye.length() - 20.0).abs() < 1e-3);
    }
    // Azimuth decreases: the camera swings toward -X.
    assert!(cam.eye.x < -1.0);
    assert!(cam.eye.y.abs() < 1e-3);
}

#[test]
fn auto_rotate_reaches_steady_angular_speed() {
    let mut cam = camera();
    let mut controls = orbit(|_| {});
    // Let damping warm up.
    for _ in 0..600 {
        controls.update(&mut cam, DT);
    }
    let before = cam.eye.x.atan2(cam.eye.z);
    controls.update(&mut cam, DT);
    let after = cam.eye.x.atan2(cam.eye.z);
    let expected = TAU / 60.0 * 2.0 * DT;
    assert!(((before - after) - expected).abs() < 1e-4);
}

#[test]
fn auto_rotate_pauses_while_dragging() {
    let mut cam = camera();
    let mut controls = orbit(|_| {});
    controls.begin_rotate();
    for _ in 0..10 {
        controls.update(&mut cam, DT);
    }
    assert!(cam.eye.x.abs() < 1e-4);
    assert!((cam.eye.z - 20.0).abs() < 1e-4);
    controls.end_rotate();
    controls.update(&mut cam, DT);
    assert!(cam.eye.x < 0.0);
}

#[test]
fn damped_drag_decays_and_converges() {
    let mut cam = camera();
    let mut controls = orbit(|c| c.auto_rotate = false);
    controls.begin_rotate();
    controls.rotate_by_pixels(100.0, 0.0, 600.0);
    controls.end_rotate();

    let mut prev_theta = 0.0_f32;
    let mut prev_step = f32::INFINITY;
    for _ in 0..20 {
        controls.update(&mut cam, DT);
        let theta = cam.eye.x.atan2(cam.eye.z);
        let step = (theta - prev_theta).abs();
        assert!(step < prev_step, "inertia should decay");
        prev_step = step;
        prev_theta = theta;
    }
    for _ in 0..600 {
        controls.update(&mut cam, DT);
    }
    let theta = cam.eye.x.atan2(cam.eye.z);
    assert!((theta + TAU * 100.0 / 600.0).abs() < 1e-3);
}

#[test]
fn undamped_drag_applies_immediately() {
    let mut cam = camera();
    let mut controls = orbit(|c| {
        c.auto_rotate = false;
        c.enable_damping = false;
    });
    controls.rotate_by_pixels(150.0, 0.0, 600.0);
    controls.update(&mut cam, DT);
    let theta = cam.eye.x.atan2(cam.eye.z);
    assert!((theta + TAU / 4.0).abs() < 1e-4);
    controls.update(&mut cam, DT);
    assert!((cam.eye.x.atan2(cam.eye.z) - theta).abs() < 1e-6);
}

#[test]
fn polar_angle_is_clamped() {
    let mut cam = camera();
    let mut controls = orbit(|c| {
        c.auto_rotate = false;
        c.enable_damping = false;
    });
    controls.rotate_by_pixels(0.0, 10_000.0, 600.0);
    controls.update(&mut cam, DT);
    assert!(cam.eye.y > 19.99);
    assert!(cam.eye.is_finite());
}

#[test]
fn zoom_and_pan_are_ignored_when_disabled() {
    let mut cam = camera();
    let mut controls = orbit(|c| c.auto_rotate = false);
    assert!(!controls.dolly(-100.0));
    assert!(!controls.pan_by_pixels(50.0, 50.0, &cam, 600.0));
    controls.update(&mut cam, DT);
    assert!((cam.eye.length() - 20.0).abs() < 1e-4);
    assert_eq!(cam.target, glam::Vec3::ZERO);
}

#[test]
fn zoom_moves_camera_when_enabled() {
    let mut cam = camera();
    let mut controls = orbit(|c| {
        c.auto_rotate = false;
        c.enable_zoom = true;
    });
    assert!(controls.dolly(-100.0));
    controls.update(&mut cam, DT);
    assert!((cam.eye.length() - 19.0).abs() < 1e-3);
    assert!(controls.dolly(100.0));
    controls.update(&mut cam, DT);
    assert!((cam.eye.length() - 20.0).abs() < 1e-3);
}

#[test]
fn pan_moves_target_and_camera_together_when_enabled() {
    let mut cam = camera();
    let mut controls = orbit(|c| {
        c.auto_rotate = false;
        c.enable_damping = false;
        c.enable_pan = true;
    });
    assert!(controls.pan_by_pixels(100.0, 0.0, &cam, 600.0));
    controls.update(&mut cam, DT);
    assert!(cam.target.x < 0.0);
    assert!((cam.eye.x - cam.target.x).abs() < 1e-4);
    assert!((cam.eye.z - 20.0).abs() < 1e-3);
}
