// Host-side tests for the pointer → color mapping.

use sphere_core::{derive_rgb, InteractionController, Viewport};

fn channel(n: f64) -> i32 {
    (n * 255.0 + 0.5).floor() as i32
}

// Normalize first, then scale: the product order decides ties like 229.5.
fn expected(x: f64, y: f64, w: f64, h: f64) -> (i32, i32, i32) {
    let nx = x / w;
    let ny = y / h;
    (channel(nx), channel(ny), channel(ny * nx))
}

#[test]
fn derived_color_matches_formula_over_grid() {
    let sizes = [
        (800.0, 600.0),
        (1000.0, 1000.0),
        (1920.0, 1080.0),
        (375.0, 812.0),
    ];
    for (w, h) in sizes {
        let vp = Viewport::new(w, h).unwrap();
        for i in 0..=10 {
            for j in 0..=10 {
                let x = w * i as f64 / 10.0;
                let y = h * j as f64 / 10.0;
                let rgb = derive_rgb(x, y, &vp);
                assert_eq!(
                    (rgb.r, rgb.g, rgb.b),
                    expected(x, y, w, h),
                    "at ({x},{y}) in {w}x{h}"
                );
            }
        }
    }
}

#[test]
fn center_of_800x600_gives_128_128_64() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    let mut ctl = InteractionController::new();
    ctl.press();
    let rgb = ctl.pointer_move(400.0, 300.0, &vp).unwrap();
    assert_eq!((rgb.r, rgb.g, rgb.b), (128, 128, 64));
}

#[test]
fn bottom_right_corner_is_white() {
    let vp = Viewport::new(1000.0, 1000.0).unwrap();
    let mut ctl = InteractionController::new();
    ctl.press();
    let rgb = ctl.pointer_move(1000.0, 1000.0, &vp).unwrap();
    assert_eq!((rgb.r, rgb.g, rgb.b), (255, 255, 255));
}

#[test]
fn top_left_corner_is_black() {
    let vp = Viewport::new(640.0, 480.0).unwrap();
    let rgb = derive_rgb(0.0, 0.0, &vp);
    assert_eq!((rgb.r, rgb.g, rgb.b), (0, 0, 0));
}

#[test]
fn pointer_outside_viewport_is_not_clamped() {
    // Fast drags can report positions past the window edge.
    let vp = Viewport::new(100.0, 100.0).unwrap();
    let rgb = derive_rgb(200.0, -50.0, &vp);
    assert_eq!(rgb.r, 510);
    assert_eq!(rgb.g, -127);
    assert_eq!(rgb.b, -255);
    assert_eq!(rgb.css(), "rgb(510,-127,-255)");
}

#[test]
fn channel_just_below_a_half_rounds_down() {
    // 730.8 / 812 * 255 lands a hair under 229.5.
    let vp = Viewport::new(375.0, 812.0).unwrap();
    let rgb = derive_rgb(0.0, 730.8, &vp);
    assert_eq!((rgb.r, rgb.g, rgb.b), (0, 229, 0));
}

#[test]
fn negative_halves_round_toward_positive_infinity() {
    let vp = Viewport::new(510.0, 100.0).unwrap();
    let rgb = derive_rgb(-1.0, 0.0, &vp);
    assert_eq!(rgb.r, 0);
    assert_eq!(rgb.to_color(), derive_rgb(0.0, 0.0, &vp).to_color());
}
