use sphere_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Damping is a per-frame fraction
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR < 1.0);

    // Camera must sit outside the sphere and inside the far plane
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > SPHERE_RADIUS);
    assert!(CAMERA_Z < CAMERA_FAR);

    // Material parameters are unit fractions
    assert!((0.0..=1.0).contains(&SPHERE_ROUGHNESS));
    assert!((0.0..=1.0).contains(&SPHERE_METALNESS));

    assert!(SPHERE_WIDTH_SEGMENTS >= 3);
    assert!(SPHERE_HEIGHT_SEGMENTS >= 2);
    assert!(PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(DEFAULT_TWEEN_SECS > 0.0);
    assert!(TIMELINE_STEP_SECS > 0.0);
    assert!(LIST_ITEM_SECS > 0.0);
    assert!(LIST_ITEM_STAGGER_SECS > 0.0);
    assert!(MAX_FRAME_DT_SECS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_reaches_the_sphere() {
    let d = light_position_vec3().length();
    assert!(d > SPHERE_RADIUS);
    assert!(LIGHT_RANGE > d);
}

#[test]
fn base_color_is_a_valid_hex() {
    assert!(sphere_core::Color::from_hex(SPHERE_BASE_COLOR_HEX).is_ok());
}
