use glam::Vec3;

// Scene tuning constants shared by the core model and the web frontend.

// Sphere
pub const SPHERE_RADIUS: f32 = 3.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64;
pub const SPHERE_BASE_COLOR_HEX: &str = "#00ff83";
pub const SPHERE_ROUGHNESS: f32 = 0.5;
pub const SPHERE_METALNESS: f32 = 0.15;

// Point light
pub const LIGHT_POSITION: [f32; 3] = [1.0, 10.0, 10.0];
pub const LIGHT_INTENSITY: f32 = 100.0; // candela
pub const LIGHT_RANGE: f32 = 100.0; // 0 would mean unbounded
pub const LIGHT_DECAY: f32 = 2.0; // inverse-square

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 20.0; // distance from the origin along +Z

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 2.0; // 2.0 = one orbit per 30 s
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = f32::INFINITY;

// Surface
pub const PIXEL_RATIO: f64 = 3.0;
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Tweens
pub const DEFAULT_TWEEN_SECS: f32 = 0.5; // standalone tweens (color)
pub const TIMELINE_STEP_SECS: f32 = 1.0; // intro timeline default
pub const LIST_ITEM_SECS: f32 = 0.5;
pub const LIST_ITEM_STAGGER_SECS: f32 = 0.5;
pub const LIST_ITEM_OFFSET_Y_PCT: f32 = -50.0;

// Frame pacing
pub const MAX_FRAME_DT_SECS: f32 = 0.1; // cap after tab switches

// Page text
pub const BRAND_TEXT: &str = "Sphere";
pub const TITLE_TEXT: &str = "Give it a Spin";

#[inline]
pub fn light_position_vec3() -> Vec3 {
    Vec3::from_array(LIGHT_POSITION)
}
