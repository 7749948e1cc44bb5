//! Immutable configuration handed to the scene host and the page chrome.

use crate::constants::*;
use glam::Vec3;

/// CSS class hooks shared by the markup and the intro animation.
pub mod hooks {
    pub const CANVAS: &str = "canvas";
    pub const NAV: &str = "nav";
    pub const LIST: &str = "list";
    pub const LIST_ITEM: &str = "list-item";
    pub const TITLE: &str = "title";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
}

impl NavEntry {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavConfig {
    pub brand: String,
    pub title: String,
    pub routes: Vec<NavEntry>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: BRAND_TEXT.to_string(),
            title: TITLE_TEXT.to_string(),
            routes: vec![NavEntry::new("explore", ""), NavEntry::new("create", "")],
        }
    }
}

#[derive(Clone, Debug)]
pub struct SphereConfig {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub base_color_hex: &'static str,
    pub roughness: f32,
    pub metalness: f32,
}

#[derive(Clone, Debug)]
pub struct LightConfig {
    pub position: Vec3,
    pub intensity: f32,
    pub range: f32,
    pub decay: f32,
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub sphere: SphereConfig,
    pub light: LightConfig,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub pixel_ratio: f64,
    pub clear_color: [f64; 3],
    pub color_tween_secs: f32,
    pub nav: NavConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere: SphereConfig {
                radius: SPHERE_RADIUS,
                width_segments: SPHERE_WIDTH_SEGMENTS,
                height_segments: SPHERE_HEIGHT_SEGMENTS,
                base_color_hex: SPHERE_BASE_COLOR_HEX,
                roughness: SPHERE_ROUGHNESS,
                metalness: SPHERE_METALNESS,
            },
            light: LightConfig {
                position: light_position_vec3(),
                intensity: LIGHT_INTENSITY,
                range: LIGHT_RANGE,
                decay: LIGHT_DECAY,
            },
            camera: CameraConfig {
                fov_y_deg: CAMERA_FOV_Y_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                distance: CAMERA_Z,
            },
            orbit: OrbitConfig {
                enable_damping: true,
                damping_factor: ORBIT_DAMPING_FACTOR,
                enable_pan: false,
                enable_zoom: false,
                auto_rotate: true,
                auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
                rotate_speed: ORBIT_ROTATE_SPEED,
                zoom_speed: ORBIT_ZOOM_SPEED,
                min_distance: ORBIT_MIN_DISTANCE,
                max_distance: ORBIT_MAX_DISTANCE,
            },
            pixel_ratio: PIXEL_RATIO,
            clear_color: CLEAR_COLOR,
            color_tween_secs: DEFAULT_TWEEN_SECS,
            nav: NavConfig::default(),
        }
    }
}
