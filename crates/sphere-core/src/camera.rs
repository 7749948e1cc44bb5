//! Perspective camera shared by the scene model and the renderer.
//!
//! The projection matrix is cached and only rebuilt by
//! [`PerspectiveCamera::update_projection`], mirroring how a resize first
//! changes the aspect and then refreshes the projection.

use crate::config::CameraConfig;
use glam::{Mat4, Vec3};

/// Right-handed camera with a `[0, 1]` depth range perspective projection.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(cfg: &CameraConfig, aspect: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, cfg.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: cfg.fov_y_deg.to_radians(),
            znear: cfg.near,
            zfar: cfg.far,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    /// Clip-space projection as of the last `update_projection`.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use glam::Vec4;

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = PerspectiveCamera::new(&SceneConfig::default().camera, 4.0 / 3.0);
        let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn aspect_change_needs_explicit_update() {
        let mut cam = PerspectiveCamera::new(&SceneConfig::default().camera, 1.0);
        let before = cam.projection_matrix();
        cam.set_aspect(2.0);
        assert_eq!(cam.projection_matrix(), before);
        cam.update_projection();
        assert_ne!(cam.projection_matrix(), before);
    }
}
