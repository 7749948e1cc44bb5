//! Orbit-style camera controls.
//!
//! The camera orbits `camera.target` on a sphere. User input and
//! auto-rotation accumulate into a pending spherical delta which `update`
//! applies once per frame. With damping enabled only a fraction of the
//! pending delta is applied per frame and the rest decays, which gives the
//! drag its inertia.

use crate::camera::PerspectiveCamera;
use crate::config::OrbitConfig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    cfg: OrbitConfig,
    delta: SphericalDelta,
    scale: f32,
    pan_offset: Vec3,
    rotating: bool,
}

impl OrbitControls {
    pub fn new(cfg: OrbitConfig) -> Self {
        Self {
            cfg,
            delta: SphericalDelta::default(),
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            rotating: false,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.cfg
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn begin_rotate(&mut self) {
        self.rotating = true;
    }

    pub fn end_rotate(&mut self) {
        self.rotating = false;
    }

    /// Pointer drag of `dx`/`dy` pixels; a drag across the full viewport
    /// height turns the camera by one revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.cfg.rotate_speed);
        self.rotate_up(TAU * dy / h * self.cfg.rotate_speed);
    }

    /// Wheel input. Negative `delta_y` moves the camera closer. Returns
    /// `false` when zoom is disabled.
    pub fn dolly(&mut self, delta_y: f32) -> bool {
        if !self.cfg.enable_zoom || delta_y == 0.0 {
            return false;
        }
        let factor = 0.95_f32.powf(self.cfg.zoom_speed * (delta_y * 0.01).abs());
        if delta_y < 0.0 {
            self.scale *= factor;
        } else {
            self.scale /= factor;
        }
        true
    }

    /// Screen-space pan of the orbit target. Returns `false` when pan is
    /// disabled.
    pub fn pan_by_pixels(
        &mut self,
        dx: f32,
        dy: f32,
        camera: &PerspectiveCamera,
        viewport_height: f32,
    ) -> bool {
        if !self.cfg.enable_pan {
            return false;
        }
        let offset = camera.eye - camera.target;
        let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
        let h = viewport_height.max(1.0);
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        self.pan_offset -= right * (2.0 * dx * target_distance / h);
        self.pan_offset += up * (2.0 * dy * target_distance / h);
        true
    }

    fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    fn auto_rotation_angle(&self, dt: f32) -> f32 {
        TAU / 60.0 * self.cfg.auto_rotate_speed * dt
    }

    /// Apply pending motion to `camera`. Must run once per frame, before the
    /// frame is drawn.
    pub fn update(&mut self, camera: &mut PerspectiveCamera, dt: f32) {
        let offset = camera.eye - camera.target;
        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        if self.cfg.auto_rotate && !self.rotating {
            self.rotate_left(self.auto_rotation_angle(dt));
        }

        if self.cfg.enable_damping {
            theta += self.delta.theta * self.cfg.damping_factor;
            phi += self.delta.phi * self.cfg.damping_factor;
        } else {
            theta += self.delta.theta;
            phi += self.delta.phi;
        }
        phi = phi.clamp(POLAR_EPS, PI - POLAR_EPS);

        radius = (radius * self.scale).clamp(self.cfg.min_distance, self.cfg.max_distance);

        if self.cfg.enable_damping {
            camera.target += self.pan_offset * self.cfg.damping_factor;
        } else {
            camera.target += self.pan_offset;
        }

        let sin_phi_r = phi.sin() * radius;
        let offset = Vec3::new(
            sin_phi_r * theta.sin(),
            phi.cos() * radius,
            sin_phi_r * theta.cos(),
        );
        camera.eye = camera.target + offset;

        if self.cfg.enable_damping {
            let keep = 1.0 - self.cfg.damping_factor;
            self.delta.theta *= keep;
            self.delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.delta = SphericalDelta::default();
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;
    }
}
