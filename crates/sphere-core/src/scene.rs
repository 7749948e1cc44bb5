use crate::camera::PerspectiveCamera;
use crate::color::{Color, DerivedRgb};
use crate::config::SceneConfig;
use crate::controls::OrbitControls;
use crate::error::SceneError;
use crate::mesh::{generate_sphere, SphereMesh};
use crate::timeline::Pose;
use crate::tween::{Ease, Tween};
use crate::uniforms::SceneUniforms;
use crate::viewport::Viewport;
use glam::Mat4;

/// Renderer-independent scene state: camera, controls, and the sphere's
/// material color and scale.
pub struct Scene {
    config: SceneConfig,
    viewport: Viewport,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    color: Tween<Color>,
    sphere_scale: f32,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, SceneError> {
        let base = Color::from_hex(config.sphere.base_color_hex)?;
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());
        let controls = OrbitControls::new(config.orbit.clone());
        Ok(Self {
            config,
            viewport,
            camera,
            controls,
            color: Tween::new(base, base, 0.0, Ease::Power1Out),
            sphere_scale: 1.0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// Pan needs the camera and the controls at the same time.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32) -> bool {
        let h = self.viewport.height() as f32;
        self.controls.pan_by_pixels(dx, dy, &self.camera, h)
    }

    pub fn color(&self) -> Color {
        self.color.value()
    }

    pub fn color_target(&self) -> Color {
        self.color.target()
    }

    pub fn sphere_scale(&self) -> f32 {
        self.sphere_scale
    }

    pub fn build_mesh(&self) -> SphereMesh {
        let s = &self.config.sphere;
        generate_sphere(s.radius, s.width_segments, s.height_segments)
    }

    /// Camera aspect and projection follow the new viewport. Nothing else
    /// (in particular no animation) is touched.
    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!(
            "[scene] resize {}x{} aspect={:.3}",
            viewport.width(),
            viewport.height(),
            viewport.aspect()
        );
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.camera.update_projection();
    }

    /// Ease the material from its current color toward `rgb`. An in-flight
    /// transition is retargeted rather than queued.
    pub fn retarget_color(&mut self, rgb: DerivedRgb) {
        log::trace!("[scene] color -> {}", rgb.css());
        self.color.retarget(rgb.to_color(), self.config.color_tween_secs);
    }

    pub fn apply_sphere_pose(&mut self, pose: &Pose) {
        if let Some(s) = pose.scale {
            self.sphere_scale = s;
        }
    }

    /// Advance one frame: color tween, then controls, then the uniforms the
    /// draw call will use.
    pub fn frame(&mut self, dt: f32) -> SceneUniforms {
        self.color.advance(dt);
        self.controls.update(&mut self.camera, dt);
        self.uniforms()
    }

    pub fn uniforms(&self) -> SceneUniforms {
        let light = &self.config.light;
        let sphere = &self.config.sphere;
        let eye = self.camera.eye;
        SceneUniforms {
            view_proj: self.camera.view_projection().to_cols_array_2d(),
            model: Mat4::from_scale(glam::Vec3::splat(self.sphere_scale)).to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            light_pos: [
                light.position.x,
                light.position.y,
                light.position.z,
                light.intensity,
            ],
            light_material: [light.range, light.decay, sphere.roughness, sphere.metalness],
            base_color: self.color.value().to_array4(),
        }
    }
}
