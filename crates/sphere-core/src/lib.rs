pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod interaction;
pub mod intro;
pub mod lifecycle;
pub mod mesh;
pub mod scene;
pub mod timeline;
pub mod tween;
pub mod uniforms;
pub mod viewport;

pub use camera::*;
pub use color::*;
pub use config::*;
pub use controls::*;
pub use error::*;
pub use interaction::*;
pub use intro::*;
pub use lifecycle::*;
pub use mesh::*;
pub use scene::*;
pub use timeline::*;
pub use tween::*;
pub use uniforms::*;
pub use viewport::*;

pub static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");
