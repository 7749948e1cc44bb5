//! Indexed UV sphere.
//!
//! Vertex rings run from the north pole (`+Y`) to the south pole, each ring
//! holding `width_segments + 1` vertices so the seam gets its own copies.
//! The pole rows emit one triangle per quad instead of two, so there are no
//! degenerate triangles. Front faces wind counter-clockwise.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let row = ws + 1;

    let mut vertices = Vec::with_capacity((row * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let normal = [
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            ];
            vertices.push(SphereVertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
            });
        }
    }

    let mut indices = Vec::with_capacity((ws * (hs - 1) * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<SphereVertex>(), 24);
    }

    #[test]
    fn first_ring_sits_on_north_pole() {
        let mesh = generate_sphere(3.0, 8, 4);
        for v in &mesh.vertices[..9] {
            assert!(v.position[0].abs() < 1e-6);
            assert!((v.position[1] - 3.0).abs() < 1e-6);
            assert!(v.position[2].abs() < 1e-6);
        }
    }
}
