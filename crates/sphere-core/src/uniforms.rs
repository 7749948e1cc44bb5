/// Per-frame uniforms consumed by `shaders/sphere.wgsl`.
///
/// Every field is 16-byte aligned so the layout matches WGSL's uniform
/// address space rules without explicit padding fields.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// xyz = camera eye, w unused
    pub camera_pos: [f32; 4],
    /// xyz = light position, w = intensity
    pub light_pos: [f32; 4],
    /// x = range, y = decay, z = roughness, w = metalness
    pub light_material: [f32; 4],
    /// linear rgb, a = 1
    pub base_color: [f32; 4],
}
