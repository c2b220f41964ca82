use glam::{Mat4, Vec3};

/// View uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4], // Column-major
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl ViewUniform {
    pub fn new(view: Mat4, eye: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            eye: eye.to_array(),
            _pad: 0.0,
        }
    }
}
