use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::data::{Size, camera::Camera};

#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
        // position
        0 => Float32x3,
    ];

    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        Self::desc_with_step_mode(wgpu::VertexStepMode::Vertex)
    }

    /// Layout for per-point data, one entry per drawn quad.
    pub fn instance_desc() -> wgpu::VertexBufferLayout<'static> {
        Self::desc_with_step_mode(wgpu::VertexStepMode::Instance)
    }

    fn desc_with_step_mode(step_mode: wgpu::VertexStepMode) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Uniforms {
    view_proj: Mat4,
    color: Vec4,
    viewport: Vec2,
    point_size: f32,
    _padding: f32,
}

impl Uniforms {
    pub fn new(camera: &Camera, bounds: Size<f32>, color: Vec4, point_size: f32) -> Self {
        Self {
            view_proj: camera.build_view_proj_matrix(bounds.width, bounds.height),
            color,
            viewport: Vec2::new(bounds.width, bounds.height),
            point_size,
            _padding: 0.0,
        }
    }

    pub fn update_projection(&self, camera: &Camera, bounds: Size<f32>) -> Self {
        Self::new(camera, bounds, self.color, self.point_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_shader_layout() {
        // mat4x4 + vec4 + vec2 + f32 + pad in the WGSL struct
        assert_eq!(std::mem::size_of::<Uniforms>(), 96);
        assert_eq!(std::mem::size_of::<Vertex>(), 12);
    }

    #[test]
    fn projection_update_keeps_color() {
        let camera = Camera::default();
        let uniforms = Uniforms::new(&camera, (1200.0, 1000.0).into(), Vec4::W, 4.0);

        let updated = uniforms.update_projection(&camera, (600.0, 600.0).into());

        assert_eq!(updated.color, Vec4::W);
        assert_eq!(updated.viewport, Vec2::new(600.0, 600.0));
        assert_eq!(updated.point_size, 4.0);
    }
}
