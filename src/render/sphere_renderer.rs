use wgpu::RenderPass;

use super::{buffer::Buffer, data::Uniforms, geometry::Mesh, pipeline::Pipeline};

pub struct SphereRenderer {
    pipeline: Pipeline,
    vertices: Buffer,
    indices: Buffer,
    num_indices: u32,
}

impl SphereRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, mesh: &Mesh) -> Self {
        let pipeline = Pipeline::create_sphere_pipeline(device, format);

        let vertices = Buffer::new_init(
            device,
            "Sphere vertex buffer",
            bytemuck::cast_slice(mesh.vertices.as_slice()),
            wgpu::BufferUsages::VERTEX,
        );

        let indices = Buffer::new_init(
            device,
            "Sphere index buffer",
            bytemuck::cast_slice(mesh.indices.as_slice()),
            wgpu::BufferUsages::INDEX,
        );

        Self {
            pipeline,
            vertices,
            indices,
            num_indices: mesh.indices.len() as u32,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, uniforms: &Uniforms) {
        queue.write_buffer(
            self.pipeline.get_uniforms(),
            0,
            bytemuck::bytes_of(uniforms),
        );
    }

    pub fn render(&self, render_pass: &mut RenderPass<'_>) {
        render_pass.set_pipeline(self.pipeline.get_pipeline());
        render_pass.set_bind_group(0, self.pipeline.get_uniform_bind_group(), &[]);
        render_pass.set_vertex_buffer(0, self.vertices.raw.slice(..));
        render_pass.set_index_buffer(self.indices.raw.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
    }
}
