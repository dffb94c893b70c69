use wgpu::RenderPass;

use super::{buffer::Buffer, data::Uniforms, data::Vertex, pipeline::Pipeline};

const VERTICES_PER_POINT: u32 = 6;

/// Draws one fixed-size square per point. Positions are rewritten every
/// frame from the rotated point set.
pub struct PointRenderer {
    pipeline: Pipeline,
    instances: Buffer,
    num_points: u32,
}

impl PointRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, capacity: usize) -> Self {
        let pipeline = Pipeline::create_point_pipeline(device, format);

        let instances = Buffer::new(
            device,
            "Point instance buffer",
            (capacity * std::mem::size_of::<Vertex>()) as u64,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );

        Self {
            pipeline,
            instances,
            num_points: 0,
        }
    }

    pub fn update(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniforms: &Uniforms,
        positions: &[Vertex],
    ) {
        queue.write_buffer(
            self.pipeline.get_uniforms(),
            0,
            bytemuck::bytes_of(uniforms),
        );
        self.instances
            .write(device, queue, bytemuck::cast_slice(positions));
        self.num_points = positions.len() as u32;
    }

    pub fn render(&self, render_pass: &mut RenderPass<'_>) {
        if self.num_points == 0 {
            return;
        }
        render_pass.set_pipeline(self.pipeline.get_pipeline());
        render_pass.set_bind_group(0, self.pipeline.get_uniform_bind_group(), &[]);
        render_pass.set_vertex_buffer(0, self.instances.raw.slice(..));
        render_pass.draw(0..VERTICES_PER_POINT, 0..self.num_points);
    }
}
