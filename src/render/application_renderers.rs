use crate::settings::ApplicationSettings;

use super::{geometry::Mesh, point_renderer::PointRenderer, sphere_renderer::SphereRenderer};

pub struct ApplicationRenderers {
    pub sphere: SphereRenderer,
    pub points: PointRenderer,
}

impl ApplicationRenderers {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        settings: &ApplicationSettings,
    ) -> Self {
        let mesh = Mesh::uv_sphere(
            settings.sphere_radius,
            settings.sphere_slices,
            settings.sphere_stacks,
        );
        let sphere = SphereRenderer::new(device, format, &mesh);

        let points = PointRenderer::new(device, format, settings.point_count);

        Self { sphere, points }
    }
}
