use std::sync::Arc;

use color_eyre::Result;
use glam::Vec4;
use winit::{dpi::PhysicalSize, window::Window};

use crate::{
    data::{Size, application_data::ApplicationData},
    render::{
        application_renderers::ApplicationRenderers,
        data::{Uniforms, Vertex},
        texture::Texture,
    },
    settings::ApplicationSettings,
};

const SPHERE_COLOR: Vec4 = Vec4::new(0.0, 1.0, 1.0, 0.2);
const POINT_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Prefers the linear variant of the preferred format so blended colours are
/// written without sRGB encoding.
fn select_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    let format = formats[0].remove_srgb_suffix();
    if formats.contains(&format) {
        format
    } else {
        formats[0]
    }
}

/// Owns the wgpu primitives and draws one frame per redraw request.
pub struct RenderEngine {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    renderers: ApplicationRenderers,
    depth_texture: Texture,
    sphere_uniforms: Uniforms,
    point_uniforms: Uniforms,
    // rotated positions, reused between frames
    positions: Vec<Vertex>,
}

impl RenderEngine {
    pub async fn new(
        window: Arc<Window>,
        settings: &ApplicationSettings,
        data: &ApplicationData,
    ) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let adapter_info = adapter.get_info();
        log::info!(
            "Using adapter {} ({:?})",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);

        let format = select_surface_format(&surface_caps.formats);
        log::debug!("Surface format {format:?}");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![format],
            desired_maximum_frame_latency: 2,
        };
        if size.width > 0 && size.height > 0 {
            surface.configure(&device, &config);
        }

        let renderers = ApplicationRenderers::new(&device, format, settings);
        let depth_texture = Texture::create_depth_texture(
            &device,
            (config.width, config.height).into(),
            "depth_texture",
        );

        let bounds = Size::from((config.width, config.height)).to_f32();
        let sphere_uniforms = Uniforms::new(&data.camera, bounds, SPHERE_COLOR, settings.point_size);
        let point_uniforms = Uniforms::new(&data.camera, bounds, POINT_COLOR, settings.point_size);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            renderers,
            depth_texture,
            sphere_uniforms,
            point_uniforms,
            positions: Vec::with_capacity(data.points.len()),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn is_configured(&self) -> bool {
        self.size.width > 0 && self.size.height > 0
    }

    /// Returns whether the surface is usable at the new size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) -> bool {
        if new_size.width > 0 && new_size.height > 0 {
            log::debug!("Resizing surface to {}x{}", new_size.width, new_size.height);
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.size = new_size;

            let depth_size = self.depth_texture.get_texture().size();
            if depth_size.width != new_size.width || depth_size.height != new_size.height {
                self.depth_texture =
                    Texture::create_depth_texture(&self.device, new_size.into(), "depth_texture");
            }
            true
        } else {
            false
        }
    }

    /// Rotates every point by the current orbit and uploads the frame's data.
    pub fn update(&mut self, data: &ApplicationData) {
        let bounds = Size::from(self.size).to_f32();
        self.sphere_uniforms = self.sphere_uniforms.update_projection(&data.camera, bounds);
        self.point_uniforms = self.point_uniforms.update_projection(&data.camera, bounds);

        self.positions.clear();
        self.positions.extend(
            data.points
                .iter()
                .map(|point| Vertex::new(data.orbit.rotate(point.position()))),
        );

        self.renderers
            .sphere
            .update(&self.queue, &self.sphere_uniforms);
        self.renderers.points.update(
            &self.device,
            &self.queue,
            &self.point_uniforms,
            &self.positions,
        );
    }

    pub fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.config.format),
            ..Default::default()
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render.pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth_texture.get_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // shell first so the points depth test against it
            self.renderers.sphere.render(&mut render_pass);
            self.renderers.points.render(&mut render_pass);
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use wgpu::TextureFormat;

    use super::*;

    #[rstest]
    #[case(vec![TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm], TextureFormat::Bgra8Unorm)]
    #[case(vec![TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb], TextureFormat::Rgba8Unorm)]
    #[case(vec![TextureFormat::Bgra8UnormSrgb], TextureFormat::Bgra8UnormSrgb)]
    #[case(vec![TextureFormat::Rgba16Float], TextureFormat::Rgba16Float)]
    fn prefers_linear_surface_format(
        #[case] formats: Vec<TextureFormat>,
        #[case] expected: TextureFormat,
    ) {
        assert_eq!(select_surface_format(&formats), expected);
    }
}
