use std::sync::Arc;

use color_eyre::{Report, Result, eyre::eyre};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::{
    control::orbit_controller::OrbitController, data::application_data::ApplicationData,
    render::render_engine::RenderEngine, settings::ApplicationSettings,
};

pub struct Application {
    engine: Option<RenderEngine>,
    controller: OrbitController,
    data: ApplicationData,
    settings: ApplicationSettings,
    window_attributes: WindowAttributes,
    surface_configured: bool,
    error: Option<Report>,
}

impl Application {
    pub fn new(settings: ApplicationSettings) -> Self {
        let window_attributes = Window::default_attributes()
            .with_title(settings.window_title.clone())
            .with_inner_size(LogicalSize::new(
                settings.window_width as f64,
                settings.window_height as f64,
            ));

        Self {
            engine: None,
            controller: OrbitController::from_settings(&settings),
            data: ApplicationData::new(&settings),
            settings,
            window_attributes,
            surface_configured: false,
            error: None,
        }
    }

    fn terminate_with_error(&mut self, event_loop: &ActiveEventLoop, err: Report) {
        log::error!("{err:?}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_engine(&self, event_loop: &ActiveEventLoop) -> Result<RenderEngine> {
        let window = Arc::new(event_loop.create_window(self.window_attributes.clone())?);
        pollster::block_on(RenderEngine::new(window, &self.settings, &self.data))
    }
}

/// Out of memory or an unknown surface failure ends the program with an error.
fn is_fatal_surface_error(err: &wgpu::SurfaceError) -> bool {
    matches!(
        err,
        wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other
    )
}

pub struct ApplicationRunner {
    event_loop: EventLoop<()>,
    app: Application,
}

impl ApplicationRunner {
    pub fn new(settings: ApplicationSettings) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let app = Application::new(settings);

        Ok(Self { event_loop, app })
    }

    /// Runs until the window closes. Startup failures surface as the error.
    pub fn run(self) -> Result<()> {
        let mut app = self.app;
        self.event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }

        match self.create_engine(event_loop) {
            Ok(engine) => {
                self.surface_configured = engine.is_configured();
                self.controller
                    .set_scale_factor(engine.window().scale_factor());
                engine.window().request_redraw();
                self.engine = Some(engine);
            }
            Err(err) => self.terminate_with_error(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(engine) = &mut self.engine else {
            return;
        };

        if !self.controller.process_events(&event, &mut self.data.orbit) {
            match event {
                WindowEvent::Resized(physical_size) => {
                    self.surface_configured = engine.resize(physical_size);
                    // On macos the window needs to be redrawn manually after resizing
                    engine.window().request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    engine.window().request_redraw();

                    if !self.surface_configured {
                        return;
                    }

                    engine.update(&self.data);
                    match engine.render() {
                        Ok(_) => {}
                        // Reconfigure the surface if it's lost or outdated
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            self.surface_configured = engine.resize(engine.size());
                        }
                        Err(err) if is_fatal_surface_error(&err) => {
                            self.terminate_with_error(event_loop, eyre!("Surface failed: {err}"));
                        }
                        // This happens when the a frame takes too long to present
                        Err(err) => log::warn!("Surface error: {err}"),
                    }
                }
                WindowEvent::CloseRequested => event_loop.exit(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(wgpu::SurfaceError::OutOfMemory, true)]
    #[case(wgpu::SurfaceError::Other, true)]
    #[case(wgpu::SurfaceError::Lost, false)]
    #[case(wgpu::SurfaceError::Outdated, false)]
    #[case(wgpu::SurfaceError::Timeout, false)]
    fn only_unrecoverable_surface_errors_are_fatal(
        #[case] err: wgpu::SurfaceError,
        #[case] fatal: bool,
    ) {
        assert_eq!(is_fatal_surface_error(&err), fatal);
    }
}
