use winit::{
    dpi::{LogicalPosition, PhysicalPosition},
    event::{MouseButton, WindowEvent},
};

use crate::{data::orbit::OrbitState, settings::ApplicationSettings};

/// Turns window events into drags on an [`OrbitState`].
///
/// winit reports button presses without a position, so the controller
/// keeps the last cursor position it saw to anchor new drags. Positions are
/// tracked in logical pixels so the drag speed does not depend on the
/// display's scale factor.
pub struct OrbitController {
    sensitivity: f32,
    pitch_limit: f32,
    scale_factor: f64,
    cursor: LogicalPosition<f64>,
}

impl OrbitController {
    pub fn new(sensitivity: f32, pitch_limit: f32, cursor: LogicalPosition<f64>) -> Self {
        Self {
            sensitivity,
            pitch_limit,
            scale_factor: 1.0,
            cursor,
        }
    }

    pub fn from_settings(settings: &ApplicationSettings) -> Self {
        Self::new(
            settings.sensitivity,
            settings.pitch_limit,
            LogicalPosition::new(
                settings.window_width as f64 / 2.0,
                settings.window_height as f64 / 2.0,
            ),
        )
    }

    /// Returns whether the event was consumed.
    pub fn process_events(&mut self, event: &WindowEvent, orbit: &mut OrbitState) -> bool {
        match *event {
            WindowEvent::CursorMoved { position, .. } => self.move_cursor(position, orbit),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(scale_factor);
                false
            }
            WindowEvent::MouseInput { state, button, .. } if button == MouseButton::Left => {
                if state.is_pressed() {
                    self.press(orbit);
                } else {
                    self.release(orbit);
                }
                true
            }
            WindowEvent::Focused(false) if orbit.is_dragging() => {
                // the release may never reach us once focus is gone
                self.release(orbit);
                false
            }
            _ => false,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        log::debug!("Cursor scale factor {scale_factor}");
        self.scale_factor = scale_factor;
    }

    pub fn press(&self, orbit: &mut OrbitState) {
        log::debug!("Drag started at {:?}", self.cursor);
        orbit.begin_drag(self.cursor.into());
    }

    pub fn release(&self, orbit: &mut OrbitState) {
        if orbit.is_dragging() {
            log::debug!("Drag ended at yaw {}, pitch {}", orbit.yaw, orbit.pitch);
        }
        orbit.end_drag();
    }

    pub fn move_cursor(&mut self, position: PhysicalPosition<f64>, orbit: &mut OrbitState) -> bool {
        self.cursor = position.to_logical(self.scale_factor);
        orbit.drag_to(self.cursor.into(), self.sensitivity, self.pitch_limit)
    }
}
