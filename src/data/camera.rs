use glam::{Mat4, Vec3, vec3};

use crate::settings::ApplicationSettings;

/// Fixed viewpoint looking at the origin. Only the points move; the camera
/// never does.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    // degrees
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Self::DEFAULT_POSITION,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub const DEFAULT_POSITION: Vec3 = vec3(0.0, 0.0, 3.0);

    pub fn from_settings(settings: &ApplicationSettings) -> Self {
        Self {
            fov_y: settings.fov_y,
            near: settings.near,
            far: settings.far,
            ..Default::default()
        }
    }

    pub fn get_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn build_view_proj_matrix(&self, width: f32, height: f32) -> Mat4 {
        let aspect_ratio = width / height;

        let proj = Mat4::perspective_rh(self.fov_y.to_radians(), aspect_ratio, self.near, self.far);

        proj * self.get_view()
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }
}
