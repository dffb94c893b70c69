use crate::{
    data::{
        camera::Camera,
        orbit::OrbitState,
        sphere_points::{SpherePoint, generate_with},
    },
    settings::ApplicationSettings,
};

pub struct ApplicationData {
    pub points: Vec<SpherePoint>,
    pub orbit: OrbitState,
    pub camera: Camera,
}

impl ApplicationData {
    pub fn new(settings: &ApplicationSettings) -> Self {
        let points = generate_with(settings.point_count, settings.seed);
        log::info!("Generated {} sphere points", points.len());

        let window_center = (
            settings.window_width as f64 / 2.0,
            settings.window_height as f64 / 2.0,
        );

        Self {
            points,
            orbit: OrbitState::new(window_center),
            camera: Camera::from_settings(settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_window_center() {
        let settings = ApplicationSettings {
            point_count: 12,
            seed: Some(1),
            ..Default::default()
        };

        let data = ApplicationData::new(&settings);

        assert_eq!(data.points.len(), 12);
        assert!(!data.orbit.is_dragging());
        assert_eq!((data.orbit.yaw, data.orbit.pitch), (0.0, 0.0));
        assert_eq!(data.orbit.anchor(), (600.0, 500.0));
        assert_eq!(data.camera.fov_y(), 45.0);
    }
}
