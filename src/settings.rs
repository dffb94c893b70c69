use color_eyre::{Result, eyre::ensure};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "SPHERE";

/// Every tunable of the viewer. Defaults reproduce the fixed constants; any
/// field can be overridden with a `SPHERE_`-prefixed environment variable,
/// e.g. `SPHERE_POINT_COUNT=200` or `SPHERE_SEED=7`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub point_count: usize,
    /// On-screen edge length of a point marker, in pixels
    pub point_size: f32,
    pub sensitivity: f32,
    /// degrees
    pub pitch_limit: f32,
    pub sphere_radius: f32,
    pub sphere_slices: u32,
    pub sphere_stacks: u32,
    /// degrees
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub seed: Option<u64>,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            window_title: "3D Sphere".to_string(),
            window_width: 1200,
            window_height: 1000,
            point_count: 1000,
            point_size: 4.0,
            sensitivity: 0.1,
            pitch_limit: 89.0,
            sphere_radius: 1.0,
            sphere_slices: 30,
            sphere_stacks: 30,
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
            seed: None,
        }
    }
}

impl ApplicationSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_from(environment: Environment) -> Result<Self> {
        let settings: Self = Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.point_count > 0, "point_count must be positive");
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be positive, got {}x{}",
            self.window_width,
            self.window_height
        );
        ensure!(self.point_size > 0.0, "point_size must be positive");
        ensure!(
            (0.0..90.0).contains(&self.pitch_limit),
            "pitch_limit must lie in [0, 90), got {}",
            self.pitch_limit
        );
        ensure!(
            self.sphere_slices >= 3 && self.sphere_stacks >= 2,
            "sphere needs at least 3 slices and 2 stacks"
        );
        ensure!(
            self.near > 0.0 && self.far > self.near,
            "clip planes must satisfy 0 < near < far"
        );
        ensure!(
            self.fov_y > 0.0 && self.fov_y < 180.0,
            "fov_y must lie in (0, 180), got {}",
            self.fov_y
        );
        ensure!(
            self.sensitivity.is_finite() && self.sensitivity > 0.0,
            "sensitivity must be finite and positive, got {}",
            self.sensitivity
        );
        ensure!(
            self.sphere_radius.is_finite() && self.sphere_radius > 0.0,
            "sphere_radius must be positive, got {}",
            self.sphere_radius
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use config::Map;
    use rstest::rstest;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<Map<_, _>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = ApplicationSettings::load_from(environment(&[])).unwrap();

        assert_eq!(settings, ApplicationSettings::default());
        assert_eq!((settings.window_width, settings.window_height), (1200, 1000));
        assert_eq!(settings.point_count, 1000);
        assert_eq!(settings.point_size, 4.0);
        assert_eq!(settings.sensitivity, 0.1);
        assert_eq!(settings.pitch_limit, 89.0);
        assert_eq!(settings.fov_y, 45.0);
        assert_eq!((settings.near, settings.far), (0.1, 100.0));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = ApplicationSettings::load_from(environment(&[
            ("SPHERE_POINT_COUNT", "200"),
            ("SPHERE_SEED", "7"),
        ]))
        .unwrap();

        assert_eq!(settings.point_count, 200);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.window_width, 1200);
    }

    #[rstest]
    #[case("SPHERE_POINT_COUNT", "0")]
    #[case("SPHERE_FOV_Y", "0")]
    #[case("SPHERE_FOV_Y", "180")]
    #[case("SPHERE_FOV_Y", "-30")]
    #[case("SPHERE_SENSITIVITY", "NaN")]
    #[case("SPHERE_SENSITIVITY", "0")]
    #[case("SPHERE_SENSITIVITY", "-0.1")]
    #[case("SPHERE_SPHERE_RADIUS", "-1")]
    #[case("SPHERE_SPHERE_RADIUS", "0")]
    #[case("SPHERE_PITCH_LIMIT", "90")]
    #[case("SPHERE_PITCH_LIMIT", "-1")]
    #[case("SPHERE_NEAR", "0")]
    #[case("SPHERE_FAR", "0.05")]
    fn rejects_degenerate_override(#[case] key: &str, #[case] value: &str) {
        let result = ApplicationSettings::load_from(environment(&[(key, value)]));
        assert!(result.is_err(), "{key}={value} was accepted");
    }

    #[rstest]
    #[case("SPHERE_FOV_Y", "90")]
    #[case("SPHERE_SENSITIVITY", "0.5")]
    #[case("SPHERE_SPHERE_RADIUS", "2")]
    #[case("SPHERE_PITCH_LIMIT", "45")]
    fn accepts_sensible_override(#[case] key: &str, #[case] value: &str) {
        let result = ApplicationSettings::load_from(environment(&[(key, value)]));
        assert!(result.is_ok(), "{key}={value} was rejected");
    }

    #[test]
    fn rejects_malformed_override() {
        let result =
            ApplicationSettings::load_from(environment(&[("SPHERE_POINT_COUNT", "plenty")]));
        assert!(result.is_err());
    }
}
