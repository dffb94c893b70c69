use std::f32::consts::PI;

use glam::Vec3;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// A point on the surface of the unit sphere. Only constructed by the
/// sampler, so the unit-length invariant holds for every instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpherePoint(Vec3);

impl SpherePoint {
    /// `theta` is the azimuth around Z, `phi` the polar angle from +Z, both in radians.
    fn from_angles(theta: f32, phi: f32) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self(Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi))
    }

    pub fn position(&self) -> Vec3 {
        self.0
    }
}

/// Samples `count` points uniformly over the sphere's area.
///
/// The polar angle goes through the inverse CDF `acos(2v - 1)`; drawing it
/// uniformly instead would crowd the points around the poles.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<SpherePoint> {
    (0..count)
        .map(|_| {
            let u: f32 = rng.random();
            let v: f32 = rng.random();
            let theta = 2.0 * PI * u;
            let phi = (2.0 * v - 1.0).acos();
            SpherePoint::from_angles(theta, phi)
        })
        .collect()
}

pub fn generate_seeded(count: usize, seed: u64) -> Vec<SpherePoint> {
    generate(count, &mut SmallRng::seed_from_u64(seed))
}

/// Uses a fixed seed when one is given, OS entropy otherwise.
pub fn generate_with(count: usize, seed: Option<u64>) -> Vec<SpherePoint> {
    match seed {
        Some(seed) => generate_seeded(count, seed),
        None => generate(count, &mut SmallRng::from_os_rng()),
    }
}
