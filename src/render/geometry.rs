use std::f32::consts::PI;

use glam::Vec3;
use itertools::iproduct;

use super::data::Vertex;

pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Latitude/longitude sphere centered on the origin with its poles on the
    /// Z axis. `slices` split the azimuth, `stacks` the polar angle; each
    /// ring repeats its first vertex so the seam closes.
    pub fn uv_sphere(radius: f32, slices: u32, stacks: u32) -> Self {
        let vertices = iproduct!(0..=stacks, 0..=slices)
            .map(|(stack, slice)| {
                let phi = PI * stack as f32 / stacks as f32;
                let theta = 2.0 * PI * slice as f32 / slices as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let (sin_theta, cos_theta) = theta.sin_cos();
                Vertex::new(radius * Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi))
            })
            .collect();

        Self {
            vertices,
            indices: Self::generate_indices(slices, stacks),
        }
    }

    fn generate_indices(slices: u32, stacks: u32) -> Vec<u32> {
        iproduct!(0..stacks, 0..slices)
            .flat_map(|(stack, slice)| {
                let k1 = stack * (slices + 1) + slice;
                let k2 = k1 + slices + 1;

                let mut inds = vec![];

                // the pole rows collapse to a single triangle per slice
                if stack != 0 {
                    inds.extend([k1, k2, k1 + 1]);
                }
                if stack != stacks - 1 {
                    inds.extend([k1 + 1, k2, k2 + 1]);
                }

                inds.into_iter()
            })
            .collect()
    }
}
