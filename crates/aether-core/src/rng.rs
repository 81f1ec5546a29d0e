//! The seeded random-number stream used by all sampling.
//!
//! Every stochastic decision in the pipeline draws from an [`Rng`], a
//! thin wrapper over a ChaCha8 stream. Each candidate gets its own
//! stream derived from the run seed, so simulations replay bit-identically
//! for identical seeds regardless of worker count.

use rand::{Rng as _, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::vector::Vector3;

/// A seedable uniform random stream with the geometric draws the source
/// features need.
#[derive(Clone, Debug)]
pub struct Rng {
    inner: ChaCha8Rng,
}

impl Rng {
    /// Create a stream from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Rng {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Uniform draw in `[min, max)`.
    pub fn uniform_in(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.uniform()
    }

    /// Unit vector drawn isotropically over the sphere.
    pub fn unit_vector(&mut self) -> Vector3 {
        let cos_theta = self.uniform_in(-1.0, 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let phi = self.uniform_in(0.0, 2.0 * std::f64::consts::PI);
        Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
    }

    /// Unit vector drawn uniformly in solid angle inside a cone.
    ///
    /// `axis` must be unit length; `half_aperture` is the cone's half
    /// opening angle in radians.
    pub fn cone_vector(&mut self, axis: Vector3, half_aperture: f64) -> Vector3 {
        let cos_theta = 1.0 - self.uniform() * (1.0 - half_aperture.cos());
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        let phi = self.uniform_in(0.0, 2.0 * std::f64::consts::PI);
        let local = Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);

        // Rotate the local +z frame onto the cone axis.
        let z = Vector3::new(0.0, 0.0, 1.0);
        let cos_align = z.dot(axis).clamp(-1.0, 1.0);
        if cos_align > 1.0 - 1e-12 {
            return local;
        }
        if cos_align < -1.0 + 1e-12 {
            // Axis is -z: flip about x.
            return Vector3::new(local.x, -local.y, -local.z);
        }
        let rot_axis = match z.cross(axis).normalized() {
            Some(a) => a,
            None => return local,
        };
        local.rotated(rot_axis, cos_align.acos())
    }
}
