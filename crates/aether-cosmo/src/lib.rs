//! Distance-redshift conversions in a flat ΛCDM universe.
//!
//! [`Cosmology`] precomputes lookup tables for comoving distance and
//! light-travel distance as functions of redshift by trapezoidal
//! integration of the Friedmann equation, then converts in either
//! direction by linear interpolation. All conversions are pure and the
//! table is immutable after construction, so one instance can be shared
//! read-only across worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use aether_core::units::{C_LIGHT, MPC};

const TABLE_SIZE: usize = 1000;
const Z_MIN: f64 = 1e-4;
const Z_MAX: f64 = 100.0;

/// Precomputed flat ΛCDM distance-redshift tables.
#[derive(Clone, Debug)]
pub struct Cosmology {
    /// Redshift grid: 0, then log-spaced from `Z_MIN` to `Z_MAX`.
    z: Vec<f64>,
    /// Comoving distance at each grid redshift \[m\].
    comoving: Vec<f64>,
    /// Light-travel distance at each grid redshift \[m\].
    light_travel: Vec<f64>,
    hubble_0: f64,
    omega_m: f64,
    omega_l: f64,
}

impl Default for Cosmology {
    /// Planck-like parameters: `h = 0.673`, `Ωm = 0.315`, `ΩΛ = 0.685`.
    fn default() -> Self {
        Cosmology::new(0.673, 0.315, 0.685)
    }
}

impl Cosmology {
    /// Build the tables for the given little-h and density parameters.
    pub fn new(little_h: f64, omega_m: f64, omega_l: f64) -> Self {
        // H0 = 100 h km/s/Mpc in SI.
        let hubble_0 = little_h * 1e5 / MPC;

        let mut z = Vec::with_capacity(TABLE_SIZE);
        z.push(0.0);
        let n = TABLE_SIZE - 1;
        for i in 0..n {
            let frac = i as f64 / (n - 1) as f64;
            z.push(Z_MIN * (Z_MAX / Z_MIN).powf(frac));
        }

        let hubble = |z: f64| hubble_0 * (omega_m * (1.0 + z).powi(3) + omega_l).sqrt();

        let mut comoving = vec![0.0; TABLE_SIZE];
        let mut light_travel = vec![0.0; TABLE_SIZE];
        for i in 1..TABLE_SIZE {
            let dz = z[i] - z[i - 1];
            comoving[i] = comoving[i - 1]
                + 0.5 * dz * C_LIGHT * (1.0 / hubble(z[i - 1]) + 1.0 / hubble(z[i]));
            light_travel[i] = light_travel[i - 1]
                + 0.5 * dz
                    * C_LIGHT
                    * (1.0 / ((1.0 + z[i - 1]) * hubble(z[i - 1]))
                        + 1.0 / ((1.0 + z[i]) * hubble(z[i])));
        }

        Cosmology {
            z,
            comoving,
            light_travel,
            hubble_0,
            omega_m,
            omega_l,
        }
    }

    /// Hubble rate at redshift `z` \[1/s\].
    pub fn hubble_rate(&self, z: f64) -> f64 {
        self.hubble_0 * (self.omega_m * (1.0 + z).powi(3) + self.omega_l).sqrt()
    }

    /// Comoving distance \[m\] to an object at redshift `z`.
    pub fn redshift_to_comoving_distance(&self, z: f64) -> f64 {
        interpolate(z, &self.z, &self.comoving)
    }

    /// Redshift of an object at comoving distance `d` \[m\].
    pub fn comoving_distance_to_redshift(&self, d: f64) -> f64 {
        interpolate(d, &self.comoving, &self.z)
    }

    /// Light-travel distance \[m\] to an object at redshift `z`.
    pub fn redshift_to_light_travel_distance(&self, z: f64) -> f64 {
        interpolate(z, &self.z, &self.light_travel)
    }

    /// Redshift of an object at light-travel distance `d` \[m\].
    pub fn light_travel_distance_to_redshift(&self, d: f64) -> f64 {
        interpolate(d, &self.light_travel, &self.z)
    }

    /// Comoving distance \[m\] corresponding to a light-travel distance
    /// `d` \[m\].
    pub fn light_travel_to_comoving_distance(&self, d: f64) -> f64 {
        self.redshift_to_comoving_distance(self.light_travel_distance_to_redshift(d))
    }
}

/// Linear interpolation of `ys` over the ascending grid `xs`, clamped at
/// both ends.
fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }
    let i = xs.partition_point(|&v| v < x);
    let t = (x - xs[i - 1]) / (xs[i] - xs[i - 1]);
    ys[i - 1] + t * (ys[i] - ys[i - 1])
}
