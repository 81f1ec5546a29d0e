//! Emission direction features.

use aether_core::{ParticleState, Rng, Vector3};

use crate::source::{SourceError, SourceFeature};

/// Isotropic emission over the full sphere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceIsotropicEmission;

impl SourceIsotropicEmission {
    /// Emit uniformly in solid angle.
    pub fn new() -> Self {
        SourceIsotropicEmission
    }
}

impl SourceFeature for SourceIsotropicEmission {
    fn name(&self) -> &str {
        "SourceIsotropicEmission"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        state.set_unit_direction(rng.unit_vector());
    }
}

/// Emission in one fixed direction.
#[derive(Clone, Copy, Debug)]
pub struct SourceDirection {
    direction: Vector3,
}

impl SourceDirection {
    /// Emit along the given direction, normalized at construction.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidRange`] for a zero-magnitude vector.
    pub fn new(direction: Vector3) -> Result<Self, SourceError> {
        let direction = direction
            .normalized()
            .ok_or_else(|| SourceError::InvalidRange {
                what: "emission direction has zero magnitude".to_owned(),
            })?;
        Ok(SourceDirection { direction })
    }
}

impl Default for SourceDirection {
    /// The 1-D convention: emission in `-x`.
    fn default() -> Self {
        SourceDirection {
            direction: Vector3::new(-1.0, 0.0, 0.0),
        }
    }
}

impl SourceFeature for SourceDirection {
    fn name(&self) -> &str {
        "SourceDirection"
    }

    fn prepare_particle(&self, state: &mut ParticleState, _rng: &mut Rng) {
        state.set_unit_direction(self.direction);
    }
}

/// Uniform random emission inside a cone.
#[derive(Clone, Copy, Debug)]
pub struct SourceEmissionCone {
    axis: Vector3,
    half_aperture: f64,
}

impl SourceEmissionCone {
    /// Emit uniformly in solid angle inside the cone around `axis`
    /// with the given half opening angle in radians.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidRange`] for a zero-magnitude axis or a
    /// half aperture outside `(0, π]`.
    pub fn new(axis: Vector3, half_aperture: f64) -> Result<Self, SourceError> {
        let axis = axis.normalized().ok_or_else(|| SourceError::InvalidRange {
            what: "cone axis has zero magnitude".to_owned(),
        })?;
        if !(half_aperture > 0.0) || half_aperture > std::f64::consts::PI {
            return Err(SourceError::InvalidRange {
                what: format!("cone half aperture {half_aperture}"),
            });
        }
        Ok(SourceEmissionCone {
            axis,
            half_aperture,
        })
    }
}

impl SourceFeature for SourceEmissionCone {
    fn name(&self) -> &str {
        "SourceEmissionCone"
    }

    fn prepare_particle(&self, state: &mut ParticleState, rng: &mut Rng) {
        state.set_unit_direction(rng.cone_vector(self.axis, self.half_aperture));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(feature: &dyn SourceFeature, rng: &mut Rng) -> Vector3 {
        let mut state = ParticleState::default();
        feature.prepare_particle(&mut state, rng);
        state.direction()
    }

    #[test]
    fn fixed_direction_is_normalized() {
        let f = SourceDirection::new(Vector3::new(0.0, 0.0, 5.0)).unwrap();
        let mut rng = Rng::from_seed(0);
        assert_eq!(draw(&f, &mut rng), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn zero_direction_rejected_at_construction() {
        assert!(SourceDirection::new(Vector3::ZERO).is_err());
    }

    #[test]
    fn default_direction_is_negative_x() {
        let f = SourceDirection::default();
        let mut rng = Rng::from_seed(0);
        assert_eq!(draw(&f, &mut rng), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn isotropic_directions_are_unit_length() {
        let f = SourceIsotropicEmission::new();
        let mut rng = Rng::from_seed(1);
        for _ in 0..1_000 {
            assert!((draw(&f, &mut rng).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cone_rejects_bad_parameters() {
        assert!(SourceEmissionCone::new(Vector3::ZERO, 0.5).is_err());
        assert!(SourceEmissionCone::new(Vector3::new(1.0, 0.0, 0.0), 0.0).is_err());
        assert!(SourceEmissionCone::new(Vector3::new(1.0, 0.0, 0.0), 4.0).is_err());
    }

    #[test]
    fn cone_emission_stays_inside_aperture() {
        let axis = Vector3::new(0.0, 1.0, 0.0);
        let f = SourceEmissionCone::new(axis, 0.25).unwrap();
        let mut rng = Rng::from_seed(17);
        for _ in 0..2_000 {
            let d = draw(&f, &mut rng);
            let angle = d.dot(axis).clamp(-1.0, 1.0).acos();
            assert!(angle <= 0.25 + 1e-9);
        }
    }
}
