//! Redshift (emission time) features.

use std::sync::Arc;

use aether_core::{Candidate, Rng};
use aether_cosmo::Cosmology;

use crate::source::{SourceError, SourceFeature};

/// Fixed emission redshift.
#[derive(Clone, Copy, Debug)]
pub struct SourceRedshift {
    z: f64,
}

impl SourceRedshift {
    /// Emit all candidates at redshift `z`.
    pub fn new(z: f64) -> Self {
        SourceRedshift { z }
    }
}

impl SourceFeature for SourceRedshift {
    fn name(&self) -> &str {
        "SourceRedshift"
    }

    fn prepare_candidate(&self, candidate: &mut Candidate, _rng: &mut Rng) {
        candidate.set_redshift(self.z);
    }
}

/// Uniform emission redshift in `[zmin, zmax]`.
#[derive(Clone, Copy, Debug)]
pub struct SourceUniformRedshift {
    zmin: f64,
    zmax: f64,
}

impl SourceUniformRedshift {
    /// Draw the emission redshift uniformly in `[zmin, zmax]`.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidRange`] for an inverted or non-finite
    /// interval.
    pub fn new(zmin: f64, zmax: f64) -> Result<Self, SourceError> {
        if !(zmin <= zmax) || !zmin.is_finite() || !zmax.is_finite() {
            return Err(SourceError::InvalidRange {
                what: format!("redshift interval [{zmin}, {zmax}]"),
            });
        }
        Ok(SourceUniformRedshift { zmin, zmax })
    }
}

impl SourceFeature for SourceUniformRedshift {
    fn name(&self) -> &str {
        "SourceUniformRedshift"
    }

    fn prepare_candidate(&self, candidate: &mut Candidate, rng: &mut Rng) {
        candidate.set_redshift(rng.uniform_in(self.zmin, self.zmax));
    }
}

/// Redshift from the candidate's distance to the origin.
///
/// Reads the already-prepared position, so it must be registered after
/// a position feature; [`Source::add`](crate::Source::add) rejects it
/// otherwise.
pub struct SourceRedshift1D {
    cosmology: Arc<Cosmology>,
}

impl SourceRedshift1D {
    /// Derive the emission redshift from the comoving distance between
    /// the prepared position and the origin.
    pub fn new(cosmology: Arc<Cosmology>) -> Self {
        SourceRedshift1D { cosmology }
    }
}

impl SourceFeature for SourceRedshift1D {
    fn name(&self) -> &str {
        "SourceRedshift1D"
    }

    fn prepare_candidate(&self, candidate: &mut Candidate, _rng: &mut Rng) {
        let d = candidate.current.position().norm();
        candidate.set_redshift(self.cosmology.comoving_distance_to_redshift(d));
    }

    fn requires_position(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::SourcePosition;
    use crate::source::{Emitter, Source};
    use aether_core::units::MPC;
    use aether_core::Vector3;

    #[test]
    fn fixed_redshift() {
        let mut source = Source::new();
        source.add(Box::new(SourceRedshift::new(0.7))).unwrap();
        let mut rng = Rng::from_seed(0);
        assert_eq!(source.candidate(&mut rng).unwrap().redshift(), 0.7);
    }

    #[test]
    fn uniform_redshift_stays_in_interval() {
        let feature = SourceUniformRedshift::new(0.2, 0.4).unwrap();
        let mut source = Source::new();
        source.add(Box::new(feature)).unwrap();
        let mut rng = Rng::from_seed(1);
        for _ in 0..2_000 {
            let z = source.candidate(&mut rng).unwrap().redshift();
            assert!((0.2..0.4).contains(&z));
        }
    }

    #[test]
    fn uniform_redshift_rejects_inverted_interval() {
        assert!(SourceUniformRedshift::new(0.4, 0.2).is_err());
        assert!(SourceUniformRedshift::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn redshift_1d_before_position_is_a_construction_error() {
        let cosmology = Arc::new(Cosmology::default());
        let mut source = Source::new();
        let err = source
            .add(Box::new(SourceRedshift1D::new(cosmology)))
            .unwrap_err();
        assert_eq!(
            err,
            SourceError::PositionOrdering {
                feature: "SourceRedshift1D".to_owned()
            }
        );
    }

    #[test]
    fn redshift_1d_matches_distance() {
        let cosmology = Arc::new(Cosmology::default());
        let d = 500.0 * MPC;
        let mut source = Source::new();
        source
            .add(Box::new(SourcePosition::new(Vector3::new(d, 0.0, 0.0))))
            .unwrap();
        source
            .add(Box::new(SourceRedshift1D::new(cosmology.clone())))
            .unwrap();

        let mut rng = Rng::from_seed(2);
        let z = source.candidate(&mut rng).unwrap().redshift();
        assert!((z - cosmology.comoving_distance_to_redshift(d)).abs() < 1e-12);
        assert!(z > 0.0);
    }
}
