//! The physical state of a single particle.

use crate::error::StateError;
use crate::pdg;
use crate::units::{C_LIGHT, C_SQUARED};
use crate::vector::Vector3;

/// Identity, energy, position, and direction of one particle.
///
/// Charge and rest mass are derived from the PDG id on demand; the
/// direction is kept unit length and the energy non-negative by the
/// setters. Candidates embed three of these (source, previous, current)
/// by value.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleState {
    id: i32,
    energy: f64,
    position: Vector3,
    direction: Vector3,
}

impl Default for ParticleState {
    /// A neutral particle at rest at the origin, heading in `-x`
    /// (the 1-D simulation convention).
    fn default() -> Self {
        ParticleState {
            id: 0,
            energy: 0.0,
            position: Vector3::ZERO,
            direction: Vector3::new(-1.0, 0.0, 0.0),
        }
    }
}

impl ParticleState {
    /// Construct a state, validating the direction vector.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DegenerateDirection`] for a zero-magnitude
    /// direction.
    pub fn new(
        id: i32,
        energy: f64,
        position: Vector3,
        direction: Vector3,
    ) -> Result<Self, StateError> {
        let mut state = ParticleState {
            id,
            energy: 0.0,
            position,
            direction: Vector3::new(-1.0, 0.0, 0.0),
        };
        state.set_energy(energy);
        state.set_direction(direction)?;
        Ok(state)
    }

    /// PDG id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Set the PDG id. Charge and mass follow automatically.
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    /// Electric charge \[C\], a pure function of the id.
    pub fn charge(&self) -> f64 {
        pdg::charge_of(self.id)
    }

    /// Rest mass \[kg\], a pure function of the id.
    pub fn mass(&self) -> f64 {
        pdg::mass_of(self.id)
    }

    /// Energy \[J\].
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Set the energy \[J\]. Negative inputs clamp to zero.
    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy.max(0.0);
    }

    /// Position \[m\].
    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Set the position \[m\].
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Heading, always unit length.
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Set the heading. The input is normalized to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DegenerateDirection`] for a zero-magnitude
    /// or non-finite input.
    pub fn set_direction(&mut self, direction: Vector3) -> Result<(), StateError> {
        self.direction = direction
            .normalized()
            .ok_or(StateError::DegenerateDirection)?;
        Ok(())
    }

    /// Set a heading that is already unit length.
    ///
    /// Reserved for callers holding an analytically normalized vector,
    /// e.g. the isotropic and cone emission draws.
    pub fn set_unit_direction(&mut self, direction: Vector3) {
        debug_assert!((direction.norm() - 1.0).abs() < 1e-9);
        self.direction = direction;
    }

    /// Lorentz factor `E / (m c²)`. Infinite for massless particles
    /// with non-zero energy.
    pub fn lorentz_factor(&self) -> f64 {
        self.energy / (self.mass() * C_SQUARED)
    }

    /// Set the energy via the Lorentz factor. Negative inputs clamp to
    /// zero.
    pub fn set_lorentz_factor(&mut self, gamma: f64) {
        self.energy = gamma.max(0.0) * self.mass() * C_SQUARED;
    }

    /// Velocity \[m/s\]: the heading scaled by the speed of light.
    pub fn velocity(&self) -> Vector3 {
        self.direction * C_LIGHT
    }

    /// Momentum \[kg m/s\]: the heading scaled by `E / c`.
    pub fn momentum(&self) -> Vector3 {
        self.direction * (self.energy / C_LIGHT)
    }
}
