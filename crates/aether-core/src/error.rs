//! Error types for the core building blocks.
//!
//! Configuration mistakes fail fast at construction or first use.
//! Physically meaningless numeric inputs (negative energies, negative
//! Lorentz factors) are clamped silently instead and never surface here.

use std::error::Error;
use std::fmt;

/// Errors from [`WeightedSampler`](crate::WeightedSampler) construction.
///
/// Sampling from an empty sampler is not an error here: it returns
/// `None`, and callers that treat it as a configuration mistake map it
/// to their own variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplerError {
    /// A zero, negative, or non-finite weight was added.
    InvalidWeight {
        /// The offending weight.
        weight: f64,
    },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight { weight } => {
                write!(f, "sampler weight must be positive and finite, got {weight}")
            }
        }
    }
}

impl Error for SamplerError {}

/// Contract violations on [`ParticleState`](crate::ParticleState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A zero-magnitude (or non-finite) direction vector was assigned.
    DegenerateDirection,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateDirection => {
                write!(f, "direction vector has zero magnitude")
            }
        }
    }
}

impl Error for StateError {}
