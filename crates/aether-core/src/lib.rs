//! Core types for the Aether cosmic-ray propagation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental building blocks used throughout the Aether workspace:
//! 3-vectors, particle states, candidates, weighted sampling, the seeded
//! random-number stream, and the core error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod particle;
pub mod pdg;
pub mod rng;
pub mod sampler;
pub mod units;
pub mod vector;

pub use candidate::{Candidate, Property};
pub use error::{SamplerError, StateError};
pub use particle::ParticleState;
pub use rng::Rng;
pub use sampler::WeightedSampler;
pub use vector::Vector3;
