//! Test fixtures for Aether development.
//!
//! Prebuilt candidates and deterministic RNG streams shared by the
//! workspace test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use aether_core::{Candidate, ParticleState, Rng, Vector3};

/// A fresh RNG stream with a fixed seed.
pub fn seeded_rng(seed: u64) -> Rng {
    Rng::from_seed(seed)
}

/// A candidate of the given species at `position`, heading along
/// `direction`, carrying `energy` \[J\].
///
/// # Panics
///
/// Panics on a zero-magnitude direction; fixtures take valid input.
pub fn candidate_at(id: i32, energy: f64, position: Vector3, direction: Vector3) -> Candidate {
    let state = ParticleState::new(id, energy, position, direction)
        .expect("fixture direction must be non-zero");
    Candidate::new(state)
}

/// A candidate whose previous/current positions straddle or approach a
/// boundary: `previous` stays at `from`, `current` sits at `to`.
pub fn stepped_candidate(from: Vector3, to: Vector3) -> Candidate {
    let mut c = Candidate::new(ParticleState::default());
    c.previous.set_position(from);
    c.current.set_position(to);
    c
}
