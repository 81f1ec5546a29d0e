//! Aether: a Monte Carlo framework for astroparticle transport.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Aether sub-crates. For most users, adding `aether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use aether::prelude::*;
//! use aether::core::units::{EEV, MPC};
//!
//! // Protons emitted 50 Mpc up the x axis, aimed at the origin.
//! let mut source = Source::new();
//! source.add(Box::new(SourceParticleType::new(aether::core::pdg::PROTON))).unwrap();
//! source.add(Box::new(SourceEnergy::new(1.0 * EEV))).unwrap();
//! source.add(Box::new(SourcePosition::new(Vector3::new(50.0 * MPC, 0.0, 0.0)))).unwrap();
//! source.add(Box::new(SourceDirection::new(Vector3::new(-1.0, 0.0, 0.0)).unwrap())).unwrap();
//!
//! // Ballistic transport toward a point observer at the origin.
//! let mut observer = Observer::new(true);
//! observer.add(Box::new(ObserverPoint::new()));
//! let modules: Vec<Box<dyn Module>> = vec![
//!     Box::new(BallisticPropagation::new(0.01 * MPC, 10.0 * MPC).unwrap()),
//!     Box::new(observer),
//!     Box::new(MaximumTrajectoryLength::new(1000.0 * MPC)),
//! ];
//!
//! let config = RunConfig::new(100, 42);
//! let stats = aether::engine::run(&source, &modules, &config).unwrap();
//! assert_eq!(stats.primaries, 100);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `aether-core` | Candidates, particle states, RNG, units, sampling |
//! | [`cosmo`] | `aether-cosmo` | Redshift/distance conversion tables |
//! | [`grid`] | `aether-grid` | Scalar density grids for gridded source sampling |
//! | [`source`] | `aether-source` | Composable source features and source lists |
//! | [`module`] | `aether-module` | Propagation, break conditions, observers |
//! | [`output`] | `aether-output` | Plain-text trajectory and event outputs |
//! | [`engine`] | `aether-engine` | Parallel run driver and counters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Candidates, particle states, RNG streams, units, and weighted
/// sampling (`aether-core`).
///
/// Contains [`core::Candidate`], [`core::ParticleState`], the
/// [`core::WeightedSampler`], and the physical constants in
/// [`core::units`].
pub use aether_core as core;

/// Redshift/distance conversion (`aether-cosmo`).
///
/// [`cosmo::Cosmology`] tabulates comoving and light-travel distances
/// for a flat Lambda-CDM universe.
pub use aether_cosmo as cosmo;

/// Scalar density grids (`aether-grid`).
///
/// [`grid::ScalarGrid`] backs the density-weighted source positions in
/// [`source`].
pub use aether_grid as grid;

/// Composable source features (`aether-source`).
///
/// Chain [`source::SourceFeature`] implementations on a
/// [`source::Source`], or mix several sources with a
/// [`source::SourceList`].
pub use aether_source as source;

/// Propagation, break conditions, and observers (`aether-module`).
///
/// The [`module::Module`] trait is the main extension point for
/// user-defined per-step physics.
pub use aether_module as module;

/// Plain-text outputs (`aether-output`).
///
/// [`output::TrajectoryOutput`] records every step,
/// [`output::ConditionalOutput`] records flagged events once.
pub use aether_output as output;

/// Parallel run driver (`aether-engine`).
///
/// Configure a batch with [`engine::RunConfig`] and drive it with
/// [`engine::run`].
pub use aether_engine as engine;

/// Common imports for typical Aether usage.
///
/// ```rust
/// use aether::prelude::*;
/// ```
///
/// This imports the most frequently used types: the candidate model,
/// source features, the module trait with the stock modules and
/// observers, and the run driver.
pub mod prelude {
    // Candidate model
    pub use aether_core::{Candidate, ParticleState, Property, Rng, Vector3, WeightedSampler};

    // Sources
    pub use aether_source::{
        Emitter, Source, SourceDirection, SourceEnergy, SourceFeature, SourceIsotropicEmission,
        SourceList, SourceParticleType, SourcePosition, SourcePowerLawSpectrum,
    };

    // Modules and observers
    pub use aether_module::{
        BallisticPropagation, DetectionState, MaximumTrajectoryLength, MinimumEnergy, Module,
        Observer, ObserverFeature, ObserverLargeSphere, ObserverPoint, ObserverSmallSphere,
    };

    // Outputs
    pub use aether_output::{ConditionalOutput, TrajectoryOutput, TrajectoryOutput1D};

    // Engine
    pub use aether_engine::{run, RunConfig, RunError, RunStats};

    // Errors
    pub use aether_core::{SamplerError, StateError};
    pub use aether_source::SourceError;
}
