//! Candidate sources for the Aether framework.
//!
//! A [`Source`] is an ordered chain of [`SourceFeature`]s, each setting
//! one independent aspect of a freshly created candidate: particle type,
//! energy, position, direction, or redshift. A [`SourceList`] composes
//! several sources with relative weights and is itself an [`Emitter`],
//! so sources nest arbitrarily.
//!
//! Feature order matters: a feature that derives a quantity from another
//! (redshift from position, say) must be registered after the feature
//! that sets it. [`Source::add`] enforces this at construction time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod position;
pub mod redshift;
pub mod source;
pub mod spectrum;

pub use direction::{SourceDirection, SourceEmissionCone, SourceIsotropicEmission};
pub use position::{
    SourceDensityGrid, SourceDensityGrid1D, SourceMultiplePositions, SourcePosition,
    SourceUniform1D, SourceUniformBox, SourceUniformShell, SourceUniformSphere,
};
pub use redshift::{SourceRedshift, SourceRedshift1D, SourceUniformRedshift};
pub use source::{Emitter, Source, SourceError, SourceFeature, SourceList};
pub use spectrum::{
    SourceEnergy, SourceMultipleParticleTypes, SourceParticleType, SourcePowerLawSpectrum,
};
