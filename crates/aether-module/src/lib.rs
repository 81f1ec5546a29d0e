//! Propagation modules and observers for the Aether framework.
//!
//! A [`Module`] is the generic unit of the per-step pipeline: it reads
//! and mutates one candidate at a time, may attach or clear properties,
//! may deactivate the candidate, and may tighten the candidate's
//! next-step bound. Observers are modules built from composable
//! [`ObserverFeature`]s with a tri-state detection verdict.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod module;
pub mod observer;
pub mod propagation;

pub use boundary::{MaximumTrajectoryLength, MinimumEnergy};
pub use module::Module;
pub use observer::{
    DetectionState, Observer, ObserverChargedLeptonVeto, ObserverFeature, ObserverLargeSphere,
    ObserverNeutrinoVeto, ObserverPhotonVeto, ObserverPoint, ObserverRedshiftWindow,
    ObserverSmallSphere,
};
pub use propagation::BallisticPropagation;
