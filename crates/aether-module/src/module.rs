//! The [`Module`] trait.

use aether_core::Candidate;

/// A modular operator in the per-step propagation pipeline.
///
/// The driver calls `process()` on every module of the configured chain,
/// in order, once per step, until the candidate goes inactive. A module
/// may mutate the candidate's state, attach or clear properties,
/// deactivate it, or tighten the next-step bound via
/// [`Candidate::limit_next_step`] so the following advance cannot
/// overshoot a boundary the module cares about. Modules never learn
/// about each other; the step bound is the only coupling.
///
/// # Contract
///
/// - `&self` only: modules hold configuration, not per-candidate state.
/// - `Send + Sync`: one module instance is shared by all worker threads.
/// - An inactive candidate must not be processed again; the driver
///   enforces this.
///
/// # Object safety
///
/// This trait is object-safe; the driver stores the chain as
/// `Vec<Box<dyn Module>>`.
pub trait Module: Send + Sync {
    /// Human-readable name for error reporting and diagnostics.
    fn name(&self) -> &str;

    /// Execute this module against one candidate.
    fn process(&self, candidate: &mut Candidate);
}
