//! Ballistic propagation along the current heading.

use std::error::Error;
use std::fmt;

use aether_core::Candidate;

use crate::module::Module;

/// Errors from propagation configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum PropagationError {
    /// The step interval is empty, inverted, or non-finite.
    InvalidStepRange {
        /// Configured minimum step \[m\].
        min_step: f64,
        /// Configured maximum step \[m\].
        max_step: f64,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepRange { min_step, max_step } => {
                write!(f, "invalid step range [{min_step}, {max_step}]")
            }
        }
    }
}

impl Error for PropagationError {}

/// Advances candidates in a straight line.
///
/// Each step snapshots `current` into `previous`, moves the position
/// along the heading by the negotiated step size clamped to
/// `[min_step, max_step]`, accumulates the trajectory length, and resets
/// the next-step bound to `max_step` for the following round of
/// negotiation.
#[derive(Clone, Copy, Debug)]
pub struct BallisticPropagation {
    min_step: f64,
    max_step: f64,
}

impl BallisticPropagation {
    /// Create a propagator with the given step bounds \[m\].
    ///
    /// # Errors
    ///
    /// [`PropagationError::InvalidStepRange`] unless
    /// `0 < min_step <= max_step < ∞`.
    pub fn new(min_step: f64, max_step: f64) -> Result<Self, PropagationError> {
        if !(min_step > 0.0) || !(max_step >= min_step) || !max_step.is_finite() {
            return Err(PropagationError::InvalidStepRange { min_step, max_step });
        }
        Ok(BallisticPropagation { min_step, max_step })
    }
}

impl Module for BallisticPropagation {
    fn name(&self) -> &str {
        "BallisticPropagation"
    }

    fn process(&self, candidate: &mut Candidate) {
        let step = candidate.next_step().clamp(self.min_step, self.max_step);

        candidate.previous = candidate.current.clone();
        let position = candidate.current.position() + candidate.current.direction() * step;
        candidate.current.set_position(position);

        candidate.set_current_step(step);
        candidate.set_trajectory_length(candidate.trajectory_length() + step);
        candidate.set_next_step(self.max_step);
    }
}
