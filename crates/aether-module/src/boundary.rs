//! Break conditions that retire candidates from the simulation.

use aether_core::Candidate;

use crate::module::Module;

/// Deactivates candidates once their trajectory exceeds a limit.
///
/// While below the limit it bounds the next step by the remaining
/// length, so the final step lands on the limit instead of past it.
#[derive(Clone, Copy, Debug)]
pub struct MaximumTrajectoryLength {
    max_length: f64,
}

impl MaximumTrajectoryLength {
    /// Retire candidates after `max_length` \[m\] of trajectory.
    pub fn new(max_length: f64) -> Self {
        MaximumTrajectoryLength { max_length }
    }
}

impl Module for MaximumTrajectoryLength {
    fn name(&self) -> &str {
        "MaximumTrajectoryLength"
    }

    fn process(&self, candidate: &mut Candidate) {
        let length = candidate.trajectory_length();
        if length >= self.max_length {
            candidate.set_active(false);
            return;
        }
        candidate.limit_next_step(self.max_length - length);
    }
}

/// Deactivates candidates that drop below an energy floor.
#[derive(Clone, Copy, Debug)]
pub struct MinimumEnergy {
    min_energy: f64,
}

impl MinimumEnergy {
    /// Retire candidates below `min_energy` \[J\].
    pub fn new(min_energy: f64) -> Self {
        MinimumEnergy { min_energy }
    }
}

impl Module for MinimumEnergy {
    fn name(&self) -> &str {
        "MinimumEnergy"
    }

    fn process(&self, candidate: &mut Candidate) {
        if candidate.current.energy() < self.min_energy {
            candidate.set_active(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_limit_deactivates_at_the_limit() {
        let m = MaximumTrajectoryLength::new(100.0);
        let mut c = Candidate::default();

        c.set_trajectory_length(40.0);
        m.process(&mut c);
        assert!(c.is_active());
        assert_eq!(c.next_step(), 60.0);

        c.set_trajectory_length(100.0);
        m.process(&mut c);
        assert!(!c.is_active());
    }

    #[test]
    fn energy_floor() {
        let m = MinimumEnergy::new(1.0);
        let mut c = Candidate::default();

        c.current.set_energy(2.0);
        m.process(&mut c);
        assert!(c.is_active());

        c.current.set_energy(0.5);
        m.process(&mut c);
        assert!(!c.is_active());
    }
}
