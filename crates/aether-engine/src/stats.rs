//! Counters aggregated over one run.

/// Totals collected by the workers during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Primary candidates propagated to completion.
    pub primaries: u64,
    /// Secondary candidates spawned and propagated.
    pub secondaries: u64,
    /// Total pipeline passes executed across all candidates.
    pub steps: u64,
    /// Candidates retired by the per-candidate step cap while still
    /// active.
    pub step_capped: u64,
}

impl RunStats {
    /// Fold another worker's totals into this one.
    pub fn merge(&mut self, other: &RunStats) {
        self.primaries += other.primaries;
        self.secondaries += other.secondaries;
        self.steps += other.steps;
        self.step_capped += other.step_capped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_all_counters() {
        let mut a = RunStats {
            primaries: 1,
            secondaries: 2,
            steps: 30,
            step_capped: 0,
        };
        let b = RunStats {
            primaries: 3,
            secondaries: 0,
            steps: 12,
            step_capped: 1,
        };
        a.merge(&b);
        assert_eq!(
            a,
            RunStats {
                primaries: 4,
                secondaries: 2,
                steps: 42,
                step_capped: 1,
            }
        );
    }
}
