//! Run configuration and validation.

use std::error::Error;
use std::fmt;

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A run of zero candidates was requested.
    NoCandidates,
    /// The per-candidate step cap is zero.
    ZeroMaxSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "run requests zero candidates"),
            Self::ZeroMaxSteps => write!(f, "per-candidate step cap is zero"),
        }
    }
}

impl Error for ConfigError {}

/// Configuration for one simulation run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of primary candidates to emit and propagate.
    pub candidates: u64,
    /// Base seed; candidate `i` uses the stream seeded with
    /// `seed XOR i`.
    pub seed: u64,
    /// Worker thread count. `None` auto-detects from the available
    /// parallelism, clamped to `[1, 64]`.
    pub workers: Option<usize>,
    /// Safety cap on pipeline passes per candidate; a candidate still
    /// active after this many steps is deactivated.
    pub max_steps: u64,
}

impl RunConfig {
    /// A run of `candidates` primaries with the given seed and default
    /// worker and step settings.
    pub fn new(candidates: u64, seed: u64) -> Self {
        RunConfig {
            candidates,
            seed,
            workers: None,
            max_steps: 1_000_000,
        }
    }

    /// Check structural invariants before a run starts.
    ///
    /// # Errors
    ///
    /// A [`ConfigError`] naming the violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        Ok(())
    }

    /// Resolve the worker count, applying auto-detection if unset.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 64),
        }
    }
}
