//! Parallel run driver.
//!
//! Spawns a pool of scoped worker threads, hands out candidate serial
//! numbers over a bounded channel, and folds each worker's counters into
//! one [`RunStats`] total. Every candidate gets its own RNG stream seeded
//! from `config.seed ^ serial`, so a run is reproducible regardless of
//! worker count or scheduling.

use std::fmt;
use std::thread;

use crossbeam_channel::{bounded, Receiver};

use aether_core::{Candidate, Rng};
use aether_module::Module;
use aether_source::{Emitter, SourceError};

use crate::config::{ConfigError, RunConfig};
use crate::stats::RunStats;

/// Errors that abort a run before or during candidate propagation.
#[derive(Debug)]
pub enum RunError {
    /// The run configuration failed validation.
    Config(ConfigError),
    /// The source could not emit a candidate.
    Source(SourceError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Source(e) => write!(f, "source: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Source(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<SourceError> for RunError {
    fn from(e: SourceError) -> Self {
        RunError::Source(e)
    }
}

/// Propagates `config.candidates` candidates drawn from `source` through
/// the module chain.
///
/// Each candidate is processed to completion on one worker: the module
/// chain runs repeatedly until the candidate deactivates or the
/// per-candidate step cap is reached, then any spawned secondaries are
/// propagated the same way before the next serial is picked up. Counters
/// from all workers are merged into the returned [`RunStats`].
pub fn run(
    source: &dyn Emitter,
    modules: &[Box<dyn Module>],
    config: &RunConfig,
) -> Result<RunStats, RunError> {
    config.validate()?;
    let workers = config.resolved_workers();
    let (serial_tx, serial_rx) = bounded::<u64>(workers * 2);

    thread::scope(|scope| {
        let feeder = scope.spawn(move || {
            for serial in 0..config.candidates {
                // Send fails only once every worker has hung up, which
                // means the run is already aborting.
                if serial_tx.send(serial).is_err() {
                    break;
                }
            }
        });

        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let serials = serial_rx.clone();
                scope.spawn(move || drain_serials(source, modules, config, serials))
            })
            .collect();
        drop(serial_rx);

        let mut total = RunStats::default();
        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(stats)) => total.merge(&stats),
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        if let Err(payload) = feeder.join() {
            std::panic::resume_unwind(payload);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    })
}

fn drain_serials(
    source: &dyn Emitter,
    modules: &[Box<dyn Module>],
    config: &RunConfig,
    serials: Receiver<u64>,
) -> Result<RunStats, RunError> {
    let mut stats = RunStats::default();
    for serial in serials {
        let mut rng = Rng::from_seed(config.seed ^ serial);
        let primary = source.candidate(&mut rng)?;
        stats.primaries += 1;

        // Depth-first over the secondary tree: a parent is finished
        // before its secondaries start.
        let mut pending: Vec<Candidate> = vec![primary];
        while let Some(mut candidate) = pending.pop() {
            let mut steps = 0u64;
            while candidate.is_active() {
                if steps >= config.max_steps {
                    candidate.set_active(false);
                    stats.step_capped += 1;
                    break;
                }
                for module in modules {
                    module.process(&mut candidate);
                }
                steps += 1;
            }
            stats.steps += steps;

            let spawned = candidate.take_secondaries();
            stats.secondaries += spawned.len() as u64;
            pending.extend(spawned.into_iter().map(|boxed| *boxed));
        }
    }
    Ok(stats)
}
