//! The multi-threaded simulation driver.
//!
//! [`run`](run::run) distributes candidate serials over a channel to a
//! pool of scoped worker threads. Each worker derives a private RNG
//! stream per candidate from the run seed, asks the source for a
//! candidate, and pushes it through the module chain until it goes
//! inactive, then drains any spawned secondaries with the same loop.
//! Sources and modules are shared read-only; candidates never cross
//! threads mid-flight, so a run is reproducible for a fixed seed no
//! matter how many workers it uses.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod run;
pub mod stats;

pub use config::{ConfigError, RunConfig};
pub use run::{run, RunError};
pub use stats::RunStats;
