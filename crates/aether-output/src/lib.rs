//! Plain-text output modules.
//!
//! Output modules are ordinary [`Module`](aether_module::Module)s that
//! inspect candidates read-only and append tab-separated records to a
//! file. The file handle sits behind a mutex so records from concurrent
//! workers never interleave. Writes are fire-and-forget: a failed write
//! is dropped rather than allowed to disturb candidate state, and only
//! file creation reports an error. The one mutation an output performs
//! is removing the property it acted on, which prevents the same
//! candidate from being recorded twice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod event;
pub mod trajectory;

pub use event::ConditionalOutput;
pub use trajectory::{TrajectoryOutput, TrajectoryOutput1D};
