//! Port contracts for the SRU task creator.

mod releases;
mod tracker;

pub use releases::ReleaseDirectory;
pub use tracker::{BugTracker, NewTask, TrackerError, TrackerResult};
