//! Orchestration services: the task creation engine and the batch driver.

mod assignee;
mod batch;
mod engine;

pub use assignee::{AssigneeError, resolve_assignee};
pub use batch::{BatchDriver, BugFailure, RunReport};
pub use engine::{BugOutcome, EngineConfig, TaskCreationEngine};
