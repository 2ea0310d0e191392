//! Stable-release-update task creation.
//!
//! Implements the whole SRU flow: classify a bug's existing tasks, realign
//! the development-release task's status on request, and create one
//! idempotent task per requested stable release with computed assignee,
//! status, and importance. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
