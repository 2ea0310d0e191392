//! SRU task creator.
//!
//! This crate automates creation of stable-release-update tracking tasks on
//! a remote bug-tracking service: given bug numbers and target releases, it
//! classifies each bug's existing tasks, optionally realigns the
//! development-release task's status, and creates one idempotent task per
//! requested stable release with computed assignee, status, and importance.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types mirroring the remote object model
//! - **Ports**: Abstract trait interfaces for the tracker and release set
//! - **Adapters**: Concrete implementations (HTTP client, distro-info
//!   database, in-memory fake)
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing and pre-network validation
//! - [`sru`]: Task classification, creation engine, and batch driver

pub mod cli;
pub mod sru;
