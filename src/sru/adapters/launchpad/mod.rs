//! Remote-service adapter: credential store, wire models, HTTP client.

mod client;
mod credentials;
pub mod models;

pub use client::{DISTRIBUTION, LaunchpadTracker, SERVICE_ROOT};
pub use credentials::{CredentialError, Credentials};
