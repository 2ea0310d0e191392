//! Error types for SRU domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SruDomainError {
    /// The source package name is empty after trimming.
    #[error("source package name must not be empty")]
    EmptyPackageName,

    /// The source package name contains characters outside the archive
    /// naming rules.
    #[error("invalid source package name '{0}'")]
    InvalidPackageName(String),

    /// The series codename is empty after trimming.
    #[error("series codename must not be empty")]
    EmptySeriesName,

    /// The series codename contains characters outside codename rules.
    #[error("invalid series codename '{0}'")]
    InvalidSeriesName(String),

    /// The person name is empty after trimming.
    #[error("person name must not be empty")]
    EmptyPersonName,
}

/// Error returned while parsing task statuses from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing importances from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown importance: {0}")]
pub struct ParseImportanceError(pub String);
