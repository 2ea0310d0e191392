//! Identifier and validated scalar types for the SRU domain.

use super::SruDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote bug identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugId(u64);

impl BugId {
    /// Wraps a raw bug number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw bug number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BugId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Validated source package name.
///
/// Archive naming rules: lowercase alphanumeric start, then lowercase
/// alphanumerics, `+`, `-`, or `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    /// Validates and wraps a source package name.
    ///
    /// # Errors
    ///
    /// Returns [`SruDomainError::EmptyPackageName`] for empty input and
    /// [`SruDomainError::InvalidPackageName`] for names outside the archive
    /// naming rules.
    pub fn new(name: impl Into<String>) -> Result<Self, SruDomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SruDomainError::EmptyPackageName);
        }
        let mut chars = trimmed.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        let tail_ok = chars.all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
        });
        if !head_ok || !tail_ok {
            return Err(SruDomainError::InvalidPackageName(name));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the package name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated distribution series codename (e.g. `focal`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesName(String);

impl SeriesName {
    /// Validates and wraps a series codename.
    ///
    /// # Errors
    ///
    /// Returns [`SruDomainError::EmptySeriesName`] for empty input and
    /// [`SruDomainError::InvalidSeriesName`] when the codename is not
    /// lowercase-alphabetic with optional interior `-` or `.`.
    pub fn new(name: impl Into<String>) -> Result<Self, SruDomainError> {
        let name = name.into();
        let trimmed = name.trim().to_ascii_lowercase();
        if trimmed.is_empty() {
            return Err(SruDomainError::EmptySeriesName);
        }
        let mut chars = trimmed.chars();
        let head_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        let tail_ok = chars
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.'));
        if !head_ok || !tail_ok {
            return Err(SruDomainError::InvalidSeriesName(name));
        }
        Ok(Self(trimmed))
    }

    /// Returns the codename as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to a remote task resource.
///
/// The remote service addresses individual tasks by link; the tool never
/// parses the link beyond carrying it back on mutation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskLink(String);

impl TaskLink {
    /// Wraps a task resource link.
    #[must_use]
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    /// Returns the link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
