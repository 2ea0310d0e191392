//! Assignee identity resolved against the remote service.

use super::SruDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person known to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    display_name: Option<String>,
}

impl Person {
    /// Creates a person from their unique service name.
    ///
    /// # Errors
    ///
    /// Returns [`SruDomainError::EmptyPersonName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, SruDomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SruDomainError::EmptyPersonName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            display_name: None,
        })
    }

    /// Sets the human-readable display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the unique service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display name when known.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
