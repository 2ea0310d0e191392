//! Task status and importance enums mirroring the remote service's values.

use super::{ParseImportanceError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a bug task on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Newly reported, not yet triaged.
    New,
    /// Waiting on the reporter for more information.
    Incomplete,
    /// Reproduced or otherwise confirmed.
    Confirmed,
    /// Triaged by the maintainers.
    Triaged,
    /// A fix is being worked on.
    InProgress,
    /// A fix has landed in the development branch.
    FixCommitted,
    /// A fixed package has been published.
    FixReleased,
    /// Not a valid bug.
    Invalid,
    /// The maintainers will not fix this.
    WontFix,
}

impl TaskStatus {
    /// Returns the wire representation used by the remote service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Incomplete => "Incomplete",
            Self::Confirmed => "Confirmed",
            Self::Triaged => "Triaged",
            Self::InProgress => "In Progress",
            Self::FixCommitted => "Fix Committed",
            Self::FixReleased => "Fix Released",
            Self::Invalid => "Invalid",
            Self::WontFix => "Won't Fix",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "incomplete" => Ok(Self::Incomplete),
            "confirmed" => Ok(Self::Confirmed),
            "triaged" => Ok(Self::Triaged),
            "in progress" => Ok(Self::InProgress),
            "fix committed" => Ok(Self::FixCommitted),
            "fix released" => Ok(Self::FixReleased),
            "invalid" => Ok(Self::Invalid),
            "won't fix" => Ok(Self::WontFix),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Severity classification of a bug task.
///
/// Copied verbatim from the template task to each newly created task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Importance {
    /// Not yet classified.
    Undecided,
    /// Critical severity.
    Critical,
    /// High severity.
    High,
    /// Medium severity.
    Medium,
    /// Low severity.
    Low,
    /// Nice-to-have.
    Wishlist,
}

impl Importance {
    /// Returns the wire representation used by the remote service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undecided => "Undecided",
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Wishlist => "Wishlist",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Importance {
    type Error = ParseImportanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "undecided" => Ok(Self::Undecided),
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "wishlist" => Ok(Self::Wishlist),
            _ => Err(ParseImportanceError(value.to_owned())),
        }
    }
}
