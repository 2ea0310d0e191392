//! Command-line argument parsing and pre-network validation.

use crate::sru::domain::{BugId, SeriesName, SruDomainError, TaskStatus};
use crate::sru::ports::ReleaseDirectory;
use clap::{Parser, ValueEnum};
use std::fmt;
use thiserror::Error;

/// Status values a task may be set to from the command line.
///
/// The remote service knows more statuses; only these three make sense as
/// targets of an SRU run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// A fix is being worked on.
    #[value(name = "INPROGRESS")]
    InProgress,
    /// A fix has landed in the development branch.
    #[value(name = "FIXCOMMITTED")]
    FixCommitted,
    /// A fixed package has been published.
    #[value(name = "FIXRELEASED")]
    FixReleased,
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "INPROGRESS",
            Self::FixCommitted => "FIXCOMMITTED",
            Self::FixReleased => "FIXRELEASED",
        };
        f.write_str(name)
    }
}

impl From<StatusArg> for TaskStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::InProgress => Self::InProgress,
            StatusArg::FixCommitted => Self::FixCommitted,
            StatusArg::FixReleased => Self::FixReleased,
        }
    }
}

/// Errors raised while resolving arguments, before any network activity.
#[derive(Debug, Error)]
pub enum CliError {
    /// A requested release is not in the supported set.
    #[error("'{name}' is not a supported stable release (supported: {supported})")]
    UnsupportedRelease {
        /// The rejected release name.
        name: String,
        /// Comma-separated supported codenames for the error message.
        supported: String,
    },

    /// A requested release is not even a well-formed codename.
    #[error(transparent)]
    InvalidSeries(#[from] SruDomainError),
}

/// Create stable release update tasks on bug reports.
#[derive(Debug, Parser)]
#[command(name = "sru-tasker", version, about)]
pub struct Cli {
    /// Status to set the development-release task to.
    #[arg(short = 'd', long = "dev-release-status", value_enum)]
    pub dev_release_status: Option<StatusArg>,

    /// Status to create the stable-release tasks with.
    #[arg(
        short = 's',
        long = "stable-release-status",
        value_enum,
        default_value_t = StatusArg::InProgress
    )]
    pub stable_release_status: StatusArg,

    /// Assign the new tasks to this person instead of the caller.
    #[arg(short = 'a', long = "assign", value_name = "NAME")]
    pub assign: Option<String>,

    /// Stable release to create a task for; may be repeated.
    #[arg(
        short = 'r',
        long = "release",
        value_name = "RELEASE",
        required = true
    )]
    pub release: Vec<String>,

    /// Log every decision without touching the remote service.
    #[arg(short = 'n', long = "dry-run", visible_alias = "no-act")]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Bug numbers to process.
    #[arg(value_name = "BUG", required = true)]
    pub bugs: Vec<u64>,
}

impl Cli {
    /// Validates the requested releases against the supported set.
    ///
    /// Runs before any network call; an unsupported or malformed name
    /// rejects the whole invocation.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] for malformed codenames and names outside the
    /// supported set.
    pub fn resolve_releases(
        &self,
        directory: &impl ReleaseDirectory,
    ) -> Result<Vec<SeriesName>, CliError> {
        let supported = directory.supported();
        self.release
            .iter()
            .map(|name| {
                let series = SeriesName::new(name.as_str())?;
                if supported.contains(&series) {
                    Ok(series)
                } else {
                    Err(CliError::UnsupportedRelease {
                        name: name.clone(),
                        supported: supported
                            .iter()
                            .map(SeriesName::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
                }
            })
            .collect()
    }

    /// Returns the positional bug numbers as identifiers, in order.
    #[must_use]
    pub fn bug_ids(&self) -> Vec<BugId> {
        self.bugs.iter().copied().map(BugId::new).collect()
    }

    /// Returns the default log filter for this invocation.
    ///
    /// Dry-run raises the level so decision logging is visible without
    /// `--debug`.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.dry_run {
            "info"
        } else {
            "warn"
        }
    }
}
