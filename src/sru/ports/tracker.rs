//! Bug-tracker port for remote bug, task, and person operations.

use crate::sru::domain::{
    Bug, BugId, Importance, PackageName, Person, SeriesName, TaskLink, TaskStatus,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for bug-tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Field set for a task to be created on a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    package: PackageName,
    series: SeriesName,
    assignee: Person,
    status: TaskStatus,
    importance: Importance,
}

impl NewTask {
    /// Bundles the fields of a new series-bound task.
    #[must_use]
    pub const fn new(
        package: PackageName,
        series: SeriesName,
        assignee: Person,
        status: TaskStatus,
        importance: Importance,
    ) -> Self {
        Self {
            package,
            series,
            assignee,
            status,
            importance,
        }
    }

    /// Returns the target source package.
    #[must_use]
    pub const fn package(&self) -> &PackageName {
        &self.package
    }

    /// Returns the target series.
    #[must_use]
    pub const fn series(&self) -> &SeriesName {
        &self.series
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Person {
        &self.assignee
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the importance.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        self.importance
    }
}

/// Remote bug-tracker contract.
///
/// Models the service's load / mutate-field / explicit-save object model as
/// discrete operations so the decision logic stays independent of the
/// transport.
#[async_trait]
pub trait BugTracker: Send + Sync {
    /// Returns the identity of the authenticated caller.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the session is not authenticated or the
    /// service is unreachable.
    async fn authenticated_user(&self) -> TrackerResult<Person>;

    /// Resolves a person by their unique service name.
    ///
    /// Returns `None` when no person with that name exists.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] on transport failure.
    async fn person_by_name(&self, name: &str) -> TrackerResult<Option<Person>>;

    /// Loads a bug and its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::BugNotFound`] for unknown bugs and
    /// [`TrackerError::Unauthorized`] for private bugs the caller may not
    /// read.
    async fn bug(&self, id: BugId) -> TrackerResult<Bug>;

    /// Updates the status of an existing task and saves it in place.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when the link no longer
    /// resolves.
    async fn set_task_status(&self, task: &TaskLink, status: TaskStatus) -> TrackerResult<()>;

    /// Creates a new series-bound task on the bug and saves it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskAlreadyExists`] when the target already
    /// has a task on this bug; creation must not duplicate.
    async fn create_task(&self, bug: BugId, task: &NewTask) -> TrackerResult<()>;

    /// Persists the bug object itself after task processing.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::BugNotFound`] when the bug no longer exists.
    async fn save_bug(&self, id: BugId) -> TrackerResult<()>;
}

/// Errors returned by bug-tracker implementations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The bug does not exist.
    #[error("bug {0} not found")]
    BugNotFound(BugId),

    /// The bug is private or the caller may not access it.
    #[error("not authorized to access bug {0}")]
    Unauthorized(BugId),

    /// The target already has a task on this bug.
    #[error("bug {bug} already has a task for {package} in {series}")]
    TaskAlreadyExists {
        /// Bug the creation was attempted on.
        bug: BugId,
        /// Source package of the attempted target.
        package: PackageName,
        /// Series of the attempted target.
        series: SeriesName,
    },

    /// The task link no longer resolves to a task.
    #[error("task not found: {0}")]
    TaskNotFound(TaskLink),

    /// The series is unknown to the distribution.
    #[error("unknown series: {0}")]
    UnknownSeries(SeriesName),

    /// The service returned a value the tool cannot interpret.
    #[error("invalid value from service: {0}")]
    InvalidValue(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when the error should abort only the current bug,
    /// leaving the rest of the batch to run.
    #[must_use]
    pub const fn is_recoverable_per_bug(&self) -> bool {
        matches!(
            self,
            Self::BugNotFound(_) | Self::Unauthorized(_) | Self::InvalidValue(_)
        )
    }
}
