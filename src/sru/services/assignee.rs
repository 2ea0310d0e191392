//! Assignee resolution ahead of any bug processing.

use crate::sru::domain::Person;
use crate::sru::ports::{BugTracker, TrackerError};
use thiserror::Error;

/// Errors raised while resolving the task assignee.
#[derive(Debug, Error)]
pub enum AssigneeError {
    /// The explicitly named person does not exist on the service.
    #[error("no such person: {0}")]
    Unknown(String),

    /// The lookup itself failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// Resolves the assignee for newly created tasks.
///
/// An explicitly named person must exist on the service; without a name the
/// authenticated caller is used. This runs before any bug is fetched, so an
/// unknown name stops the batch before a single bug is touched.
///
/// # Errors
///
/// Returns [`AssigneeError::Unknown`] when the named person does not exist,
/// or [`AssigneeError::Tracker`] when the lookup fails.
pub async fn resolve_assignee<T>(tracker: &T, name: Option<&str>) -> Result<Person, AssigneeError>
where
    T: BugTracker,
{
    match name {
        Some(name) => tracker
            .person_by_name(name)
            .await?
            .ok_or_else(|| AssigneeError::Unknown(name.to_owned())),
        None => Ok(tracker.authenticated_user().await?),
    }
}
