//! Wire models for the remote service's JSON representations.

use crate::sru::domain::{
    BugTask, PackageName, ParseImportanceError, ParseTaskStatusError, Person, SeriesName,
    TaskLink, TaskTarget,
};
use crate::sru::ports::{TrackerError, TrackerResult};
use serde::Deserialize;

/// Bug entry as returned by `GET /bugs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BugModel {
    /// Bug number.
    pub id: u64,
    /// Link to the bug's task collection.
    pub bug_tasks_collection_link: String,
}

/// One page of a collection resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PageModel<T> {
    /// Entries on this page.
    pub entries: Vec<T>,
    /// Link to the next page, absent on the last one.
    pub next_collection_link: Option<String>,
}

/// Bug task entry as returned inside a task collection.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskModel {
    /// Canonical link to this task.
    pub self_link: String,
    /// Link to the task's target resource.
    pub target_link: String,
    /// Workflow status string.
    pub status: String,
    /// Importance string.
    pub importance: String,
    /// Link to the assignee, when set.
    pub assignee_link: Option<String>,
}

/// Person entry as returned by `GET /~{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonModel {
    /// Unique service name.
    pub name: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
}

impl PersonModel {
    /// Converts the wire person into the domain identity.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when the name is empty.
    pub fn into_domain(self) -> TrackerResult<Person> {
        let mut person =
            Person::new(self.name).map_err(|err| TrackerError::InvalidValue(err.to_string()))?;
        if let Some(display_name) = self.display_name {
            person = person.with_display_name(display_name);
        }
        Ok(person)
    }
}

impl TaskModel {
    /// Converts the wire task into a domain snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when the status, importance,
    /// or target link cannot be interpreted.
    pub fn into_domain(self) -> TrackerResult<BugTask> {
        let status = self
            .status
            .as_str()
            .try_into()
            .map_err(|err: ParseTaskStatusError| TrackerError::InvalidValue(err.to_string()))?;
        let importance = self
            .importance
            .as_str()
            .try_into()
            .map_err(|err: ParseImportanceError| TrackerError::InvalidValue(err.to_string()))?;
        let target = parse_target_link(&self.target_link)?;
        let mut task = BugTask::new(TaskLink::new(self.self_link), target, status, importance);
        if let Some(link) = self.assignee_link {
            task = task.with_assignee(person_from_link(&link)?);
        }
        Ok(task)
    }
}

/// Parses a target link into its package/series classification.
///
/// Target paths take one of two shapes after the API version segment:
/// `<distribution>/+source/<package>` (generic, no series binding) or
/// `<distribution>/<series>/+source/<package>` (series-bound).
///
/// # Errors
///
/// Returns [`TrackerError::InvalidValue`] for any other target shape, e.g.
/// project targets, which this tool does not handle.
pub fn parse_target_link(link: &str) -> TrackerResult<TaskTarget> {
    let invalid = || TrackerError::InvalidValue(format!("unrecognized task target: {link}"));

    let path = link
        .split_once("://")
        .map_or(link, |(_, rest)| rest);
    // Drop the host, keeping path segments only.
    let segments: Vec<&str> = path.split('/').skip(1).filter(|s| !s.is_empty()).collect();

    let source_pos = segments
        .iter()
        .position(|s| *s == "+source")
        .ok_or_else(invalid)?;
    let package_raw = segments.get(source_pos + 1).ok_or_else(invalid)?;
    let package =
        PackageName::new(*package_raw).map_err(|err| TrackerError::InvalidValue(err.to_string()))?;

    // Segment 0 is the API version, segment 1 the distribution.
    match source_pos {
        2 => Ok(TaskTarget::Generic { package }),
        3 => {
            let series_raw = segments.get(2).ok_or_else(invalid)?;
            let series = SeriesName::new(*series_raw)
                .map_err(|err| TrackerError::InvalidValue(err.to_string()))?;
            Ok(TaskTarget::SeriesBound { package, series })
        }
        _ => Err(invalid()),
    }
}

fn person_from_link(link: &str) -> TrackerResult<Person> {
    let name = link
        .rsplit('/')
        .next()
        .and_then(|segment| segment.strip_prefix('~'))
        .ok_or_else(|| TrackerError::InvalidValue(format!("unrecognized person link: {link}")))?;
    Person::new(name).map_err(|err| TrackerError::InvalidValue(err.to_string()))
}
