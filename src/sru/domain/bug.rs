//! Bug and task snapshots as read from the remote service.

use super::{BugId, Importance, Person, TaskLink, TaskStatus, TaskTarget};
use serde::{Deserialize, Serialize};

/// Snapshot of one bug task at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugTask {
    link: TaskLink,
    target: TaskTarget,
    status: TaskStatus,
    importance: Importance,
    assignee: Option<Person>,
}

impl BugTask {
    /// Creates a task snapshot.
    #[must_use]
    pub const fn new(
        link: TaskLink,
        target: TaskTarget,
        status: TaskStatus,
        importance: Importance,
    ) -> Self {
        Self {
            link,
            target,
            status,
            importance,
            assignee: None,
        }
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Person) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the remote resource link.
    #[must_use]
    pub const fn link(&self) -> &TaskLink {
        &self.link
    }

    /// Returns the task target.
    #[must_use]
    pub const fn target(&self) -> &TaskTarget {
        &self.target
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task importance.
    #[must_use]
    pub const fn importance(&self) -> Importance {
        self.importance
    }

    /// Returns the assignee when set.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Person> {
        self.assignee.as_ref()
    }
}

/// Snapshot of one bug with its tasks in service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    id: BugId,
    tasks: Vec<BugTask>,
}

impl Bug {
    /// Creates a bug snapshot.
    #[must_use]
    pub const fn new(id: BugId, tasks: Vec<BugTask>) -> Self {
        Self { id, tasks }
    }

    /// Returns the bug identifier.
    #[must_use]
    pub const fn id(&self) -> BugId {
        self.id
    }

    /// Returns the tasks in the order the service returned them.
    #[must_use]
    pub fn tasks(&self) -> &[BugTask] {
        &self.tasks
    }
}
