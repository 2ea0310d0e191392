//! In-memory bug tracker for engine and batch tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::sru::{
    domain::{Bug, BugId, BugTask, Person, TaskLink, TaskStatus, TaskTarget},
    ports::{BugTracker, NewTask, TrackerError, TrackerResult},
};

/// One mutating call observed by the fake tracker.
///
/// The log lets tests assert idempotence and the dry-run guarantee that no
/// mutating call is ever issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// A task status was updated in place.
    StatusSet {
        /// Task that was updated.
        task: TaskLink,
        /// Status it was set to.
        status: TaskStatus,
    },
    /// A new series-bound task was created.
    TaskCreated {
        /// Bug the task was created on.
        bug: BugId,
        /// Target description of the created task.
        target: TaskTarget,
    },
    /// The bug object itself was saved.
    BugSaved(BugId),
}

#[derive(Debug, Default)]
struct TrackerState {
    bugs: HashMap<BugId, Vec<BugTask>>,
    persons: HashMap<String, Person>,
    user: Option<Person>,
    private: HashSet<BugId>,
    mutations: Vec<Mutation>,
}

/// Thread-safe in-memory bug tracker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTracker {
    state: Arc<RwLock<TrackerState>>,
}

impl InMemoryTracker {
    /// Creates an empty tracker with no authenticated user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the authenticated caller identity.
    #[must_use]
    pub fn with_authenticated_user(self, user: Person) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.persons.insert(user.name().to_owned(), user.clone());
            state.user = Some(user);
        }
        self
    }

    /// Seeds a resolvable person.
    #[must_use]
    pub fn with_person(self, person: Person) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.persons.insert(person.name().to_owned(), person);
        }
        self
    }

    /// Seeds a bug with its tasks.
    #[must_use]
    pub fn with_bug(self, bug: &Bug) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.bugs.insert(bug.id(), bug.tasks().to_vec());
        }
        self
    }

    /// Marks a bug as private so lookups fail with an authorization error.
    #[must_use]
    pub fn with_private_bug(self, id: BugId) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.private.insert(id);
        }
        self
    }

    /// Returns the mutating calls observed so far, in order.
    #[must_use]
    pub fn mutations(&self) -> Vec<Mutation> {
        self.state
            .read()
            .map(|state| state.mutations.clone())
            .unwrap_or_default()
    }

    /// Returns the current tasks of a bug, if the bug exists.
    #[must_use]
    pub fn tasks_of(&self, id: BugId) -> Option<Vec<BugTask>> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.bugs.get(&id).cloned())
    }

    fn lock_write(&self) -> TrackerResult<std::sync::RwLockWriteGuard<'_, TrackerState>> {
        self.state
            .write()
            .map_err(|err| TrackerError::transport(std::io::Error::other(err.to_string())))
    }

    fn lock_read(&self) -> TrackerResult<std::sync::RwLockReadGuard<'_, TrackerState>> {
        self.state
            .read()
            .map_err(|err| TrackerError::transport(std::io::Error::other(err.to_string())))
    }
}

fn replace_status(task: &BugTask, status: TaskStatus) -> BugTask {
    let mut rebuilt = BugTask::new(
        task.link().clone(),
        task.target().clone(),
        status,
        task.importance(),
    );
    if let Some(assignee) = task.assignee() {
        rebuilt = rebuilt.with_assignee(assignee.clone());
    }
    rebuilt
}

#[async_trait]
impl BugTracker for InMemoryTracker {
    async fn authenticated_user(&self) -> TrackerResult<Person> {
        let state = self.lock_read()?;
        state
            .user
            .clone()
            .ok_or_else(|| TrackerError::InvalidValue("no authenticated session".to_owned()))
    }

    async fn person_by_name(&self, name: &str) -> TrackerResult<Option<Person>> {
        let state = self.lock_read()?;
        Ok(state.persons.get(name).cloned())
    }

    async fn bug(&self, id: BugId) -> TrackerResult<Bug> {
        let state = self.lock_read()?;
        if state.private.contains(&id) {
            return Err(TrackerError::Unauthorized(id));
        }
        state
            .bugs
            .get(&id)
            .map(|tasks| Bug::new(id, tasks.clone()))
            .ok_or(TrackerError::BugNotFound(id))
    }

    async fn set_task_status(&self, task: &TaskLink, status: TaskStatus) -> TrackerResult<()> {
        let mut guard = self.lock_write()?;
        let state = &mut *guard;
        for tasks in state.bugs.values_mut() {
            if let Some(found) = tasks.iter_mut().find(|t| t.link() == task) {
                *found = replace_status(found, status);
                state.mutations.push(Mutation::StatusSet {
                    task: task.clone(),
                    status,
                });
                return Ok(());
            }
        }
        Err(TrackerError::TaskNotFound(task.clone()))
    }

    async fn create_task(&self, bug: BugId, task: &NewTask) -> TrackerResult<()> {
        let mut guard = self.lock_write()?;
        let state = &mut *guard;
        let tasks = state
            .bugs
            .get_mut(&bug)
            .ok_or(TrackerError::BugNotFound(bug))?;

        let duplicate = tasks.iter().any(|existing| {
            existing.target().package() == task.package()
                && existing.target().series() == Some(task.series())
        });
        if duplicate {
            return Err(TrackerError::TaskAlreadyExists {
                bug,
                package: task.package().clone(),
                series: task.series().clone(),
            });
        }

        let target = TaskTarget::SeriesBound {
            package: task.package().clone(),
            series: task.series().clone(),
        };
        let link = TaskLink::new(format!(
            "memory:/bugs/{bug}/{}/{}",
            task.series(),
            task.package()
        ));
        tasks.push(
            BugTask::new(link, target.clone(), task.status(), task.importance())
                .with_assignee(task.assignee().clone()),
        );
        state
            .mutations
            .push(Mutation::TaskCreated { bug, target });
        Ok(())
    }

    async fn save_bug(&self, id: BugId) -> TrackerResult<()> {
        let mut state = self.lock_write()?;
        if !state.bugs.contains_key(&id) {
            return Err(TrackerError::BugNotFound(id));
        }
        state.mutations.push(Mutation::BugSaved(id));
        Ok(())
    }
}
