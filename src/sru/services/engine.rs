//! Per-bug task creation engine.
//!
//! Walks a bug's existing tasks, skips nominated placeholders, optionally
//! realigns the development-release task's status, and creates one new task
//! per requested stable release from the series-bound template, idempotently.

use crate::sru::domain::{
    Bug, BugId, BugTask, Importance, PackageName, Person, SeriesName, TaskStatus, TaskTarget,
};
use crate::sru::ports::{BugTracker, NewTask, TrackerError, TrackerResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Behaviour knobs for one engine run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Stable releases to create tasks for.
    pub releases: Vec<SeriesName>,
    /// Status assigned to each newly created task.
    pub stable_status: TaskStatus,
    /// When set, realign the development task's status to this value.
    pub dev_status: Option<TaskStatus>,
    /// When set, log every decision but issue no mutating call.
    pub dry_run: bool,
}

/// What happened while processing one bug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugOutcome {
    /// Tasks created (or, in dry-run, that would have been created).
    pub created: Vec<(PackageName, SeriesName)>,
    /// Creations skipped because the target already had a task.
    pub already_present: Vec<(PackageName, SeriesName)>,
    /// Development-task status updates performed (or dry-run announced).
    pub dev_updates: usize,
    /// Nominated tasks that were skipped untouched.
    pub nominated_skipped: usize,
}

/// Engine creating stable-release tasks for a single bug at a time.
#[derive(Clone)]
pub struct TaskCreationEngine<T>
where
    T: BugTracker,
{
    tracker: Arc<T>,
    assignee: Person,
    config: EngineConfig,
}

impl<T> TaskCreationEngine<T>
where
    T: BugTracker,
{
    /// Creates an engine with a resolved assignee and run configuration.
    #[must_use]
    pub const fn new(tracker: Arc<T>, assignee: Person, config: EngineConfig) -> Self {
        Self {
            tracker,
            assignee,
            config,
        }
    }

    /// Returns the run configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes one bug: template classification, optional dev-status
    /// realignment, per-release creation, final bug save.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] on lookup failure or on any creation error
    /// other than the target already having a task.
    pub async fn process_bug(&self, id: BugId) -> TrackerResult<BugOutcome> {
        let bug = self.tracker.bug(id).await?;
        let mut outcome = BugOutcome::default();

        for task in bug.tasks() {
            match task.target() {
                TaskTarget::Generic { package } => {
                    debug!(bug = %id, %package, "skipping nominated task");
                    outcome.nominated_skipped += 1;
                }
                TaskTarget::SeriesBound { package, series } => {
                    debug!(bug = %id, %package, %series, "using development task as template");
                    self.align_dev_status(&bug, task, &mut outcome).await?;
                    self.create_stable_tasks(&bug, task.importance(), package, &mut outcome)
                        .await?;
                }
            }
        }

        if self.config.dry_run {
            info!(bug = %id, "(dry-run) would save bug");
        } else {
            self.tracker.save_bug(id).await?;
        }
        Ok(outcome)
    }

    /// Realigns the development task's status when requested and different.
    async fn align_dev_status(
        &self,
        bug: &Bug,
        task: &BugTask,
        outcome: &mut BugOutcome,
    ) -> TrackerResult<()> {
        let Some(dev_status) = self.config.dev_status else {
            return Ok(());
        };
        if task.status() == dev_status {
            return Ok(());
        }
        if self.config.dry_run {
            info!(
                bug = %bug.id(),
                target = %task.target(),
                from = %task.status(),
                to = %dev_status,
                "(dry-run) would update development task status"
            );
        } else {
            self.tracker.set_task_status(task.link(), dev_status).await?;
            info!(
                bug = %bug.id(),
                target = %task.target(),
                to = %dev_status,
                "updated development task status"
            );
        }
        outcome.dev_updates += 1;
        Ok(())
    }

    /// Creates one task per requested release, skipping existing targets.
    ///
    /// Importance comes from the template snapshot taken at fetch time, so a
    /// same-run development-status update cannot change what is copied.
    async fn create_stable_tasks(
        &self,
        bug: &Bug,
        importance: Importance,
        package: &PackageName,
        outcome: &mut BugOutcome,
    ) -> TrackerResult<()> {
        for release in &self.config.releases {
            let new_task = NewTask::new(
                package.clone(),
                release.clone(),
                self.assignee.clone(),
                self.config.stable_status,
                importance,
            );

            if self.config.dry_run {
                // The fetch-time snapshot already tells us whether the
                // target is taken, so the log matches what a real run would
                // decide without issuing the creation call.
                let pair = (package.clone(), release.clone());
                if release_already_tasked(bug, package, release)
                    || outcome.created.contains(&pair)
                {
                    info!(
                        bug = %bug.id(),
                        %package,
                        series = %release,
                        "task already exists, skipping"
                    );
                    outcome.already_present.push(pair);
                } else {
                    info!(
                        bug = %bug.id(),
                        %package,
                        series = %release,
                        status = %new_task.status(),
                        %importance,
                        assignee = %self.assignee,
                        "(dry-run) would create task"
                    );
                    outcome.created.push(pair);
                }
                continue;
            }

            match self.tracker.create_task(bug.id(), &new_task).await {
                Ok(()) => {
                    info!(
                        bug = %bug.id(),
                        %package,
                        series = %release,
                        status = %new_task.status(),
                        %importance,
                        assignee = %self.assignee,
                        "created task"
                    );
                    outcome.created.push((package.clone(), release.clone()));
                }
                Err(TrackerError::TaskAlreadyExists { .. }) => {
                    info!(
                        bug = %bug.id(),
                        %package,
                        series = %release,
                        "task already exists, skipping"
                    );
                    outcome
                        .already_present
                        .push((package.clone(), release.clone()));
                }
                Err(other) => return Err(other),
            }
        }
        Ok(())
    }
}

/// Whether the bug snapshot already carries a task bound to this target.
fn release_already_tasked(bug: &Bug, package: &PackageName, series: &SeriesName) -> bool {
    bug.tasks().iter().any(|task| {
        matches!(
            task.target(),
            TaskTarget::SeriesBound { package: existing, series: bound }
                if existing == package && bound == series
        )
    })
}
