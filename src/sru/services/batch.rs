//! Sequential batch driver over a list of bugs.

use super::engine::{BugOutcome, TaskCreationEngine};
use crate::sru::domain::BugId;
use crate::sru::ports::{BugTracker, TrackerError, TrackerResult};
use tracing::error;

/// One bug that failed with a recoverable error.
#[derive(Debug, Clone)]
pub struct BugFailure {
    /// Bug that failed.
    pub bug: BugId,
    /// Error it failed with.
    pub error: TrackerError,
}

/// Aggregate result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Vec<(BugId, BugOutcome)>,
    failures: Vec<BugFailure>,
}

impl RunReport {
    /// Returns per-bug outcomes for bugs that completed.
    #[must_use]
    pub fn outcomes(&self) -> &[(BugId, BugOutcome)] {
        &self.outcomes
    }

    /// Returns per-bug recoverable failures.
    #[must_use]
    pub fn failures(&self) -> &[BugFailure] {
        &self.failures
    }

    /// Returns `true` when no bug failed.
    ///
    /// The process exit code reflects any failure in the batch, not only
    /// the last bug's outcome.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives the engine over each bug in turn, isolating recoverable failures.
#[derive(Clone)]
pub struct BatchDriver<T>
where
    T: BugTracker,
{
    engine: TaskCreationEngine<T>,
}

impl<T> BatchDriver<T>
where
    T: BugTracker,
{
    /// Creates a driver around a configured engine.
    #[must_use]
    pub const fn new(engine: TaskCreationEngine<T>) -> Self {
        Self { engine }
    }

    /// Processes the bugs sequentially.
    ///
    /// A recoverable per-bug error (missing, private, uninterpretable
    /// value) is logged and recorded; the remaining bugs still run.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] on any non-recoverable error, aborting the
    /// rest of the batch.
    pub async fn run(&self, bugs: &[BugId]) -> TrackerResult<RunReport> {
        let mut report = RunReport::default();
        for &bug in bugs {
            match self.engine.process_bug(bug).await {
                Ok(outcome) => report.outcomes.push((bug, outcome)),
                Err(err) if err.is_recoverable_per_bug() => {
                    error!(%bug, error = %err, "could not process bug");
                    report.failures.push(BugFailure { bug, error: err });
                }
                Err(err) => return Err(err),
            }
        }
        Ok(report)
    }
}
