//! Engine scenario tests covering classification, idempotence, and dry-run.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use crate::sru::{
    adapters::memory::{InMemoryTracker, Mutation},
    domain::{
        Bug, BugId, BugTask, Importance, PackageName, Person, SeriesName, TaskLink, TaskStatus,
        TaskTarget,
    },
    ports::{BugTracker, TrackerError, TrackerResult},
    services::{AssigneeError, EngineConfig, TaskCreationEngine, resolve_assignee},
};
use async_trait::async_trait;
use rstest::{fixture, rstest};

fn package(name: &str) -> PackageName {
    PackageName::new(name).expect("valid package name")
}

fn series(name: &str) -> SeriesName {
    SeriesName::new(name).expect("valid codename")
}

fn dev_task(pkg: &str, dev_series: &str, status: TaskStatus, importance: Importance) -> BugTask {
    BugTask::new(
        TaskLink::new(format!("memory:/tasks/{dev_series}/{pkg}")),
        TaskTarget::SeriesBound {
            package: package(pkg),
            series: series(dev_series),
        },
        status,
        importance,
    )
}

fn nominated_task(pkg: &str, status: TaskStatus, importance: Importance) -> BugTask {
    BugTask::new(
        TaskLink::new(format!("memory:/tasks/{pkg}")),
        TaskTarget::Generic { package: package(pkg) },
        status,
        importance,
    )
}

#[fixture]
fn caller() -> Person {
    Person::new("sru-dev").expect("valid person")
}

fn config(releases: &[&str], dev_status: Option<TaskStatus>, dry_run: bool) -> EngineConfig {
    EngineConfig {
        releases: releases.iter().map(|name| series(name)).collect(),
        stable_status: TaskStatus::InProgress,
        dev_status,
        dry_run,
    }
}

fn engine(
    tracker: &InMemoryTracker,
    caller: Person,
    config: EngineConfig,
) -> TaskCreationEngine<InMemoryTracker> {
    TaskCreationEngine::new(Arc::new(tracker.clone()), caller, config)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creates_stable_tasks_from_template_and_realigns_dev_status(caller: Person) {
    let bug_id = BugId::new(12345);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("foo", "jammy", TaskStatus::New, Importance::High)],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(
        &tracker,
        caller.clone(),
        config(&["groovy", "focal"], Some(TaskStatus::FixReleased), false),
    );

    let outcome = engine.process_bug(bug_id).await.expect("bug processes");

    assert_eq!(outcome.dev_updates, 1);
    assert_eq!(
        outcome.created,
        vec![
            (package("foo"), series("groovy")),
            (package("foo"), series("focal")),
        ]
    );

    let tasks = tracker.tasks_of(bug_id).expect("bug still present");
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].status(), TaskStatus::FixReleased);
    for created in &tasks[1..] {
        assert_eq!(created.status(), TaskStatus::InProgress);
        assert_eq!(created.importance(), Importance::High);
        assert_eq!(created.assignee().map(Person::name), Some("sru-dev"));
    }

    let mutations = tracker.mutations();
    assert_eq!(mutations.len(), 4);
    assert!(matches!(mutations[0], Mutation::StatusSet { .. }));
    assert!(matches!(mutations[3], Mutation::BugSaved(id) if id == bug_id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nominated_only_bug_creates_nothing(caller: Person) {
    let bug_id = BugId::new(7);
    let bug = Bug::new(
        bug_id,
        vec![nominated_task("foo", TaskStatus::New, Importance::Medium)],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(
        &tracker,
        caller,
        config(&["focal"], Some(TaskStatus::FixReleased), false),
    );

    let outcome = engine.process_bug(bug_id).await.expect("bug processes");

    assert_eq!(outcome.nominated_skipped, 1);
    assert_eq!(outcome.dev_updates, 0);
    assert!(outcome.created.is_empty());
    // Only the final bug save touches the service.
    assert_eq!(tracker.mutations(), vec![Mutation::BugSaved(bug_id)]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_run_skips_existing_tasks_without_error(caller: Person) {
    let bug_id = BugId::new(42);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("foo", "jammy", TaskStatus::Triaged, Importance::Low)],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(&tracker, caller, config(&["groovy", "focal"], None, false));

    engine.process_bug(bug_id).await.expect("first run");
    let second = engine.process_bug(bug_id).await.expect("second run");

    // The second run sees three series-bound tasks, each treated as a
    // template; every (template, release) pair already exists.
    assert!(second.created.is_empty());
    assert!(
        second
            .already_present
            .iter()
            .all(|(pkg, _)| pkg == &package("foo"))
    );
    let tasks = tracker.tasks_of(bug_id).expect("bug still present");
    assert_eq!(tasks.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dry_run_issues_no_mutating_calls(caller: Person) {
    let bug_id = BugId::new(99);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("bar", "jammy", TaskStatus::New, Importance::Critical)],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(
        &tracker,
        caller,
        config(&["groovy", "focal"], Some(TaskStatus::FixCommitted), true),
    );

    let outcome = engine.process_bug(bug_id).await.expect("dry run processes");

    // Same decisions as a real run, zero mutations issued.
    assert_eq!(outcome.dev_updates, 1);
    assert_eq!(outcome.created.len(), 2);
    assert!(tracker.mutations().is_empty());
    let tasks = tracker.tasks_of(bug_id).expect("bug still present");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].status(), TaskStatus::New);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dry_run_reports_existing_targets_as_already_present(caller: Person) {
    let bug_id = BugId::new(65);
    let bug = Bug::new(
        bug_id,
        vec![
            dev_task("foo", "jammy", TaskStatus::New, Importance::High),
            dev_task("foo", "focal", TaskStatus::InProgress, Importance::High),
        ],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(&tracker, caller, config(&["focal"], None, true));

    let outcome = engine.process_bug(bug_id).await.expect("dry run processes");

    // Both series-bound templates see focal already carrying a task, so the
    // dry run reports the same skip a real run would.
    assert!(outcome.created.is_empty());
    assert_eq!(outcome.already_present.len(), 2);
    assert!(
        outcome
            .already_present
            .iter()
            .all(|pair| pair == &(package("foo"), series("focal")))
    );
    assert!(tracker.mutations().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dry_run_counts_a_target_planned_by_an_earlier_template_only_once(caller: Person) {
    let bug_id = BugId::new(66);
    let bug = Bug::new(
        bug_id,
        vec![
            dev_task("foo", "jammy", TaskStatus::New, Importance::High),
            dev_task("foo", "groovy", TaskStatus::New, Importance::High),
        ],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(&tracker, caller, config(&["focal"], None, true));

    let outcome = engine.process_bug(bug_id).await.expect("dry run processes");

    // The first template plans the focal creation; the second sees it taken,
    // just as the service would answer a real second creation call.
    assert_eq!(outcome.created, vec![(package("foo"), series("focal"))]);
    assert_eq!(
        outcome.already_present,
        vec![(package("foo"), series("focal"))]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn importance_is_copied_from_template_despite_same_run_status_update(caller: Person) {
    let bug_id = BugId::new(55);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("baz", "jammy", TaskStatus::New, Importance::Wishlist)],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(
        &tracker,
        caller,
        config(&["focal"], Some(TaskStatus::FixReleased), false),
    );

    engine.process_bug(bug_id).await.expect("bug processes");

    let tasks = tracker.tasks_of(bug_id).expect("bug still present");
    let created = tasks
        .iter()
        .find(|task| task.target().series().map(SeriesName::as_str) == Some("focal"))
        .expect("created task present");
    assert_eq!(created.importance(), Importance::Wishlist);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dev_status_already_matching_is_left_alone(caller: Person) {
    let bug_id = BugId::new(60);
    let bug = Bug::new(
        bug_id,
        vec![dev_task(
            "foo",
            "jammy",
            TaskStatus::FixReleased,
            Importance::High,
        )],
    );
    let tracker = InMemoryTracker::new().with_bug(&bug);
    let engine = engine(
        &tracker,
        caller,
        config(&["focal"], Some(TaskStatus::FixReleased), false),
    );

    let outcome = engine.process_bug(bug_id).await.expect("bug processes");

    assert_eq!(outcome.dev_updates, 0);
    assert!(
        !tracker
            .mutations()
            .iter()
            .any(|m| matches!(m, Mutation::StatusSet { .. }))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_assignee_fails_before_any_bug_is_touched(caller: Person) {
    let bug_id = BugId::new(70);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("foo", "jammy", TaskStatus::New, Importance::High)],
    );
    let tracker = InMemoryTracker::new()
        .with_authenticated_user(caller)
        .with_bug(&bug);

    let err = resolve_assignee(&tracker, Some("nobody"))
        .await
        .expect_err("unknown name must fail");

    assert!(matches!(err, AssigneeError::Unknown(ref name) if name == "nobody"));
    assert!(tracker.mutations().is_empty());
    let tasks = tracker.tasks_of(bug_id).expect("bug untouched");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn named_assignee_resolves_when_present(caller: Person) {
    let tracker = InMemoryTracker::new().with_person(caller);
    let assignee = resolve_assignee(&tracker, Some("sru-dev"))
        .await
        .expect("named person resolves");
    assert_eq!(assignee.name(), "sru-dev");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_defaults_to_the_authenticated_caller(caller: Person) {
    let tracker = InMemoryTracker::new().with_authenticated_user(caller);
    let assignee = resolve_assignee(&tracker, None)
        .await
        .expect("caller resolves");
    assert_eq!(assignee.name(), "sru-dev");
}

/// Tracker whose task creation always fails with a non-recoverable error.
#[derive(Debug, Clone)]
struct FailingCreateTracker {
    inner: InMemoryTracker,
}

#[async_trait]
impl BugTracker for FailingCreateTracker {
    async fn authenticated_user(&self) -> TrackerResult<Person> {
        self.inner.authenticated_user().await
    }

    async fn person_by_name(&self, name: &str) -> TrackerResult<Option<Person>> {
        self.inner.person_by_name(name).await
    }

    async fn bug(&self, id: BugId) -> TrackerResult<Bug> {
        self.inner.bug(id).await
    }

    async fn set_task_status(
        &self,
        task: &TaskLink,
        status: TaskStatus,
    ) -> TrackerResult<()> {
        self.inner.set_task_status(task, status).await
    }

    async fn create_task(
        &self,
        _bug: BugId,
        _task: &crate::sru::ports::NewTask,
    ) -> TrackerResult<()> {
        Err(TrackerError::transport(std::io::Error::other(
            "connection reset",
        )))
    }

    async fn save_bug(&self, id: BugId) -> TrackerResult<()> {
        self.inner.save_bug(id).await
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unclassified_creation_error_propagates(caller: Person) {
    let bug_id = BugId::new(61);
    let bug = Bug::new(
        bug_id,
        vec![dev_task("foo", "jammy", TaskStatus::New, Importance::High)],
    );
    let tracker = FailingCreateTracker {
        inner: InMemoryTracker::new().with_bug(&bug),
    };
    let engine = TaskCreationEngine::new(
        Arc::new(tracker),
        caller,
        config(&["focal"], None, false),
    );

    let result = engine.process_bug(bug_id).await;

    assert!(matches!(result, Err(TrackerError::Transport(_))));
}
