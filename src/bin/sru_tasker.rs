//! Command-line entry point for the SRU task creator.
//!
//! Parses arguments, validates the requested releases against the local
//! release database before any network activity, establishes the
//! authenticated session from the cached credential store, resolves the
//! assignee, and drives the batch over the given bugs. Exits non-zero when
//! the assignee cannot be resolved or any bug fails.

use clap::Parser;
use mockable::DefaultClock;
use sru_tasker::cli::{Cli, CliError};
use sru_tasker::sru::adapters::distro_info::{
    DEFAULT_DATABASE_PATH, DistroInfoDb, DistroInfoError,
};
use sru_tasker::sru::adapters::launchpad::{CredentialError, Credentials, LaunchpadTracker};
use sru_tasker::sru::ports::TrackerError;
use sru_tasker::sru::services::{
    AssigneeError, BatchDriver, EngineConfig, TaskCreationEngine, resolve_assignee,
};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Errors that abort the run before or outside per-bug processing.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Arguments(#[from] CliError),
    #[error(transparent)]
    Releases(#[from] DistroInfoError),
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error(transparent)]
    Assignee(#[from] AssigneeError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, AppError> {
    let clock = Arc::new(DefaultClock);
    let directory = DistroInfoDb::from_path(DEFAULT_DATABASE_PATH, &*clock)?;
    let releases = cli.resolve_releases(&directory)?;

    let credentials = Credentials::load_default()?;
    let tracker = Arc::new(LaunchpadTracker::production(credentials, Arc::clone(&clock)));

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)?;

    runtime.block_on(async {
        let assignee = resolve_assignee(tracker.as_ref(), cli.assign.as_deref()).await?;
        let config = EngineConfig {
            releases,
            stable_status: cli.stable_release_status.into(),
            dev_status: cli.dev_release_status.map(Into::into),
            dry_run: cli.dry_run,
        };
        let engine = TaskCreationEngine::new(Arc::clone(&tracker), assignee, config);
        let report = BatchDriver::new(engine).run(&cli.bug_ids()).await?;
        Ok(report.all_succeeded())
    })
}
