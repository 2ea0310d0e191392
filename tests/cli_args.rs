//! Argument parsing and pre-network validation tests.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use clap::Parser;
use mockall::mock;
use sru_tasker::cli::{Cli, CliError, StatusArg};
use sru_tasker::sru::adapters::distro_info::StaticDirectory;
use sru_tasker::sru::domain::{BugId, SeriesName, TaskStatus};
use sru_tasker::sru::ports::ReleaseDirectory;

fn series(name: &str) -> SeriesName {
    SeriesName::new(name).expect("valid codename")
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments parse")
}

#[test]
fn full_invocation_parses() {
    let cli = parse(&[
        "sru-tasker",
        "--release",
        "groovy",
        "--release",
        "focal",
        "--dev-release-status",
        "FIXRELEASED",
        "--assign",
        "alice",
        "12345",
        "67890",
    ]);

    assert_eq!(cli.release, vec!["groovy", "focal"]);
    assert_eq!(cli.dev_release_status, Some(StatusArg::FixReleased));
    assert_eq!(cli.assign.as_deref(), Some("alice"));
    assert_eq!(cli.bug_ids(), vec![BugId::new(12345), BugId::new(67890)]);
    assert!(!cli.dry_run);
}

#[test]
fn stable_status_defaults_to_in_progress() {
    let cli = parse(&["sru-tasker", "-r", "focal", "1"]);
    assert_eq!(cli.stable_release_status, StatusArg::InProgress);
    assert_eq!(
        TaskStatus::from(cli.stable_release_status),
        TaskStatus::InProgress
    );
}

#[test]
fn short_flags_parse() {
    let cli = parse(&[
        "sru-tasker",
        "-r",
        "focal",
        "-d",
        "FIXCOMMITTED",
        "-s",
        "FIXRELEASED",
        "-a",
        "bob",
        "-n",
        "7",
    ]);
    assert_eq!(cli.dev_release_status, Some(StatusArg::FixCommitted));
    assert_eq!(cli.stable_release_status, StatusArg::FixReleased);
    assert!(cli.dry_run);
}

#[test]
fn no_act_alias_enables_dry_run() {
    let cli = parse(&["sru-tasker", "-r", "focal", "--no-act", "7"]);
    assert!(cli.dry_run);
}

#[test]
fn release_is_required() {
    assert!(Cli::try_parse_from(["sru-tasker", "7"]).is_err());
}

#[test]
fn at_least_one_bug_is_required() {
    assert!(Cli::try_parse_from(["sru-tasker", "-r", "focal"]).is_err());
}

#[test]
fn unknown_status_value_is_rejected_at_parse_time() {
    assert!(Cli::try_parse_from(["sru-tasker", "-r", "focal", "-d", "CONFIRMED", "7"]).is_err());
}

#[test]
fn releases_resolve_against_the_supported_set() {
    let cli = parse(&["sru-tasker", "-r", "focal", "-r", "groovy", "7"]);
    let directory = StaticDirectory::new([series("focal"), series("groovy")]);

    let releases = cli
        .resolve_releases(&directory)
        .expect("supported releases resolve");

    assert_eq!(releases, vec![series("focal"), series("groovy")]);
}

#[test]
fn unsupported_release_is_rejected_before_any_network_call() {
    let cli = parse(&["sru-tasker", "-r", "warty", "7"]);
    let directory = StaticDirectory::new([series("focal")]);

    let err = cli
        .resolve_releases(&directory)
        .expect_err("unsupported release must fail");

    match err {
        CliError::UnsupportedRelease { name, supported } => {
            assert_eq!(name, "warty");
            assert!(supported.contains("focal"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_release_name_is_rejected() {
    let cli = parse(&["sru-tasker", "-r", "not a codename", "7"]);
    let directory = StaticDirectory::new([series("focal")]);

    assert!(matches!(
        cli.resolve_releases(&directory),
        Err(CliError::InvalidSeries(_))
    ));
}

mock! {
    Directory {}

    impl ReleaseDirectory for Directory {
        fn supported(&self) -> Vec<SeriesName>;
    }
}

#[test]
fn directory_is_consulted_once_per_resolution() {
    let cli = parse(&["sru-tasker", "-r", "focal", "7"]);
    let mut directory = MockDirectory::new();
    directory
        .expect_supported()
        .times(1)
        .returning(|| vec![SeriesName::new("focal").expect("valid codename")]);

    let releases = cli
        .resolve_releases(&directory)
        .expect("supported release resolves");

    assert_eq!(releases, vec![series("focal")]);
}

#[test]
fn log_filter_tracks_flags() {
    assert_eq!(parse(&["sru-tasker", "-r", "focal", "7"]).log_filter(), "warn");
    assert_eq!(
        parse(&["sru-tasker", "-r", "focal", "-n", "7"]).log_filter(),
        "info"
    );
    assert_eq!(
        parse(&["sru-tasker", "-r", "focal", "--debug", "7"]).log_filter(),
        "debug"
    );
}
