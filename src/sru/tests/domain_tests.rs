//! Domain validation and parsing tests.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::sru::domain::{
    BugId, Importance, PackageName, Person, SeriesName, SruDomainError, TaskStatus, TaskTarget,
};
use rstest::rstest;

#[rstest]
#[case("foo")]
#[case("lib-bar")]
#[case("g++-10")]
#[case("0ad")]
#[case("libstdc++.so")]
fn package_name_accepts_archive_names(#[case] raw: &str) {
    let package = PackageName::new(raw).expect("valid package name");
    assert_eq!(package.as_str(), raw);
}

#[rstest]
#[case("")]
#[case("  ")]
#[case("Foo")]
#[case("-leading-dash")]
#[case("spa ce")]
fn package_name_rejects_invalid_names(#[case] raw: &str) {
    assert!(PackageName::new(raw).is_err());
}

#[test]
fn series_name_normalizes_case_and_whitespace() {
    let series = SeriesName::new("  Focal ").expect("valid codename");
    assert_eq!(series.as_str(), "focal");
}

#[test]
fn series_name_rejects_empty() {
    assert_eq!(SeriesName::new(""), Err(SruDomainError::EmptySeriesName));
}

#[rstest]
#[case("New", TaskStatus::New)]
#[case("in progress", TaskStatus::InProgress)]
#[case("Fix Committed", TaskStatus::FixCommitted)]
#[case("FIX RELEASED", TaskStatus::FixReleased)]
#[case("Won't Fix", TaskStatus::WontFix)]
fn task_status_parses_wire_forms(#[case] raw: &str, #[case] expected: TaskStatus) {
    let status = TaskStatus::try_from(raw).expect("parseable status");
    assert_eq!(status, expected);
}

#[test]
fn task_status_round_trips_through_wire_form() {
    let status = TaskStatus::try_from(TaskStatus::InProgress.as_str()).expect("round trip");
    assert_eq!(status, TaskStatus::InProgress);
}

#[test]
fn task_status_rejects_unknown_value() {
    assert!(TaskStatus::try_from("Escalated").is_err());
}

#[rstest]
#[case("High", Importance::High)]
#[case("wishlist", Importance::Wishlist)]
#[case("Undecided", Importance::Undecided)]
fn importance_parses_wire_forms(#[case] raw: &str, #[case] expected: Importance) {
    let importance = Importance::try_from(raw).expect("parseable importance");
    assert_eq!(importance, expected);
}

#[test]
fn generic_target_is_nominated() {
    let package = PackageName::new("foo").expect("valid package");
    let target = TaskTarget::Generic { package };
    assert!(target.is_nominated());
    assert!(target.series().is_none());
    assert_eq!(target.package().as_str(), "foo");
}

#[test]
fn series_bound_target_is_not_nominated() {
    let target = TaskTarget::SeriesBound {
        package: PackageName::new("foo").expect("valid package"),
        series: SeriesName::new("focal").expect("valid series"),
    };
    assert!(!target.is_nominated());
    assert_eq!(
        target.series().map(SeriesName::as_str),
        Some("focal")
    );
    assert_eq!(target.to_string(), "foo (focal)");
}

#[test]
fn person_rejects_empty_name() {
    assert_eq!(Person::new("  "), Err(SruDomainError::EmptyPersonName));
}

#[test]
fn person_carries_display_name() {
    let person = Person::new("alice")
        .expect("valid person")
        .with_display_name("Alice Example");
    assert_eq!(person.name(), "alice");
    assert_eq!(person.display_name(), Some("Alice Example"));
}

#[test]
fn bug_id_displays_as_plain_number() {
    assert_eq!(BugId::new(12345).to_string(), "12345");
}
