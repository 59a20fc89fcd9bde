//! Tests for deprecated screen sizes.
//!
//! These tests verify that:
//! - Deprecated tokens still resolve to their old ranges
//! - Every use logs a warning naming the replacement query
//! - Uses with no subscriber installed do not swallow later warnings

use responsive_css_test::prelude::*;

#[test]
#[allow(deprecated)]
fn deprecated_tokens_warn_on_every_use() {
    let bp = sample_breakpoints();

    let (queries, logs) = capture_logs(|| {
        [
            bp.query_to("smallAndMedium").unwrap(),
            bp.query_to("smallAndMedium").unwrap(),
            bp.query_to(ScreenSize::MediumAndLarge).unwrap(),
        ]
    });

    assert_eq!(queries[0].condition(), "(max-width: 1199px)");
    assert_eq!(queries[0], queries[1]);
    assert_eq!(queries[2].condition(), "(min-width: 768px)");

    assert_eq!(logs.matches("WARN").count(), 3, "{logs}");
    assert!(logs.contains(
        "'smallAndMedium' screen size has been deprecated. \
         Please, use 'query_up_to(\"medium\")'."
    ));
    assert!(logs.contains(
        "'mediumAndLarge' screen size has been deprecated. \
         Please, use 'query_from(\"medium\")'."
    ));
    assert!(!logs.contains("since"), "{logs}");
}

#[test]
fn warning_reaches_subscriber_installed_later() {
    let bp = sample_breakpoints();

    // Nothing is listening yet.
    bp.query_to("smallAndMedium").unwrap();

    let (_, logs) = capture_logs(|| bp.query_to("smallAndMedium").unwrap());
    assert_eq!(logs.matches("WARN").count(), 1, "{logs}");
    assert!(logs.contains("'smallAndMedium' screen size has been deprecated"));
}

#[test]
fn current_tokens_do_not_warn() {
    let bp = sample_breakpoints();
    let (_, logs) = capture_logs(|| {
        for screen in ScreenSize::CURRENT {
            bp.query_to(screen).unwrap();
        }
    });
    assert!(!logs.contains("WARN"), "{logs}");
}
