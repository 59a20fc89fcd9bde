//! Tests for resolving screen sizes into media queries.
//!
//! These tests verify that:
//! - Every screen-size token resolves to an ascending range
//! - Strict queries keep one bound and reject unknown tokens
//! - The lenient query falls back to the literal input
//! - Queries built twice are equal and independent

use responsive_css_test::prelude::*;

// ============================================================================
// Resolution
// ============================================================================

#[test]
#[allow(deprecated)]
fn every_token_resolves_to_an_ascending_range() {
    let bp = sample_breakpoints();
    let tokens = [
        ScreenSize::Small,
        ScreenSize::SmallAndMedium,
        ScreenSize::Medium,
        ScreenSize::MediumAndLarge,
        ScreenSize::Large,
        ScreenSize::XLarge,
        ScreenSize::Max,
    ];
    for screen in tokens {
        let range = resolve_screen_breakpoints(screen, &bp).unwrap();
        if let (Some(min), Some(max)) = (range.min, range.max) {
            assert!(min < max, "{screen}");
        }
        assert!(build_query_string(range).is_ok(), "{screen}");
    }
}

#[test]
fn unknown_token_resolves_to_nothing() {
    assert_eq!(
        resolve_screen_breakpoints("bogus-token", &sample_breakpoints()),
        None
    );
}

// ============================================================================
// Strict queries
// ============================================================================

#[test]
fn up_to_medium() {
    let query = sample_breakpoints().query_up_to("medium").unwrap();
    assert_eq!(query.condition(), "(max-width: 767px)");
}

#[test]
fn from_large() {
    let query = sample_breakpoints().query_from("large").unwrap();
    assert_eq!(query.condition(), "(min-width: 1200px)");
}

#[test]
fn up_to_unknown_token_fails() {
    let err = sample_breakpoints().query_up_to("bogus-token").unwrap_err();
    assert!(matches!(err, Error::InvalidScreenSize(ref token) if token == "bogus-token"));
    assert_eq!(err.to_string(), "invalid screen size `bogus-token`");
}

#[test]
fn from_unknown_token_fails() {
    assert!(matches!(
        sample_breakpoints().query_from("huge"),
        Err(Error::InvalidScreenSize(_))
    ));
}

// ============================================================================
// Lenient queries
// ============================================================================

#[test]
fn to_known_token_uses_both_bounds() {
    let query = sample_breakpoints().query_to(ScreenSize::XLarge).unwrap();
    assert_eq!(
        query.condition(),
        "(min-width: 1440px) and (max-width: 1919px)"
    );
}

#[test]
fn to_unknown_token_is_literal() {
    let query = sample_breakpoints().query_to("bogus-token").unwrap();
    assert_eq!(query.condition(), "bogus-token");
    assert_eq!(
        query.css("color: red;").as_str(),
        "@media bogus-token {\n  color: red;\n}"
    );
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn queries_are_independent_values() {
    let bp = sample_breakpoints();
    let first = bp.query_to("medium").unwrap();
    let second = bp.query_to("medium").unwrap();
    assert_eq!(first, second);

    let a = first.css(css!("margin: {}px;", 8));
    let b = second.css(css!("margin: {}px;", 8));
    assert_eq!(a, b);

    // Applying does not consume or change the query.
    let again = first.css("margin: 8px;");
    assert_eq!(again, a);
    assert_eq!(first.condition(), second.condition());
}

#[test]
fn wrap_literal_condition() {
    let query = wrap_in_media_query("(orientation: portrait)");
    let block = query.css(Css::new("flex-direction: column;").apply("gap: 4px;"));
    assert_eq!(
        block.to_string(),
        "@media (orientation: portrait) {\n  flex-direction: column;\n  gap: 4px;\n}"
    );
}

#[test]
fn media_query_table() {
    let queries = media_queries(&sample_breakpoints());
    let rendered: Vec<_> = queries
        .iter()
        .map(|(screen, query)| format!("{screen}: {query}"))
        .collect();
    assert_eq!(
        rendered,
        [
            "small: (max-width: 767px)",
            "medium: (min-width: 768px) and (max-width: 1199px)",
            "large: (min-width: 1200px) and (max-width: 1439px)",
            "xLarge: (min-width: 1440px) and (max-width: 1919px)",
            "max: (min-width: 1920px)",
        ]
    );
}
