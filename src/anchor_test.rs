#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Href classification
// =============================================================

#[test]
fn fragment_href_yields_the_id() {
    assert_eq!(classify("#contact"), AnchorTarget::Fragment("contact"));
}

#[test]
fn bare_hash_is_the_placeholder() {
    assert_eq!(classify("#"), AnchorTarget::Placeholder);
}

#[test]
fn non_fragment_hrefs_are_external() {
    assert_eq!(classify("https://example.com"), AnchorTarget::External);
    assert_eq!(classify("/about"), AnchorTarget::External);
    assert_eq!(classify(""), AnchorTarget::External);
}

#[test]
fn only_the_leading_hash_is_stripped() {
    assert_eq!(classify("#a#b"), AnchorTarget::Fragment("a#b"));
}

// =============================================================
// Scroll offset arithmetic
// =============================================================

#[test]
fn target_sits_below_the_header() {
    assert_eq!(scroll_target(2000.0, 80.0), 1920.0);
}

#[test]
fn zero_header_scrolls_to_the_element_top() {
    assert_eq!(scroll_target(640.0, 0.0), 640.0);
}

#[test]
fn targets_above_the_header_go_negative() {
    assert_eq!(scroll_target(30.0, 80.0), -50.0);
}
