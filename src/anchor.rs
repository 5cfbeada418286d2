//! In-page anchor routing.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What an anchor's `href` points at, read fresh at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// The bare `#` placeholder. Default navigation is suppressed and
    /// nothing else happens.
    Placeholder,
    /// A fragment naming an element id.
    Fragment(&'a str),
    /// Not an in-page reference at all.
    External,
}

/// Classify an anchor `href`.
#[must_use]
pub fn classify(href: &str) -> AnchorTarget<'_> {
    match href.strip_prefix('#') {
        Some("") => AnchorTarget::Placeholder,
        Some(id) => AnchorTarget::Fragment(id),
        None => AnchorTarget::External,
    }
}

/// Scroll offset that puts `target_top` just below a fixed header of the
/// given height. Negative results are left for the viewport to clamp.
#[must_use]
pub fn scroll_target(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}
