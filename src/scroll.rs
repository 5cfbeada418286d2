//! Active-section tracking and header elevation.
//!
//! Section geometry is re-measured by the host on every scroll event because
//! layout can change between events; this module only decides which section
//! the offset lands in and whether the header shadow changes.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_ELEVATION_PX, SECTION_PROBE_OFFSET_PX};

/// Document-relative geometry for one tracked section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    /// Distance from the document top to the section's top edge.
    pub top: f64,
    /// The section's rendered height.
    pub height: f64,
}

impl SectionSpan {
    /// Whether the scroll offset falls inside this section's trigger window.
    /// The window opens just past `top` minus the probe offset (exclusive)
    /// and runs through the window's bottom edge (inclusive).
    fn contains(self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_PROBE_OFFSET_PX;
        scroll_y > start && scroll_y <= start + self.height
    }
}

/// Index of the section whose trigger window contains the offset.
/// Overlapping windows resolve to the last match in document order.
#[must_use]
pub fn matching_section(scroll_y: f64, spans: &[SectionSpan]) -> Option<usize> {
    spans.iter().rposition(|span| span.contains(scroll_y))
}

/// Scroll-derived state: the highlighted section and the header shadow.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    active: Option<usize>,
    elevated: Option<bool>,
}

impl ScrollState {
    /// Update the active section. Reports the newly active index only when
    /// it changes; when no trigger window matches, the previous section
    /// stays active rather than clearing the highlight.
    pub fn update_active(&mut self, scroll_y: f64, spans: &[SectionSpan]) -> Option<usize> {
        let matched = matching_section(scroll_y, spans)?;
        if self.active == Some(matched) {
            return None;
        }
        self.active = Some(matched);
        Some(matched)
    }

    /// Update header elevation. Reports the flag when it changes; the first
    /// call always reports so the host writes an initial shadow.
    pub fn update_elevation(&mut self, scroll_y: f64) -> Option<bool> {
        let elevated = scroll_y > HEADER_ELEVATION_PX;
        if self.elevated == Some(elevated) {
            return None;
        }
        self.elevated = Some(elevated);
        Some(elevated)
    }

    /// Currently active section index, if any.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}
