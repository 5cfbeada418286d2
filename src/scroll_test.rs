use super::*;
use crate::consts::HEADER_ELEVATION_PX;

fn span(top: f64, height: f64) -> SectionSpan {
    SectionSpan { top, height }
}

/// Three sections stacked without gaps, the usual page shape.
fn stacked_page() -> Vec<SectionSpan> {
    vec![span(0.0, 600.0), span(600.0, 800.0), span(1400.0, 500.0)]
}

// =============================================================
// Window matching
// =============================================================

#[test]
fn top_edge_is_exclusive() {
    let spans = [span(200.0, 400.0)];
    // Window opens just past top - probe = 100.
    assert_eq!(matching_section(100.0, &spans), None);
    assert_eq!(matching_section(100.5, &spans), Some(0));
}

#[test]
fn bottom_edge_is_inclusive() {
    let spans = [span(200.0, 400.0)];
    // Window bottom sits at 100 + 400 = 500.
    assert_eq!(matching_section(500.0, &spans), Some(0));
    assert_eq!(matching_section(500.5, &spans), None);
}

#[test]
fn last_match_wins_when_windows_overlap() {
    // A short second section whose window overlaps the first one's tail.
    let spans = [span(0.0, 1000.0), span(550.0, 100.0)];
    assert_eq!(matching_section(500.0, &spans), Some(1));
}

#[test]
fn no_sections_means_no_match() {
    assert_eq!(matching_section(300.0, &[]), None);
}

// =============================================================
// Active-section transitions
// =============================================================

#[test]
fn reports_first_match() {
    let mut state = ScrollState::default();
    assert_eq!(state.update_active(300.0, &stacked_page()), Some(0));
    assert_eq!(state.active(), Some(0));
}

#[test]
fn repeated_match_reports_nothing() {
    let mut state = ScrollState::default();
    let spans = stacked_page();
    state.update_active(300.0, &spans);
    assert_eq!(state.update_active(310.0, &spans), None);
    assert_eq!(state.active(), Some(0));
}

#[test]
fn moving_into_the_next_section_reports_it() {
    let mut state = ScrollState::default();
    let spans = stacked_page();
    state.update_active(300.0, &spans);
    assert_eq!(state.update_active(700.0, &spans), Some(1));
    assert_eq!(state.active(), Some(1));
}

#[test]
fn no_match_retains_previous_active() {
    let mut state = ScrollState::default();
    let spans = [span(300.0, 400.0), span(700.0, 300.0)];
    state.update_active(400.0, &spans);
    assert_eq!(state.active(), Some(0));
    // Offsets above the first window and past the last one both miss;
    // the highlight must not move or clear.
    assert_eq!(state.update_active(0.0, &spans), None);
    assert_eq!(state.update_active(5000.0, &spans), None);
    assert_eq!(state.active(), Some(0));
}

#[test]
fn at_most_one_section_active_across_a_scroll_sweep() {
    let mut state = ScrollState::default();
    let spans = stacked_page();
    for step in 0..200 {
        state.update_active(f64::from(step) * 10.0, &spans);
        assert!(state.active().is_none_or(|index| index < spans.len()));
    }
}

// =============================================================
// Header elevation
// =============================================================

#[test]
fn first_update_reports_resting_below_threshold() {
    let mut state = ScrollState::default();
    assert_eq!(state.update_elevation(0.0), Some(false));
}

#[test]
fn threshold_is_exclusive() {
    let mut state = ScrollState::default();
    state.update_elevation(0.0);
    assert_eq!(state.update_elevation(HEADER_ELEVATION_PX), None);
    assert_eq!(state.update_elevation(HEADER_ELEVATION_PX + 0.5), Some(true));
}

#[test]
fn elevation_reports_only_on_transitions() {
    let mut state = ScrollState::default();
    assert_eq!(state.update_elevation(100.0), Some(true));
    assert_eq!(state.update_elevation(200.0), None);
    assert_eq!(state.update_elevation(10.0), Some(false));
    assert_eq!(state.update_elevation(0.0), None);
}
