//! Persisted theme preference and the OS color-scheme query.
//!
//! Storage access is best-effort: disabled storage, quota errors, and
//! malformed values all degrade to the nothing-stored case.

use web_sys::{MediaQueryList, Window};

use crate::consts::THEME_STORAGE_KEY;
use crate::theme::Theme;

const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The stored preference, when one exists and parses.
pub(crate) fn load_theme(window: &Window) -> Option<Theme> {
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::parse(&value)
}

/// Persist the preference.
pub(crate) fn store_theme(window: &Window, theme: Theme) {
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// The media query list used both for the initial probe and for live
/// change notifications.
pub(crate) fn color_scheme_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(COLOR_SCHEME_QUERY).ok().flatten()
}

/// Whether the OS currently prefers a dark color scheme.
pub(crate) fn os_prefers_dark(window: &Window) -> bool {
    color_scheme_query(window).map_or(false, |query| query.matches())
}
