//! Theme resolution and toggling.
//!
//! The applied theme is the `data-theme` attribute on the document element.
//! A persisted choice always outranks the OS preference; the live OS signal
//! is consulted only while nothing is persisted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Default theme; also what an unset attribute renders as.
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute and storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything outside the two known values is
    /// treated as if nothing were stored.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// What is applied to the document and whether the user ever chose
/// explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeState {
    /// Theme currently written to the document; `None` until first applied,
    /// which the page styles render as light.
    applied: Option<Theme>,
    /// A persisted choice exists. Gates the live OS signal.
    stored: bool,
}

impl ThemeState {
    /// Resolve the initial theme from the persisted value and the OS
    /// preference. Returns the theme to apply, or `None` to leave the
    /// document attribute unset.
    pub fn initialize(&mut self, persisted: Option<Theme>, os_dark: bool) -> Option<Theme> {
        self.stored = persisted.is_some();
        self.applied = persisted.or(if os_dark { Some(Theme::Dark) } else { None });
        self.applied
    }

    /// Flip the applied theme, treating an unset document as light. The
    /// returned theme is both applied and persisted, so from here on the OS
    /// signal is inert.
    pub fn toggle(&mut self) -> Theme {
        let next = self.applied.unwrap_or(Theme::Light).flipped();
        self.applied = Some(next);
        self.stored = true;
        next
    }

    /// Live OS preference change. Returns the theme to apply, or `None`
    /// when a persisted choice suppresses the signal.
    pub fn os_changed(&mut self, os_dark: bool) -> Option<Theme> {
        if self.stored {
            return None;
        }
        let next = if os_dark { Theme::Dark } else { Theme::Light };
        self.applied = Some(next);
        Some(next)
    }

    /// Theme currently applied to the document, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }
}
