//! Mobile navigation menu state machine.
//!
//! The menu opens from the toggle button only. It closes from the close
//! button, from any navigation link, from a click outside both the panel and
//! the toggle, and from the viewport growing past the desktop breakpoint
//! once a resize settles.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::DESKTOP_BREAKPOINT_PX;

/// Whether the mobile menu panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// A state transition the host must mirror into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    /// Show the panel and suppress body scrolling.
    Opened,
    /// Hide the panel and restore body scrolling.
    Closed,
}

/// Mobile menu state plus the close rules around it. Transitions that do not
/// change state report nothing, so the host never re-applies classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    state: MenuState,
}

impl NavMenu {
    /// Toggle-button activation. Only ever opens; activating the toggle
    /// while the menu is showing does nothing.
    pub fn on_toggle(&mut self) -> Option<MenuChange> {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                Some(MenuChange::Opened)
            }
            MenuState::Open => None,
        }
    }

    /// Close-button or navigation-link activation.
    pub fn on_close_request(&mut self) -> Option<MenuChange> {
        self.close()
    }

    /// Document-level click. Closes only when the click landed outside both
    /// the menu panel and the toggle control.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Option<MenuChange> {
        if inside_menu || inside_toggle {
            return None;
        }
        self.close()
    }

    /// Viewport width measured after the resize settle period. Widths
    /// strictly past the breakpoint close the menu.
    pub fn on_resize_settled(&mut self, viewport_width: f64) -> Option<MenuChange> {
        if viewport_width > DESKTOP_BREAKPOINT_PX {
            return self.close();
        }
        None
    }

    fn close(&mut self) -> Option<MenuChange> {
        match self.state {
            MenuState::Open => {
                self.state = MenuState::Closed;
                Some(MenuChange::Closed)
            }
            MenuState::Closed => None,
        }
    }

    /// Current menu state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }
}
