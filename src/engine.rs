//! The headless page engine.
//!
//! DESIGN
//! ======
//! The host (the `dom` module in the browser, plain test code natively)
//! feeds every page event through one `on_*` method here and applies the
//! returned [`Effect`]s to the document. Nothing in this module touches the
//! DOM: geometry and containment are measured by the host and passed in,
//! and the one lookup that must happen at event time (anchor target
//! resolution) is injected as a closure. That keeps every transition
//! testable without a rendering surface.
//!
//! Effects are edge-triggered: a handler reports a class or style change
//! only when the underlying state actually changed, so the host never
//! re-applies what is already on the page.

use crate::anchor::{self, AnchorTarget};
use crate::nav::{MenuChange, MenuState, NavMenu};
use crate::reveal::{BarKey, RevealKey, RevealState, hero_reveal_delay_ms};
use crate::scroll::{ScrollState, SectionSpan};
use crate::theme::{Theme, ThemeState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from event handlers for the host to apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the mobile menu panel and suppress body scrolling.
    OpenMenu,
    /// Hide the mobile menu panel and restore body scrolling.
    CloseMenu,
    /// Move the active marker to the navigation link of the section at this
    /// index, clearing it everywhere else.
    ActivateLink(usize),
    /// Switch the header between the resting and elevated shadow presets.
    ElevateHeader(bool),
    /// Write the theme to the document element.
    ApplyTheme(Theme),
    /// Persist the theme choice.
    StoreTheme(Theme),
    /// Mark a reveal target visible.
    RevealTarget(RevealKey),
    /// Arrange for `on_reveal_timer(key)` to run after the delay.
    ScheduleReveal { key: RevealKey, delay_ms: u32 },
    /// Set a skill bar's width to its declared percentage and mark it.
    FillBar { bar: BarKey, percent: f64 },
    /// Animate the viewport to a vertical offset.
    ScrollTo { top: f64 },
    /// Mark the body as loaded to unlock paint transitions.
    MarkLoaded,
}

/// Headless page state machine.
///
/// Registration methods hand out dense keys the host mirrors with element
/// lists; everything else is `on_*` event handlers returning effects.
#[derive(Debug, Clone, Default)]
pub struct PageEngine {
    menu: NavMenu,
    scroll: ScrollState,
    theme: ThemeState,
    reveal: RevealState,
    loaded: bool,
}

impl PageEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Registration ---

    /// Register one observed reveal target, flagging whether it sits inside
    /// a skills group.
    pub fn add_reveal_target(&mut self, in_skills_group: bool) -> RevealKey {
        self.reveal.add_target(in_skills_group)
    }

    /// Register one skill bar with its declared fill percentage.
    pub fn add_skill_bar(&mut self, percent: f64) -> BarKey {
        self.reveal.add_bar(percent)
    }

    // --- Theme ---

    /// Resolve the initial theme from the persisted value and the OS
    /// preference. An empty result leaves the document attribute unset.
    pub fn init_theme(&mut self, persisted: Option<Theme>, os_dark: bool) -> Vec<Effect> {
        match self.theme.initialize(persisted, os_dark) {
            Some(theme) => vec![Effect::ApplyTheme(theme)],
            None => Vec::new(),
        }
    }

    /// Theme toggle control activated.
    pub fn on_theme_toggle(&mut self) -> Vec<Effect> {
        let next = self.theme.toggle();
        vec![Effect::ApplyTheme(next), Effect::StoreTheme(next)]
    }

    /// Live OS color-scheme change notification.
    pub fn on_os_theme_change(&mut self, os_dark: bool) -> Vec<Effect> {
        match self.theme.os_changed(os_dark) {
            Some(theme) => vec![Effect::ApplyTheme(theme)],
            None => Vec::new(),
        }
    }

    // --- Mobile menu ---

    /// Menu toggle button activated.
    pub fn on_menu_toggle(&mut self) -> Vec<Effect> {
        Self::menu_effects(self.menu.on_toggle())
    }

    /// Menu close button activated.
    pub fn on_menu_close(&mut self) -> Vec<Effect> {
        Self::menu_effects(self.menu.on_close_request())
    }

    /// A navigation link was activated; an open menu closes.
    pub fn on_nav_link_click(&mut self) -> Vec<Effect> {
        Self::menu_effects(self.menu.on_close_request())
    }

    /// Any document click, with containment against the menu panel and the
    /// toggle control measured by the host.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Vec<Effect> {
        Self::menu_effects(self.menu.on_document_click(inside_menu, inside_toggle))
    }

    /// Viewport width measured once a resize settled.
    pub fn on_resize_settled(&mut self, viewport_width: f64) -> Vec<Effect> {
        Self::menu_effects(self.menu.on_resize_settled(viewport_width))
    }

    fn menu_effects(change: Option<MenuChange>) -> Vec<Effect> {
        match change {
            Some(MenuChange::Opened) => vec![Effect::OpenMenu],
            Some(MenuChange::Closed) => vec![Effect::CloseMenu],
            None => Vec::new(),
        }
    }

    // --- Scrolling ---

    /// Scroll event: refresh the active link and the header shadow from
    /// freshly measured section geometry.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionSpan]) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(index) = self.scroll.update_active(scroll_y, sections) {
            effects.push(Effect::ActivateLink(index));
        }
        if let Some(elevated) = self.scroll.update_elevation(scroll_y) {
            effects.push(Effect::ElevateHeader(elevated));
        }
        effects
    }

    // --- Page lifecycle ---

    /// The document became ready: schedule the hero stagger and compute the
    /// initial active link. The header shadow stays untouched until the
    /// first real scroll event.
    pub fn on_page_ready(
        &mut self,
        hero_keys: &[RevealKey],
        scroll_y: f64,
        sections: &[SectionSpan],
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (ordinal, &key) in hero_keys.iter().enumerate() {
            effects.push(Effect::ScheduleReveal { key, delay_ms: hero_reveal_delay_ms(ordinal) });
        }
        if let Some(index) = self.scroll.update_active(scroll_y, sections) {
            effects.push(Effect::ActivateLink(index));
        }
        effects
    }

    /// A scheduled hero reveal fired. A no-op when the observer revealed
    /// the element first.
    pub fn on_reveal_timer(&mut self, key: RevealKey) -> Vec<Effect> {
        if self.reveal.reveal(key) {
            vec![Effect::RevealTarget(key)]
        } else {
            Vec::new()
        }
    }

    /// The window finished loading.
    pub fn on_window_load(&mut self) -> Vec<Effect> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;
        vec![Effect::MarkLoaded]
    }

    // --- Reveal observation ---

    /// An observed element's intersection report. First entry reveals the
    /// target; any entry of a skills-group member runs the bar fill pass.
    pub fn on_intersection(&mut self, key: RevealKey, is_intersecting: bool) -> Vec<Effect> {
        if !is_intersecting {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.reveal.reveal(key) {
            effects.push(Effect::RevealTarget(key));
        }
        if self.reveal.triggers_bar_fill(key) {
            for fill in self.reveal.fill_pending_bars() {
                effects.push(Effect::FillBar { bar: fill.bar, percent: fill.percent });
            }
        }
        effects
    }

    // --- Anchors ---

    /// An in-page anchor was activated. `find_top` resolves a fragment id
    /// to the target element's document-relative top at click time;
    /// unresolved targets and the bare `#` placeholder do nothing.
    pub fn on_anchor_click<F>(&mut self, href: &str, header_height: f64, find_top: F) -> Vec<Effect>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        match anchor::classify(href) {
            AnchorTarget::Fragment(id) => match find_top(id) {
                Some(top) => {
                    vec![Effect::ScrollTo { top: anchor::scroll_target(top, header_height) }]
                }
                None => Vec::new(),
            },
            AnchorTarget::Placeholder | AnchorTarget::External => Vec::new(),
        }
    }

    // --- Queries ---

    /// Current mobile menu state.
    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// Theme currently applied to the document, if any.
    #[must_use]
    pub fn applied_theme(&self) -> Option<Theme> {
        self.theme.applied()
    }

    /// Index of the currently highlighted section, if any.
    #[must_use]
    pub fn active_section(&self) -> Option<usize> {
        self.scroll.active()
    }

    /// Whether this reveal target has been revealed.
    #[must_use]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.reveal.is_visible(key)
    }
}
