//! Browser bindings: element resolution, listener wiring, and effect
//! application.
//!
//! DESIGN
//! ======
//! Everything that touches `web-sys` lives under this module; the engine
//! stays headless. [`PageController`] is the lifetime anchor: it owns every
//! listener closure, the intersection observer, and the resize debounce
//! slot. Keep it alive for the page's lifetime (the module entry point
//! leaks it) or call [`PageController::detach`]; dropping it while wired
//! would leave the page holding dangling callbacks.
//!
//! Element absence is not an error. Each element is resolved once at attach
//! and whatever is missing silently disables its own wiring, matching a
//! page that simply does not use that feature.

pub(crate) mod apply;
pub(crate) mod listeners;
pub(crate) mod observe;
pub(crate) mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, IntersectionObserver, Window};

use crate::engine::PageEngine;
use crate::reveal::RevealKey;

// ── Markup contract ─────────────────────────────────────────────────────────

const NAV_MENU_ID: &str = "nav-menu";
const NAV_TOGGLE_ID: &str = "nav-toggle";
const NAV_CLOSE_ID: &str = "nav-close";
const THEME_TOGGLE_ID: &str = "theme-toggle";
const HEADER_ID: &str = "header";

const NAV_LINK_SELECTOR: &str = ".nav-link";
const SECTION_SELECTOR: &str = "section[id]";
const REVEAL_SELECTOR: &str = ".fade-in, .slide-up";
const HERO_REVEAL_SELECTOR: &str = ".hero .fade-in";
const SKILLS_GROUP_SELECTOR: &str = ".skills-group";
const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub(crate) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

const PROGRESS_ATTR: &str = "data-progress";
pub(crate) const THEME_ATTR: &str = "data-theme";

pub(crate) const SHOW_MENU_CLASS: &str = "show-menu";
pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const VISIBLE_CLASS: &str = "visible";
pub(crate) const ANIMATED_CLASS: &str = "animated";
pub(crate) const LOADED_CLASS: &str = "loaded";

/// Environment-level failures while attaching to the page.
#[derive(Debug, Error)]
pub enum AttachError {
    /// Not running in a browsing context.
    #[error("no window object available")]
    NoWindow,
    /// The window carries no document.
    #[error("window has no document")]
    NoDocument,
    /// The viewport intersection observer could not be constructed.
    #[error("intersection observer construction failed: {0}")]
    Observer(String),
}

/// Every element the behavior layer works with, resolved once at attach.
/// The element vectors are index-aligned with the engine's dense keys.
pub(crate) struct PageDom {
    pub window: Window,
    pub document: Document,
    /// `documentElement`, carrier of the theme attribute.
    pub root: Option<Element>,
    pub body: Option<HtmlElement>,
    pub menu: Option<Element>,
    pub toggle: Option<Element>,
    pub close: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub header: Option<HtmlElement>,
    /// Every navigation link, for clearing the active marker.
    pub nav_links: Vec<Element>,
    /// Sections carrying an id with a matching navigation link.
    pub sections: Vec<HtmlElement>,
    /// The link for `sections[i]`.
    pub section_links: Vec<Element>,
    /// Observed reveal targets, aligned with engine reveal keys.
    pub reveal_targets: Vec<Element>,
    /// Whether `reveal_targets[i]` sits inside a skills group.
    pub reveal_in_skills: Vec<bool>,
    /// Hero subset of the reveal targets, in document order.
    pub hero_elements: Vec<Element>,
    /// Skill bars with a usable progress attribute, aligned with bar keys.
    pub bars: Vec<HtmlElement>,
    /// Declared fill percentage for `bars[i]`.
    pub bar_percents: Vec<f64>,
}

impl PageDom {
    fn resolve(window: Window, document: Document) -> Self {
        let root = document.document_element();
        let body = document.body();
        let menu = document.get_element_by_id(NAV_MENU_ID);
        let toggle = document.get_element_by_id(NAV_TOGGLE_ID);
        let close = document.get_element_by_id(NAV_CLOSE_ID);
        let theme_toggle = document.get_element_by_id(THEME_TOGGLE_ID);
        let header = document
            .get_element_by_id(HEADER_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let nav_links = query_all(&document, NAV_LINK_SELECTOR);

        let mut sections = Vec::new();
        let mut section_links = Vec::new();
        for section in query_all(&document, SECTION_SELECTOR) {
            // Sections without a matching link are invisible to tracking.
            let selector = format!("{NAV_LINK_SELECTOR}[href=\"#{}\"]", section.id());
            let Ok(Some(link)) = document.query_selector(&selector) else {
                continue;
            };
            let Ok(section) = section.dyn_into::<HtmlElement>() else {
                continue;
            };
            sections.push(section);
            section_links.push(link);
        }

        let reveal_targets = query_all(&document, REVEAL_SELECTOR);
        let reveal_in_skills = reveal_targets
            .iter()
            .map(|el| el.closest(SKILLS_GROUP_SELECTOR).ok().flatten().is_some())
            .collect();
        let hero_elements = query_all(&document, HERO_REVEAL_SELECTOR);

        let mut bars = Vec::new();
        let mut bar_percents = Vec::new();
        for bar in query_all(&document, SKILL_BAR_SELECTOR) {
            // Bars without a usable percentage stay unanimated.
            let Some(percent) = progress_percent(&bar) else {
                continue;
            };
            let Ok(bar) = bar.dyn_into::<HtmlElement>() else {
                continue;
            };
            bars.push(bar);
            bar_percents.push(percent);
        }

        Self {
            window,
            document,
            root,
            body,
            menu,
            toggle,
            close,
            theme_toggle,
            header,
            nav_links,
            sections,
            section_links,
            reveal_targets,
            reveal_in_skills,
            hero_elements,
            bars,
            bar_percents,
        }
    }

    fn log_summary(&self) {
        debug!(
            "resolved {} nav links, {} tracked sections, {} reveal targets, {} skill bars",
            self.nav_links.len(),
            self.sections.len(),
            self.reveal_targets.len(),
            self.bars.len()
        );
        for (id, present) in [
            (NAV_MENU_ID, self.menu.is_some()),
            (NAV_TOGGLE_ID, self.toggle.is_some()),
            (NAV_CLOSE_ID, self.close.is_some()),
            (THEME_TOGGLE_ID, self.theme_toggle.is_some()),
            (HEADER_ID, self.header.is_some()),
        ] {
            if !present {
                warn!("element #{id} not found; its wiring is disabled");
            }
        }
    }
}

/// Engine plus resolved elements, shared by every listener closure.
pub(crate) struct Shared {
    pub engine: RefCell<PageEngine>,
    pub dom: PageDom,
}

/// The attached behavior layer.
///
/// Owns every listener closure and the observer. Keep it alive for the
/// page's lifetime or call [`detach`](Self::detach) to unwire cleanly.
pub struct PageController {
    listeners: Vec<listeners::ListenerHandle>,
    observer: Option<IntersectionObserver>,
    /// Kept alive for as long as the observer can fire.
    #[allow(dead_code)]
    observer_callback: Option<observe::ObserverCallback>,
    resize_timer: Rc<RefCell<Option<Timeout>>>,
}

impl PageController {
    /// Resolve the page and wire every behavior. The document must already
    /// be parsed; [`run_at_dom_ready`] defers the call to that point.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::NoWindow`] or [`AttachError::NoDocument`]
    /// outside a browsing context, and [`AttachError::Observer`] when the
    /// intersection observer cannot be constructed.
    pub fn attach() -> Result<Self, AttachError> {
        let window = web_sys::window().ok_or(AttachError::NoWindow)?;
        let document = window.document().ok_or(AttachError::NoDocument)?;

        let dom = PageDom::resolve(window, document);
        dom.log_summary();

        let mut engine = PageEngine::new();
        let hero_keys = register_reveal_targets(&dom, &mut engine);
        for &percent in &dom.bar_percents {
            engine.add_skill_bar(percent);
        }

        let shared = Rc::new(Shared { engine: RefCell::new(engine), dom });

        // Theme resolves before anything else renders a frame.
        let persisted = storage::load_theme(&shared.dom.window);
        let os_dark = storage::os_prefers_dark(&shared.dom.window);
        let effects = shared.engine.borrow_mut().init_theme(persisted, os_dark);
        listeners::dispatch(&shared, effects);

        // Observer construction can fail; it runs before any listener
        // registration so an attach error propagates with nothing wired.
        let (observer, observer_callback) = match observe::start(&shared)? {
            Some((observer, callback)) => (Some(observer), Some(callback)),
            None => (None, None),
        };

        let resize_timer = Rc::new(RefCell::new(None));
        let handles = listeners::wire(&shared, &resize_timer);

        // Ready work: the hero stagger and the initial active link. The
        // header shadow waits for the first real scroll event.
        let spans = listeners::section_spans(&shared.dom);
        let scroll_y = listeners::scroll_offset(&shared.dom.window);
        let effects = shared.engine.borrow_mut().on_page_ready(&hero_keys, scroll_y, &spans);
        listeners::dispatch(&shared, effects);

        // When the load event already fired the marker goes on immediately;
        // otherwise the wired load listener delivers it once.
        if shared.dom.document.ready_state() == "complete" {
            let effects = shared.engine.borrow_mut().on_window_load();
            listeners::dispatch(&shared, effects);
        }

        Ok(Self { listeners: handles, observer, observer_callback, resize_timer })
    }

    /// Unwire everything this controller attached. Hero timers already
    /// scheduled still fire; their reveals land on a page that no longer
    /// listens for anything else.
    pub fn detach(self) {
        for handle in &self.listeners {
            handle.remove();
        }
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        // Cancels a pending resize check.
        self.resize_timer.borrow_mut().take();
    }
}

/// Run `action` once the DOM is parsed: immediately when the document is
/// already past its loading state, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns [`AttachError::NoWindow`] or [`AttachError::NoDocument`]
/// outside a browsing context.
pub fn run_at_dom_ready<F>(action: F) -> Result<(), AttachError>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;
    if document.ready_state() == "loading" {
        let closure = Closure::once(action);
        let target: &EventTarget = document.as_ref();
        if target
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("could not wait for DOMContentLoaded; attach was skipped");
        }
        // Fires at most once per page; the closure is intentionally leaked.
        closure.forget();
    } else {
        action();
    }
    Ok(())
}

/// Register every reveal target with the engine, collecting the keys of the
/// hero subset in document order.
fn register_reveal_targets(dom: &PageDom, engine: &mut PageEngine) -> Vec<RevealKey> {
    let mut hero_keys = Vec::new();
    for (element, &in_skills) in dom.reveal_targets.iter().zip(&dom.reveal_in_skills) {
        let key = engine.add_reveal_target(in_skills);
        if dom.hero_elements.iter().any(|hero| hero == element) {
            hero_keys.push(key);
        }
    }
    hero_keys
}

/// All elements matching a selector, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(element) =
                list.get(index).and_then(|node| node.dyn_into::<Element>().ok())
            {
                elements.push(element);
            }
        }
    }
    elements
}

/// Parse the numeric progress attribute, rejecting anything non-finite.
fn progress_percent(bar: &Element) -> Option<f64> {
    let value = bar.get_attribute(PROGRESS_ATTR)?;
    value.trim().parse::<f64>().ok().filter(|percent| percent.is_finite())
}
