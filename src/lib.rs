//! Client-side behavior layer for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! every dynamic behavior of the page: the mobile navigation menu, scroll
//! tracking for the active link and the header shadow, theme selection and
//! persistence, viewport-triggered reveal animations with skill bar fills,
//! and smooth scrolling for fragment links. The HTML and CSS stay static;
//! the page works as a plain document when the module never loads.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Headless [`engine::PageEngine`] turning inputs into [`engine::Effect`]s |
//! | [`nav`] | Mobile menu open/close state machine |
//! | [`scroll`] | Section tracking and header elevation |
//! | [`theme`] | Theme resolution, toggling, and persistence rules |
//! | [`reveal`] | One-way reveal flags, hero stagger, skill bar fills |
//! | [`anchor`] | Fragment link classification and scroll target math |
//! | [`dom`] | Browser bindings: element resolution, listeners, effect application |
//! | [`consts`] | Shared thresholds, delays, and storage keys |

pub mod anchor;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;

use log::{Level, error};
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point. Attaches the behavior layer once the DOM is parsed
/// and leaks the controller so its listeners live for the page's lifetime.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Debug);

    let result = dom::run_at_dom_ready(|| match dom::PageController::attach() {
        Ok(controller) => std::mem::forget(controller),
        Err(err) => error!("failed to attach page behavior: {err}"),
    });
    if let Err(err) = result {
        error!("failed to attach page behavior: {err}");
    }
}
