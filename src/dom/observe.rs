//! Viewport intersection wiring for the reveal targets.
//!
//! Targets stay observed after their first reveal; the engine's monotonic
//! flags turn later reports into no-ops, and repeated skills-group entries
//! are exactly what re-runs the bar fill pass check.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{AttachError, Shared, listeners};
use crate::consts::REVEAL_THRESHOLD;

/// Callback handed to the observer; routes entries to the engine by key.
pub(crate) type ObserverCallback = Closure<dyn FnMut(js_sys::Array)>;

/// Observe every reveal target. Returns nothing when the page has none.
pub(crate) fn start(
    shared: &Rc<Shared>,
) -> Result<Option<(IntersectionObserver, ObserverCallback)>, AttachError> {
    if shared.dom.reveal_targets.is_empty() {
        return Ok(None);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new({
        let shared = Rc::clone(shared);
        move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = shared.dom.reveal_targets.iter().position(|t| *t == target)
                else {
                    continue;
                };
                let effects =
                    shared.engine.borrow_mut().on_intersection(key, entry.is_intersecting());
                listeners::dispatch(&shared, effects);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|error| AttachError::Observer(format!("{error:?}")))?;

    for target in &shared.dom.reveal_targets {
        observer.observe(target);
    }

    Ok(Some((observer, callback)))
}
