//! Event listener closures and effect dispatch.
//!
//! Every closure clones the shared state handle, measures what the engine
//! needs, and runs one engine method. `dispatch` routes the returned
//! effects: `ScheduleReveal` becomes a one-shot timer, everything else is
//! applied to the document immediately.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MediaQueryListEvent, Node, Window};

use super::{ANCHOR_SELECTOR, PageDom, Shared, apply, query_all, storage};
use crate::consts::RESIZE_SETTLE_MS;
use crate::engine::Effect;
use crate::scroll::SectionSpan;

/// One registered listener: target, event name, and the closure kept alive
/// for as long as the registration stands.
pub(crate) struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub(crate) fn remove(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Route effects to the page. Scheduled reveals re-enter through the engine
/// when their timer fires, so a reveal that raced the observer stays a
/// single class mutation.
pub(crate) fn dispatch(shared: &Rc<Shared>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ScheduleReveal { key, delay_ms } => {
                let shared = Rc::clone(shared);
                Timeout::new(delay_ms, move || {
                    let effects = shared.engine.borrow_mut().on_reveal_timer(key);
                    dispatch(&shared, effects);
                })
                .forget();
            }
            effect => apply::apply(&shared.dom, &effect),
        }
    }
}

/// Register every page listener and hand back the handles.
pub(crate) fn wire(
    shared: &Rc<Shared>,
    resize_timer: &Rc<RefCell<Option<Timeout>>>,
) -> Vec<ListenerHandle> {
    let mut handles = Vec::new();
    let window_target: EventTarget = shared.dom.window.clone().into();

    wire_menu(shared, &mut handles);

    if let Some(theme_toggle) = &shared.dom.theme_toggle {
        listen(&mut handles, &theme_toggle.clone().into(), "click", {
            let shared = Rc::clone(shared);
            move |_| {
                let effects = shared.engine.borrow_mut().on_theme_toggle();
                dispatch(&shared, effects);
            }
        });
    }

    if let Some(query) = storage::color_scheme_query(&shared.dom.window) {
        listen(&mut handles, query.as_ref(), "change", {
            let shared = Rc::clone(shared);
            move |event: Event| {
                let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let effects = shared.engine.borrow_mut().on_os_theme_change(event.matches());
                dispatch(&shared, effects);
            }
        });
    }

    listen(&mut handles, &window_target, "scroll", {
        let shared = Rc::clone(shared);
        move |_| {
            let spans = section_spans(&shared.dom);
            let scroll_y = scroll_offset(&shared.dom.window);
            let effects = shared.engine.borrow_mut().on_scroll(scroll_y, &spans);
            dispatch(&shared, effects);
        }
    });

    listen(&mut handles, &window_target, "resize", {
        let shared = Rc::clone(shared);
        let timer = Rc::clone(resize_timer);
        move |_| {
            let shared = Rc::clone(&shared);
            let pending = Timeout::new(RESIZE_SETTLE_MS, move || {
                let width = shared
                    .dom
                    .window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                let effects = shared.engine.borrow_mut().on_resize_settled(width);
                dispatch(&shared, effects);
            });
            // Replacing the slot drops the previous timer, cancelling it.
            *timer.borrow_mut() = Some(pending);
        }
    });

    wire_anchors(shared, &mut handles);

    listen(&mut handles, &window_target, "load", {
        let shared = Rc::clone(shared);
        move |_| {
            let effects = shared.engine.borrow_mut().on_window_load();
            dispatch(&shared, effects);
        }
    });

    handles
}

/// Menu cluster: toggle, close control, per-link close, outside click. The
/// machine needs both the panel and its toggle control; with either missing
/// all menu wiring stays off.
fn wire_menu(shared: &Rc<Shared>, handles: &mut Vec<ListenerHandle>) {
    let (Some(menu), Some(toggle)) = (&shared.dom.menu, &shared.dom.toggle) else {
        return;
    };

    listen(handles, &toggle.clone().into(), "click", {
        let shared = Rc::clone(shared);
        move |_| {
            let effects = shared.engine.borrow_mut().on_menu_toggle();
            dispatch(&shared, effects);
        }
    });

    if let Some(close) = &shared.dom.close {
        listen(handles, &close.clone().into(), "click", {
            let shared = Rc::clone(shared);
            move |_| {
                let effects = shared.engine.borrow_mut().on_menu_close();
                dispatch(&shared, effects);
            }
        });
    }

    for link in &shared.dom.nav_links {
        listen(handles, &link.clone().into(), "click", {
            let shared = Rc::clone(shared);
            move |_| {
                let effects = shared.engine.borrow_mut().on_nav_link_click();
                dispatch(&shared, effects);
            }
        });
    }

    let menu_node: Node = menu.clone().into();
    let toggle_node: Node = toggle.clone().into();
    listen(handles, &shared.dom.document.clone().into(), "click", {
        let shared = Rc::clone(shared);
        move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_menu =
                target.as_ref().map_or(false, |node| menu_node.contains(Some(node)));
            let inside_toggle =
                target.as_ref().map_or(false, |node| toggle_node.contains(Some(node)));
            let effects =
                shared.engine.borrow_mut().on_document_click(inside_menu, inside_toggle);
            dispatch(&shared, effects);
        }
    });
}

/// In-page anchors: default navigation is suppressed and the engine decides
/// whether a smooth scroll follows.
fn wire_anchors(shared: &Rc<Shared>, handles: &mut Vec<ListenerHandle>) {
    for anchor in query_all(&shared.dom.document, ANCHOR_SELECTOR) {
        listen(handles, &anchor.clone().into(), "click", {
            let shared = Rc::clone(shared);
            move |event: Event| {
                // Suppressed even for the bare placeholder.
                event.prevent_default();
                let href = anchor.get_attribute("href").unwrap_or_default();
                let header_height =
                    shared.dom.header.as_ref().map_or(0.0, |h| f64::from(h.offset_height()));
                let document = shared.dom.document.clone();
                let effects =
                    shared.engine.borrow_mut().on_anchor_click(&href, header_height, |id| {
                        document
                            .get_element_by_id(id)
                            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                            .map(|el| f64::from(el.offset_top()))
                    });
                dispatch(&shared, effects);
            }
        });
    }
}

fn listen<F>(
    handles: &mut Vec<ListenerHandle>,
    target: &EventTarget,
    event: &'static str,
    callback: F,
) where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("failed to register a {event} listener");
    }
    handles.push(ListenerHandle { target: target.clone(), event, closure });
}

/// Fresh document-relative geometry for every tracked section.
pub(crate) fn section_spans(dom: &PageDom) -> Vec<SectionSpan> {
    dom.sections
        .iter()
        .map(|section| SectionSpan {
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Current vertical scroll offset.
pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}
