//! Applies engine effects to the document.
//!
//! Every DOM call here is best-effort; a missing element or a rejected
//! mutation only costs its visual.

use web_sys::{ScrollBehavior, ScrollToOptions};

use super::{
    ACTIVE_CLASS, ANIMATED_CLASS, LOADED_CLASS, PageDom, SHOW_MENU_CLASS, THEME_ATTR,
    VISIBLE_CLASS, storage,
};
use crate::consts::{HEADER_SHADOW_ELEVATED, HEADER_SHADOW_RESTING};
use crate::engine::Effect;

pub(crate) fn apply(dom: &PageDom, effect: &Effect) {
    match effect {
        Effect::OpenMenu => {
            if let Some(menu) = &dom.menu {
                let _ = menu.class_list().add_1(SHOW_MENU_CLASS);
            }
            set_body_overflow(dom, "hidden");
        }
        Effect::CloseMenu => {
            if let Some(menu) = &dom.menu {
                let _ = menu.class_list().remove_1(SHOW_MENU_CLASS);
            }
            set_body_overflow(dom, "");
        }
        Effect::ActivateLink(index) => {
            for link in &dom.nav_links {
                let _ = link.class_list().remove_1(ACTIVE_CLASS);
            }
            if let Some(link) = dom.section_links.get(*index) {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }
        Effect::ElevateHeader(elevated) => {
            if let Some(header) = &dom.header {
                let shadow = if *elevated { HEADER_SHADOW_ELEVATED } else { HEADER_SHADOW_RESTING };
                let _ = header.style().set_property("box-shadow", shadow);
            }
        }
        Effect::ApplyTheme(theme) => {
            if let Some(root) = &dom.root {
                let _ = root.set_attribute(THEME_ATTR, theme.as_str());
            }
        }
        Effect::StoreTheme(theme) => storage::store_theme(&dom.window, *theme),
        Effect::RevealTarget(key) => {
            if let Some(target) = dom.reveal_targets.get(*key) {
                let _ = target.class_list().add_1(VISIBLE_CLASS);
            }
        }
        Effect::ScheduleReveal { .. } => {
            // Turned into a timer by the dispatcher before reaching here.
        }
        Effect::FillBar { bar, percent } => {
            if let Some(element) = dom.bars.get(*bar) {
                let _ = element.style().set_property("width", &format!("{percent}%"));
                let _ = element.class_list().add_1(ANIMATED_CLASS);
            }
        }
        Effect::ScrollTo { top } => {
            let options = ScrollToOptions::new();
            options.set_top(*top);
            options.set_behavior(ScrollBehavior::Smooth);
            dom.window.scroll_to_with_scroll_to_options(&options);
        }
        Effect::MarkLoaded => {
            if let Some(body) = &dom.body {
                let _ = body.class_list().add_1(LOADED_CLASS);
            }
        }
    }
}

fn set_body_overflow(dom: &PageDom, value: &str) {
    if let Some(body) = &dom.body {
        let _ = body.style().set_property("overflow", value);
    }
}
