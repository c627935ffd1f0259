//! Theme toggle button and system color-scheme listener.

use std::cell::RefCell;
use std::rc::Rc;

use page::config::SiteConfig;
use page::theme::ThemeManager;
use wasm_bindgen::JsCast;
use web_sys::{Event, MediaQueryListEvent};

use crate::dom::Elements;
use crate::error::Result;
use crate::listeners::Listeners;
use crate::selectors::PREFERS_DARK_QUERY;
use crate::storage::Store;

pub(crate) fn install(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    let manager = Rc::new(RefCell::new(ThemeManager::new(
        Store::open(&elements.window),
        config.storage_key.clone(),
    )));
    let initial = manager.borrow_mut().init();
    elements.apply(&initial, None);
    log::debug!("theme {} applied at startup", manager.borrow().current());

    let on_click = {
        let elements = Rc::clone(elements);
        let manager = Rc::clone(&manager);
        move |_event: Event| {
            let effects = manager.borrow_mut().toggle();
            elements.apply(&effects, None);
        }
    };
    listeners.on(&elements.theme_toggle, "click", on_click)?;

    let Some(query) = elements.window.match_media(PREFERS_DARK_QUERY)? else {
        log::debug!("matchMedia unsupported; not following system theme");
        return Ok(());
    };
    let on_change = {
        let elements = Rc::clone(elements);
        move |event: Event| {
            let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            let effects = manager.borrow_mut().on_system_change(change.matches());
            if !effects.is_empty() {
                log::info!("following system theme change");
            }
            elements.apply(&effects, None);
        }
    };
    listeners.on(&query, "change", on_change)
}
