//! Mobile menu button, nav link clicks and the keyboard handler.

use std::cell::RefCell;
use std::rc::Rc;

use page::menu::MobileMenu;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use crate::dom::Elements;
use crate::error::Result;
use crate::listeners::Listeners;

pub(crate) fn install(elements: &Rc<Elements>, menu: &Rc<RefCell<MobileMenu>>, listeners: &mut Listeners) -> Result<()> {
    let on_button = {
        let elements = Rc::clone(elements);
        let menu = Rc::clone(menu);
        move |_event: Event| {
            let effects = menu.borrow_mut().toggle();
            elements.apply(&effects, None);
        }
    };
    listeners.on(&elements.menu_button, "click", on_button)?;

    for link in &elements.nav_links {
        let on_link = {
            let elements = Rc::clone(elements);
            let menu = Rc::clone(menu);
            move |_event: Event| {
                let effects = menu.borrow_mut().close();
                elements.apply(&effects, None);
            }
        };
        listeners.on(link, "click", on_link)?;
    }

    let on_key = {
        let elements = Rc::clone(elements);
        let menu = Rc::clone(menu);
        move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let ring = elements.focus_ring();
            let effects = menu.borrow_mut().on_key(&key.key(), key.shift_key(), ring);
            elements.apply(&effects, Some(&event));
        }
    };
    listeners.on(&elements.document, "keydown", on_key)
}
