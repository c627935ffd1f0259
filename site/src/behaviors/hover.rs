//! Skill tag hover lift and project card tilt.

use std::rc::Rc;

use page::config::SiteConfig;
use page::tilt::{Rect, card_reset, card_tilt, skill_hover};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use crate::dom::Elements;
use crate::error::Result;
use crate::listeners::Listeners;

pub(crate) fn install(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    for (index, tag) in elements.skill_tags.iter().enumerate() {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let elements = Rc::clone(elements);
            listeners.on(tag, event, move |_event: Event| {
                elements.apply(&[skill_hover(index, entered)], None);
            })?;
        }
    }

    let divisor = config.tilt_divisor;
    for (index, card) in elements.project_cards.iter().enumerate() {
        let on_move = {
            let elements = Rc::clone(elements);
            let card = card.clone();
            move |event: Event| {
                let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let bounds = card.get_bounding_client_rect();
                let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
                let effect = card_tilt(index, rect, f64::from(pointer.client_x()), f64::from(pointer.client_y()), divisor);
                elements.apply(&[effect], None);
            }
        };
        listeners.on(card, "mousemove", on_move)?;

        let elements = Rc::clone(elements);
        listeners.on(card, "mouseleave", move |_event: Event| {
            elements.apply(&[card_reset(index)], None);
        })?;
    }
    Ok(())
}
