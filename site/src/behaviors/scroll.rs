//! Scroll listeners: navbar state, active section, parallax, anchor clicks.
//!
//! Navbar and section tracking each coalesce to one animation frame at a time
//! through their own [`FrameGate`]. Parallax requests a frame per scroll event.

use std::cell::RefCell;
use std::rc::Rc;

use page::config::SiteConfig;
use page::parallax::parallax_effects;
use page::scroll::{FrameGate, anchor_effects, anchor_fragment, navbar_effect};
use page::sections::{SectionSpan, current_section, highlight};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::dom::Elements;
use crate::error::Result;
use crate::listeners::Listeners;

pub(crate) fn install(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    install_navbar(elements, config, listeners)?;
    install_sections(elements, config, listeners)?;
    install_parallax(elements, config, listeners)?;
    install_anchors(elements, listeners)
}

/// Run `frame` on the next animation frame unless `gate` already has one
/// pending.
fn coalesce(elements: &Rc<Elements>, gate: &Rc<RefCell<FrameGate>>, frame: impl FnOnce(&Elements) + 'static) {
    if !gate.borrow_mut().request() {
        return;
    }
    let scheduled = {
        let elements_for_frame = Rc::clone(elements);
        let gate = Rc::clone(gate);
        elements.request_frame(move |_ts| {
            frame(&elements_for_frame);
            gate.borrow_mut().release();
        })
    };
    if let Err(err) = scheduled {
        log::warn!("requestAnimationFrame failed: {err}");
        gate.borrow_mut().release();
    }
}

fn install_navbar(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let threshold = config.scroll_threshold;
    let on_scroll = {
        let elements = Rc::clone(elements);
        move |_event: Event| {
            coalesce(&elements, &gate, move |elements| {
                elements.apply(&[navbar_effect(elements.scroll_y(), threshold)], None);
            });
        }
    };
    listeners.on(&elements.window, "scroll", on_scroll)
}

fn install_sections(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    if elements.sections.is_empty() || elements.nav_links.is_empty() {
        log::debug!("no sections or nav links; active link tracking off");
        return Ok(());
    }
    let hrefs = Rc::new(
        elements
            .nav_links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect::<Vec<_>>(),
    );
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let offset = config.section_offset;
    let on_scroll = {
        let elements = Rc::clone(elements);
        move |_event: Event| {
            let hrefs = Rc::clone(&hrefs);
            coalesce(&elements, &gate, move |elements| {
                let spans = elements
                    .sections
                    .iter()
                    .map(|section| {
                        SectionSpan::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height()))
                    })
                    .collect::<Vec<_>>();
                let navbar_height = f64::from(elements.navbar.offset_height());
                if let Some(id) = current_section(&spans, elements.scroll_y(), navbar_height, offset) {
                    elements.apply(&highlight(&hrefs, id), None);
                }
            });
        }
    };
    listeners.on(&elements.window, "scroll", on_scroll)
}

fn install_parallax(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    let Some(hero) = elements.hero.clone() else {
        return Ok(());
    };
    if elements.hero_gradient.is_none() && elements.hero_particles.is_none() {
        log::debug!("hero has no parallax layers");
        return Ok(());
    }
    let factors = config.parallax();
    let on_scroll = {
        let elements = Rc::clone(elements);
        move |_event: Event| {
            let elements_for_frame = Rc::clone(&elements);
            let hero = hero.clone();
            let scheduled = elements.request_frame(move |_ts| {
                let hero_height = f64::from(hero.offset_height());
                let effects = parallax_effects(elements_for_frame.scroll_y(), hero_height, factors);
                elements_for_frame.apply(&effects, None);
            });
            if let Err(err) = scheduled {
                log::warn!("parallax frame not scheduled: {err}");
            }
        }
    };
    listeners.on(&elements.window, "scroll", on_scroll)
}

fn install_anchors(elements: &Rc<Elements>, listeners: &mut Listeners) -> Result<()> {
    for anchor in &elements.anchors {
        let on_click = {
            let elements = Rc::clone(elements);
            let anchor = anchor.clone();
            move |event: Event| {
                let href = anchor.get_attribute("href").unwrap_or_default();
                let Some(fragment) = anchor_fragment(&href) else {
                    return;
                };
                let Some(target) = elements
                    .document
                    .get_element_by_id(fragment)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let navbar_height = f64::from(elements.navbar.offset_height());
                let effects = anchor_effects(f64::from(target.offset_top()), navbar_height);
                elements.apply(&effects, Some(&event));
            }
        };
        listeners.on(anchor, "click", on_click)?;
    }
    Ok(())
}
