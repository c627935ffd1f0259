//! Window resize and load handling, including the initial reveal stagger and
//! the hero typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use page::config::SiteConfig;
use page::housekeeping::{ResizeWatch, already_loaded, on_load};
use page::menu::MobileMenu;
use page::reveal::initial_stagger;
use page::typewriter::Typewriter;
use web_sys::Event;

use super::reveal::Reveal;
use crate::dom::Elements;
use crate::error::Result;
use crate::listeners::Listeners;
use crate::selectors::TYPEWRITER_ATTRIBUTE;

pub(crate) fn install(
    elements: &Rc<Elements>,
    config: &Rc<SiteConfig>,
    menu: &Rc<RefCell<MobileMenu>>,
    reveal: &Reveal,
    listeners: &mut Listeners,
) -> Result<()> {
    install_resize(elements, config, menu, listeners)?;

    let load = {
        let elements = Rc::clone(elements);
        let config = Rc::clone(config);
        let reveal = reveal.clone();
        move || run_load(&elements, &config, &reveal)
    };
    if already_loaded(&elements.document.ready_state()) {
        load();
        return Ok(());
    }
    let mut load = Some(load);
    listeners.on(&elements.window, "load", move |_event: Event| {
        if let Some(load) = load.take() {
            load();
        }
    })
}

fn install_resize(
    elements: &Rc<Elements>,
    config: &SiteConfig,
    menu: &Rc<RefCell<MobileMenu>>,
    listeners: &mut Listeners,
) -> Result<()> {
    let watch = Rc::new(RefCell::new(ResizeWatch::new(config.resize_debounce_ms, config.menu_breakpoint)));
    let delay_ms = config.resize_debounce_ms;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let on_resize = {
        let elements = Rc::clone(elements);
        let menu = Rc::clone(menu);
        move |_event: Event| {
            let ticket = watch.borrow_mut().on_resize(elements.now_ms());
            let elements = Rc::clone(&elements);
            let menu = Rc::clone(&menu);
            let watch = Rc::clone(&watch);
            let timer = Timeout::new(delay_ms, move || {
                // The timer elapsing is what ends the quiet period; clock skew
                // between setTimeout and performance.now() must not veto it.
                let now_ms = elements.now_ms().max(ticket.due_at_ms());
                let effects =
                    watch
                        .borrow_mut()
                        .on_timer(ticket, now_ms, elements.inner_width(), &mut menu.borrow_mut());
                if !effects.is_empty() {
                    log::debug!("viewport widened past breakpoint; closing menu");
                }
                elements.apply(&effects, None);
            });
            // Dropping the previous timer cancels it.
            *pending.borrow_mut() = Some(timer);
        }
    };
    listeners.on(&elements.window, "resize", on_resize)
}

fn run_load(elements: &Rc<Elements>, config: &SiteConfig, reveal: &Reveal) {
    elements.apply(&on_load(), None);

    let elements = Rc::clone(elements);
    let reveal = reveal.clone();
    let stagger_ms = config.stagger_ms;
    let speed_ms = config.typewriter_speed_ms;
    Timeout::new(config.preload_delay_ms, move || {
        stagger_initial_reveals(&elements, &reveal, stagger_ms);
        start_typewriter(&elements, speed_ms);
    })
    .forget();
}

fn stagger_initial_reveals(elements: &Elements, reveal: &Reveal, stagger_ms: u32) {
    let tops = elements
        .reveals
        .iter()
        .map(|el| el.get_bounding_client_rect().top())
        .collect::<Vec<_>>();
    for (index, delay_ms) in initial_stagger(&tops, elements.inner_height(), stagger_ms) {
        let reveal = reveal.clone();
        Timeout::new(delay_ms, move || reveal.activate(index)).forget();
    }
}

fn start_typewriter(elements: &Rc<Elements>, speed_ms: u32) {
    let Some(el) = elements.typewriter.as_ref() else {
        return;
    };
    let text = el
        .get_attribute(TYPEWRITER_ATTRIBUTE)
        .filter(|text| !text.is_empty())
        .or_else(|| el.text_content())
        .unwrap_or_default();
    let mut typewriter = Typewriter::new(&text);
    elements.apply(&[typewriter.start()], None);
    type_next(Rc::clone(elements), typewriter, speed_ms);
}

fn type_next(elements: Rc<Elements>, mut typewriter: Typewriter, speed_ms: u32) {
    let Some(effect) = typewriter.step() else {
        return;
    };
    elements.apply(&[effect], None);
    if typewriter.is_done() {
        return;
    }
    Timeout::new(speed_ms, move || type_next(elements, typewriter, speed_ms)).forget();
}
