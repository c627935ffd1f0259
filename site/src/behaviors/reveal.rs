//! Reveal-on-scroll observer.

use std::cell::RefCell;
use std::rc::Rc;

use page::config::SiteConfig;
use page::reveal::RevealTracker;
use web_sys::{Element, IntersectionObserver};

use crate::dom::{self, Elements};
use crate::error::Result;
use crate::listeners::Listeners;

/// Shared by the observer callback and the load-time stagger.
#[derive(Clone)]
pub(crate) struct Reveal {
    elements: Rc<Elements>,
    tracker: Rc<RefCell<RevealTracker>>,
    observer: Rc<RefCell<Option<IntersectionObserver>>>,
}

impl Reveal {
    /// Activate reveal element `index` (no-op if already active) and stop
    /// observing it.
    pub fn activate(&self, index: usize) {
        let effect = self.tracker.borrow_mut().activate(index);
        if let Some(effect) = effect {
            self.elements.apply(&[effect], None);
            if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), self.elements.reveals.get(index)) {
                observer.unobserve(el);
            }
        }
    }

    fn on_entry(&self, target: &Element, intersecting: bool, observer: &IntersectionObserver) {
        let Some(index) = dom::index_of(&self.elements.reveals, target) else {
            return;
        };
        let effect = self.tracker.borrow_mut().on_intersect(index, intersecting);
        if let Some(effect) = effect {
            self.elements.apply(&[effect], None);
            observer.unobserve(target);
        }
    }
}

pub(crate) fn install(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<Reveal> {
    let reveal = Reveal {
        elements: Rc::clone(elements),
        tracker: Rc::new(RefCell::new(RevealTracker::new(elements.reveals.len()))),
        observer: Rc::new(RefCell::new(None)),
    };
    if elements.reveals.is_empty() {
        return Ok(reveal);
    }

    let on_entries = {
        let reveal = reveal.clone();
        move |entries: &[web_sys::IntersectionObserverEntry], observer: &IntersectionObserver| {
            for entry in entries {
                reveal.on_entry(&entry.target(), entry.is_intersecting(), observer);
            }
        }
    };
    let observer = listeners.observe(config.reveal_threshold, &elements.reveals, on_entries)?;
    *reveal.observer.borrow_mut() = Some(observer);
    log::debug!("observing {} reveal elements", elements.reveals.len());
    Ok(reveal)
}
