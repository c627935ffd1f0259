//! Counting numbers, started once each when half visible.

use std::rc::Rc;

use page::config::SiteConfig;
use page::counter::{CounterAnimation, CounterSpec, CounterWatch};
use page::effect::{Effect, Target};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::dom::{self, Elements};
use crate::error::Result;
use crate::listeners::Listeners;

pub(crate) fn install(elements: &Rc<Elements>, config: &SiteConfig, listeners: &mut Listeners) -> Result<()> {
    if elements.counters.is_empty() {
        return Ok(());
    }
    let mut watch = CounterWatch::new(elements.counters.len());
    let duration_ms = config.counter_duration_ms;
    let on_entries = {
        let elements = Rc::clone(elements);
        move |entries: &[IntersectionObserverEntry], observer: &IntersectionObserver| {
            for entry in entries {
                let target = entry.target();
                let Some(index) = dom::index_of(&elements.counters, &target) else {
                    continue;
                };
                if !watch.on_intersect(index, entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&target);

                let text = target.text_content().unwrap_or_default();
                let Some(spec) = CounterSpec::parse(&text) else {
                    log::debug!("counter {index} shows {text:?}; leaving it as is");
                    continue;
                };
                let animation = CounterAnimation::new(spec, elements.now_ms(), duration_ms);
                step(Rc::clone(&elements), index, animation);
            }
        }
    };
    listeners.observe(config.counter_threshold, &elements.counters, on_entries)?;
    Ok(())
}

/// Write the next frame of `animation` and reschedule until it is done.
fn step(elements: Rc<Elements>, index: usize, animation: CounterAnimation) {
    let scheduler = Rc::clone(&elements);
    let scheduled = scheduler.request_frame(move |now_ms| {
        let frame = animation.sample(now_ms);
        elements.apply(&[Effect::SetText(Target::Counter(index), frame.text)], None);
        if !frame.done {
            step(elements, index, animation);
        }
    });
    if let Err(err) = scheduled {
        log::warn!("counter {index} stopped: {err}");
    }
}
