//! Registry of installed event listeners and intersection observers.
//!
//! Every closure handed to the browser is kept here so it stays alive while
//! attached and can be detached again by [`Listeners::teardown`].

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

type Handler = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Default)]
pub(crate) struct Listeners {
    handlers: Vec<(EventTarget, &'static str, Handler)>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl Listeners {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Propagates a failed `addEventListener`.
    pub fn on(&mut self, target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<()> {
        let closure = Handler::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.handlers.push((target.clone(), event, closure));
        Ok(())
    }

    /// Observe `elements` at `threshold` visibility; `on_entries` receives each
    /// batch of entries together with the observer so it can unobserve.
    ///
    /// # Errors
    ///
    /// Propagates a failed observer construction.
    pub fn observe(
        &mut self,
        threshold: f64,
        elements: &[HtmlElement],
        mut on_entries: impl FnMut(&[IntersectionObserverEntry], &IntersectionObserver) + 'static,
    ) -> Result<IntersectionObserver> {
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .collect::<Vec<_>>();
            on_entries(&entries, &observer);
        });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for el in elements {
            observer.observe(el);
        }
        self.observers.push((observer.clone(), callback));
        Ok(observer)
    }

    /// Detach every listener and disconnect every observer.
    pub fn teardown(&mut self) {
        for (target, event, closure) in self.handlers.drain(..) {
            if let Err(err) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        }
        for (observer, _callback) in self.observers.drain(..) {
            observer.disconnect();
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len() + self.observers.len()
    }
}
