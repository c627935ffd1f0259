//! Page lifecycle chores: resize handling and the `load` marker.

#[cfg(test)]
#[path = "housekeeping_test.rs"]
mod housekeeping_test;

use crate::consts::CLASS_LOADED;
use crate::debounce::{Debounce, Ticket};
use crate::effect::{Effect, Target};
use crate::menu::MobileMenu;

/// Closes the mobile menu once the viewport settles above the breakpoint.
#[derive(Debug, Clone)]
pub struct ResizeWatch {
    debounce: Debounce,
    breakpoint: f64,
}

impl ResizeWatch {
    #[must_use]
    pub fn new(debounce_ms: u32, breakpoint: f64) -> Self {
        Self { debounce: Debounce::new(debounce_ms), breakpoint }
    }

    /// A `resize` event arrived; schedule a check for the returned ticket.
    pub fn on_resize(&mut self, now_ms: f64) -> Ticket {
        self.debounce.arm(now_ms)
    }

    /// The timer for `ticket` elapsed. Closes the menu if this is the latest
    /// resize, the viewport is wider than the breakpoint and the menu is open.
    pub fn on_timer(&mut self, ticket: Ticket, now_ms: f64, width: f64, menu: &mut MobileMenu) -> Vec<Effect> {
        if !self.debounce.fire(ticket, now_ms) {
            return Vec::new();
        }
        if width > self.breakpoint && menu.is_open() {
            menu.close()
        } else {
            Vec::new()
        }
    }
}

/// Whether `document.readyState` says the `load` event has already fired.
#[must_use]
pub fn already_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Marks `<body>` as loaded so CSS transitions can start.
#[must_use]
pub fn on_load() -> Vec<Effect> {
    vec![Effect::AddClass(Target::Body, CLASS_LOADED)]
}
