//! Scroll-driven navbar state, frame coalescing and in-page anchor scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::CLASS_SCROLLED;
use crate::effect::{Effect, Target};

/// Limits scroll work to one animation frame at a time.
///
/// A listener calls [`FrameGate::request`] on every scroll event and only
/// schedules a frame when it returns `true`; the frame callback calls
/// [`FrameGate::release`] once it has run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no frame is outstanding, marking one as scheduled.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn release(&mut self) {
        self.ticking = false;
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

/// Navbar marker for the current scroll offset.
#[must_use]
pub fn navbar_effect(scroll_y: f64, threshold: f64) -> Effect {
    if scroll_y > threshold {
        Effect::AddClass(Target::Navbar, CLASS_SCROLLED)
    } else {
        Effect::RemoveClass(Target::Navbar, CLASS_SCROLLED)
    }
}

/// Element id an in-page link points at, or `None` for bare `#` and
/// non-fragment hrefs.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(fragment) }
}

/// Effects for a click on an in-page link whose target sits at
/// `target_offset_top`; the navbar height is subtracted so the section is not
/// hidden under the fixed bar.
#[must_use]
pub fn anchor_effects(target_offset_top: f64, navbar_height: f64) -> Vec<Effect> {
    vec![
        Effect::PreventDefault,
        Effect::ScrollTo { top: target_offset_top - navbar_height },
    ]
}
