//! Reveal-on-scroll: elements fade in the first time they enter the viewport.
//!
//! Two paths activate an element: the intersection watcher, and the initial
//! stagger that runs shortly after `load` for elements already on screen.
//! Both go through the same [`OnceSet`], so an element is activated at most
//! once and is never re-evaluated afterwards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::CLASS_ACTIVE;
use crate::effect::{Effect, Target};
use crate::once::OnceSet;

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: OnceSet,
}

impl RevealTracker {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { revealed: OnceSet::new(len) }
    }

    /// Intersection report for element `index`. Returns the activation effect
    /// the first time the element intersects; the caller should then stop
    /// observing it.
    pub fn on_intersect(&mut self, index: usize, intersecting: bool) -> Option<Effect> {
        if !intersecting {
            return None;
        }
        self.activate(index)
    }

    /// Activate element `index` unless it already is.
    pub fn activate(&mut self, index: usize) -> Option<Effect> {
        if self.revealed.trigger(index) {
            Some(Effect::AddClass(Target::Reveal(index), CLASS_ACTIVE))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.has_fired(index)
    }
}

/// `(index, delay_ms)` for every reveal element already above the bottom of
/// the viewport. `tops` are bounding-rect tops in DOM order; the delay grows by
/// `stagger_ms` per DOM index.
#[must_use]
pub fn initial_stagger(tops: &[f64], viewport_height: f64, stagger_ms: u32) -> Vec<(usize, u32)> {
    tops.iter()
        .enumerate()
        .filter(|(_, top)| **top < viewport_height)
        .map(|(i, _)| (i, stagger_delay(i, stagger_ms)))
        .collect()
}

fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(stagger_ms))
}
