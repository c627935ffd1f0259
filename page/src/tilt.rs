//! Pointer-driven transforms for skill tags and project cards.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::effect::{Effect, Target};

const SKILL_LIFTED: &str = "translateY(-3px) scale(1.05)";
const SKILL_RESTING: &str = "translateY(0) scale(1)";
const CARD_RESTING: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Client-space bounding box of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer entered or left a skill tag.
#[must_use]
pub fn skill_hover(index: usize, entered: bool) -> Effect {
    let transform = if entered { SKILL_LIFTED } else { SKILL_RESTING };
    Effect::SetStyle(Target::SkillTag(index), "transform", transform.to_owned())
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at client `(x, y)` over
/// `rect`. The card leans toward the pointer, one degree per `divisor` pixels
/// from its center.
#[must_use]
pub fn tilt_angles(rect: Rect, x: f64, y: f64, divisor: f64) -> (f64, f64) {
    let local_x = x - rect.left;
    let local_y = y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    ((local_y - center_y) / divisor, (center_x - local_x) / divisor)
}

/// Pointer moved over project card `index`.
#[must_use]
pub fn card_tilt(index: usize, rect: Rect, x: f64, y: f64, divisor: f64) -> Effect {
    let (rotate_x, rotate_y) = tilt_angles(rect, x, y, divisor);
    Effect::SetStyle(
        Target::ProjectCard(index),
        "transform",
        format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-8px)"),
    )
}

/// Pointer left project card `index`.
#[must_use]
pub fn card_reset(index: usize) -> Effect {
    Effect::SetStyle(Target::ProjectCard(index), "transform", CARD_RESTING.to_owned())
}
