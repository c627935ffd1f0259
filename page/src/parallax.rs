//! Hero background parallax.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::effect::{Effect, Target};

/// Layer speeds as a fraction of the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFactors {
    pub gradient: f64,
    pub particles: f64,
}

/// Transforms for the hero layers at `scroll_y`. Once the hero has scrolled
/// out (`scroll_y >= hero_height`) nothing is written and the layers keep
/// their last transform.
#[must_use]
pub fn parallax_effects(scroll_y: f64, hero_height: f64, factors: ParallaxFactors) -> Vec<Effect> {
    if scroll_y >= hero_height {
        return Vec::new();
    }
    vec![
        Effect::SetStyle(Target::HeroGradient, "transform", translate_y(scroll_y * factors.gradient)),
        Effect::SetStyle(Target::HeroParticles, "transform", translate_y(scroll_y * factors.particles)),
    ]
}

fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}
