//! Character-by-character typing of the hero subtitle.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::effect::{Effect, Target};

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    /// Clear the element before typing starts.
    pub fn start(&mut self) -> Effect {
        self.typed = 0;
        Effect::SetText(Target::Typewriter, String::new())
    }

    /// Type the next character. `None` once the whole text is shown.
    pub fn step(&mut self) -> Option<Effect> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(Effect::SetText(Target::Typewriter, self.chars[..self.typed].iter().collect()))
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}
