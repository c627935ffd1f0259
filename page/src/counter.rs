//! Counting-number effect for the stats strip.
//!
//! The element's own text is the source of truth: `"250+"` counts up to 250
//! and keeps its `+`, `"98%"` keeps its `%`, and `"5M+"` counts in tenths of
//! a million so the display can step through `0M+ .. 5M+`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::once::OnceSet;

/// Decoration re-appended to the animated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// Value is tenths of millions, shown as `<n>M+`.
    Millions,
    Percent,
    Plus,
    Bare,
}

/// Parsed counter target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub suffix: Suffix,
}

impl CounterSpec {
    /// Recover the target and decoration from displayed text. Returns `None`
    /// when the text has no leading number; such elements keep their text.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (target, suffix) = if text.contains('M') {
            (leading_float(text)? * 10.0, Suffix::Millions)
        } else if text.contains('%') {
            (leading_int(text)?, Suffix::Percent)
        } else if text.contains('+') {
            (leading_int(text)?, Suffix::Plus)
        } else {
            (leading_int(text)?, Suffix::Bare)
        };
        Some(Self { target, suffix })
    }

    /// Display text for an in-progress integer value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self.suffix {
            Suffix::Millions => format!("{}M+", whole((value / 10.0).round())),
            Suffix::Percent => format!("{}%", whole(value)),
            Suffix::Plus => format!("{}+", whole(value)),
            Suffix::Bare => whole(value),
        }
    }
}

/// `1 − (1 − t)^4`.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// One rendered step of a running animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// A counter animating from zero to its target.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    spec: CounterSpec,
    start: f64,
    started_at_ms: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(spec: CounterSpec, started_at_ms: f64, duration_ms: f64) -> Self {
        Self { spec, start: 0.0, started_at_ms, duration_ms }
    }

    /// Progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Integer value shown at `now_ms`.
    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let eased = ease_out_quart(self.progress(now_ms));
        (eased * (self.spec.target - self.start) + self.start).floor()
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> CounterFrame {
        CounterFrame {
            text: self.spec.format(self.value_at(now_ms)),
            done: self.progress(now_ms) >= 1.0,
        }
    }
}

/// Once-only start bookkeeping for the counters on a page.
#[derive(Debug, Clone, Default)]
pub struct CounterWatch {
    started: OnceSet,
}

impl CounterWatch {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { started: OnceSet::new(len) }
    }

    /// Returns `true` the first time counter `index` is reported visible; the
    /// caller stops observing it and starts the animation.
    pub fn on_intersect(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && self.started.trigger(index)
    }
}

// Adding 0.0 turns -0.0 into 0.0 so nothing renders as "-0".
fn whole(value: f64) -> String {
    format!("{:.0}", value + 0.0)
}

fn leading_int(text: &str) -> Option<f64> {
    let (sign, rest) = split_sign(text.trim_start());
    let digits = digit_run(rest);
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<f64>() {
        Ok(value) => Some(sign * value),
        Err(_) => None,
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let (sign, rest) = split_sign(text.trim_start());
    let int_part = digit_run(rest);
    let frac_part = rest[int_part.len()..]
        .strip_prefix('.')
        .map(digit_run)
        .unwrap_or_default();
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let literal = format!("{}.{}", if int_part.is_empty() { "0" } else { int_part }, frac_part);
    match literal.parse::<f64>() {
        Ok(value) => Some(sign * value),
        Err(_) => None,
    }
}

fn split_sign(text: &str) -> (f64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1.0, rest)
    } else {
        (1.0, text.strip_prefix('+').unwrap_or(text))
    }
}

fn digit_run(text: &str) -> &str {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    &text[..end]
}
