//! Fire-once bookkeeping for indexed elements.

#[cfg(test)]
#[path = "once_test.rs"]
mod once_test;

/// Remembers which indices have already been triggered.
#[derive(Debug, Clone, Default)]
pub struct OnceSet {
    fired: Vec<bool>,
}

impl OnceSet {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { fired: vec![false; len] }
    }

    /// Mark `index` as fired. Returns `true` only the first time; out-of-range
    /// indices never fire.
    pub fn trigger(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }
}
