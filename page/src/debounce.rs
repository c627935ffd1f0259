//! Last-write-wins debouncing.
//!
//! Each [`Debounce::arm`] supersedes the previous one: only the newest
//! [`Ticket`] can fire, and only once its quiet period has elapsed.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Handle returned by [`Debounce::arm`], passed back when the timer elapses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    generation: u64,
    due_at_ms: f64,
}

impl Ticket {
    #[must_use]
    pub fn due_at_ms(&self) -> f64 {
        self.due_at_ms
    }
}

#[derive(Debug, Clone)]
pub struct Debounce {
    delay_ms: f64,
    generation: u64,
    pending: bool,
}

impl Debounce {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms: f64::from(delay_ms), generation: 0, pending: false }
    }

    /// Record a triggering event at `now_ms`, invalidating earlier tickets.
    pub fn arm(&mut self, now_ms: f64) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket { generation: self.generation, due_at_ms: now_ms + self.delay_ms }
    }

    /// Whether `ticket` should run now. True at most once, for the newest
    /// ticket, at or after its due time.
    pub fn fire(&mut self, ticket: Ticket, now_ms: f64) -> bool {
        if !self.pending || ticket.generation != self.generation || now_ms < ticket.due_at_ms {
            return false;
        }
        self.pending = false;
        true
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
