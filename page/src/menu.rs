//! Mobile navigation drawer: open/close state, scroll lock and focus trap.
//!
//! The open state is mirrored as the `active` class on both the menu button
//! and the menu panel; while open, `<body>` scrolling is locked.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::CLASS_ACTIVE;
use crate::effect::{Effect, Target};

/// Position of keyboard focus relative to the menu's focusable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusRing {
    /// Index of the focused element among the focusables, if focus is inside.
    pub focused: Option<usize>,
    /// Number of focusable elements in the menu.
    pub count: usize,
}

impl FocusRing {
    #[must_use]
    pub fn new(focused: Option<usize>, count: usize) -> Self {
        Self { focused, count }
    }

    fn is_first(self) -> bool {
        self.count > 0 && self.focused == Some(0)
    }

    fn is_last(self) -> bool {
        self.count > 0 && self.focused == Some(self.count - 1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu between open and closed.
    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.open { self.close() } else { self.open() }
    }

    /// Clear both markers and the scroll lock. Safe to call when closed.
    pub fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        vec![
            Effect::RemoveClass(Target::MenuButton, CLASS_ACTIVE),
            Effect::RemoveClass(Target::NavMenu, CLASS_ACTIVE),
            Effect::SetStyle(Target::Body, "overflow", String::new()),
        ]
    }

    fn open(&mut self) -> Vec<Effect> {
        self.open = true;
        vec![
            Effect::AddClass(Target::MenuButton, CLASS_ACTIVE),
            Effect::AddClass(Target::NavMenu, CLASS_ACTIVE),
            Effect::SetStyle(Target::Body, "overflow", "hidden".to_owned()),
        ]
    }

    /// Handle a document-level keydown.
    ///
    /// `Escape` closes an open menu. `Tab` wraps from the last focusable to
    /// the first, `Shift+Tab` from the first to the last; anywhere else the
    /// browser's tab order is left alone.
    pub fn on_key(&mut self, key: &str, shift: bool, ring: FocusRing) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        match key {
            "Escape" => self.close(),
            "Tab" if shift && ring.is_first() => vec![
                Effect::PreventDefault,
                Effect::Focus(Target::MenuFocusable(ring.count - 1)),
            ],
            "Tab" if !shift && ring.is_last() => {
                vec![Effect::PreventDefault, Effect::Focus(Target::MenuFocusable(0))]
            }
            _ => Vec::new(),
        }
    }
}
