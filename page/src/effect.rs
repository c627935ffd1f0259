//! DOM mutations expressed as data.
//!
//! Behaviors never touch the DOM directly. They return [`Effect`]s naming a
//! [`Target`] from the page's fixed element contract, and the host applies
//! them. Targets the host cannot resolve (optional elements that are absent
//! from the page) are skipped.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

/// An element of the page contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// The fixed navigation bar.
    Navbar,
    /// The collapsible navigation menu panel.
    NavMenu,
    /// The hamburger button that opens the menu.
    MenuButton,
    /// The nth `.nav-link`.
    NavLink(usize),
    /// The nth reveal-tagged element.
    Reveal(usize),
    /// The nth animated number.
    Counter(usize),
    /// Hero background gradient layer.
    HeroGradient,
    /// Hero particle layer.
    HeroParticles,
    /// The nth skill tag.
    SkillTag(usize),
    /// The nth project card.
    ProjectCard(usize),
    /// The nth focusable element inside the open menu.
    MenuFocusable(usize),
    /// The element carrying the typewriter text.
    Typewriter,
}

/// A single DOM mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    SetAttribute(Target, &'static str, String),
    SetStyle(Target, &'static str, String),
    SetText(Target, String),
    Focus(Target),
    /// Smooth-scroll the window to an absolute vertical offset.
    ScrollTo { top: f64 },
    /// Suppress the browser default for the event being handled.
    PreventDefault,
}

impl Effect {
    /// The element this effect mutates, if it targets one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::AddClass(target, _)
            | Self::RemoveClass(target, _)
            | Self::SetAttribute(target, _, _)
            | Self::SetStyle(target, _, _)
            | Self::SetText(target, _)
            | Self::Focus(target) => Some(*target),
            Self::ScrollTo { .. } | Self::PreventDefault => None,
        }
    }
}
