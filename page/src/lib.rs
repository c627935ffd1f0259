//! Browser-free behavior core for the portfolio page.
//!
//! Every interactive behavior of the page lives here as a small state holder
//! that consumes simulated inputs (scroll offsets, pointer positions, key
//! presses, timestamps) and returns [`effect::Effect`]s. The `site` crate owns
//! the DOM: it feeds real events in and applies the effects that come out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`effect`] | DOM mutations as data, and the element contract they target |
//! | [`theme`] | Light/dark preference and its persistence |
//! | [`menu`] | Mobile menu open state, scroll lock and focus trap |
//! | [`scroll`] | Frame coalescing, navbar state, in-page anchors |
//! | [`sections`] | Active nav link for the section in view |
//! | [`parallax`] | Hero layer transforms |
//! | [`reveal`] | Once-only reveal on scroll and the initial stagger |
//! | [`counter`] | Counting-number parsing and easing |
//! | [`tilt`] | Skill tag hover and project card tilt |
//! | [`typewriter`] | Hero subtitle typing effect |
//! | [`housekeeping`] | Resize handling and the `load` marker |
//! | [`debounce`] | Last-write-wins timer bookkeeping |
//! | [`once`] | Fire-once index sets |
//! | [`config`] | Tunables, JSON overrides and validation |
//! | [`consts`] | Default thresholds, timings and marker classes |

pub mod config;
pub mod consts;
pub mod counter;
pub mod debounce;
pub mod effect;
pub mod housekeeping;
pub mod menu;
pub mod once;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod tilt;
pub mod typewriter;
