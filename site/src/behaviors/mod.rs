//! DOM wiring for each page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule installs the listeners for one behavior from the `page`
//! crate and applies the effects it returns. Behaviors share only the resolved
//! [`crate::dom::Elements`], plus the mobile menu state (closed by both the
//! menu triggers and the resize watcher) and the reveal handle (driven by
//! both the observer and the load-time stagger).

pub(crate) mod counter;
pub(crate) mod hover;
pub(crate) mod lifecycle;
pub(crate) mod menu;
pub(crate) mod reveal;
pub(crate) mod scroll;
pub(crate) mod theme;
