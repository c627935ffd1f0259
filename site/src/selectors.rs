//! CSS selectors for the page's element contract.
//!
//! The four required elements abort mounting when absent; everything else is
//! optional and its behavior is skipped when no element matches.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

pub const NAVBAR: &str = "#navbar";
pub const NAV_MENU: &str = "#nav-menu";
pub const MENU_BUTTON: &str = "#mobile-menu-btn";
pub const THEME_TOGGLE: &str = "#theme-toggle";

/// Elements without which the page does not mount.
pub const REQUIRED: [&str; 4] = [NAVBAR, NAV_MENU, MENU_BUTTON, THEME_TOGGLE];

pub const NAV_LINKS: &str = ".nav-link";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SECTIONS: &str = "section[id]";
pub const REVEALS: &str = ".reveal";
pub const HERO: &str = ".hero";
pub const HERO_GRADIENT: &str = ".hero-gradient";
pub const HERO_PARTICLES: &str = ".hero-particles";
pub const SKILL_TAGS: &str = ".skill-tag";
pub const PROJECT_CARDS: &str = ".project-card";
pub const COUNTERS: &str = ".stat-number";
pub const TYPEWRITER: &str = "[data-typewriter]";

/// Focus-trap members, queried inside the nav menu.
pub const MENU_FOCUSABLES: &str = "a, button";

/// Text to type, when set and non-empty; otherwise the element's own text.
pub const TYPEWRITER_ATTRIBUTE: &str = "data-typewriter";

/// `<script type="application/json">` holding config overrides.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
