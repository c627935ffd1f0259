//! Shared constants for the page behaviors: marker classes, thresholds and timings.

// ── Marker classes ──────────────────────────────────────────────

/// Added to the navbar once the page is scrolled past [`SCROLL_THRESHOLD_PX`].
pub const CLASS_SCROLLED: &str = "scrolled";

/// Open menu, current nav link, revealed element.
pub const CLASS_ACTIVE: &str = "active";

/// Added to `<body>` when the window `load` event fires.
pub const CLASS_LOADED: &str = "loaded";

/// Attribute on `<html>` read by the stylesheet's theme rules.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset past which the navbar is marked scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Extra lead applied above each section when picking the active nav link.
pub const SECTION_OFFSET_PX: f64 = 100.0;

/// Hero gradient moves at this fraction of the scroll offset.
pub const PARALLAX_GRADIENT_FACTOR: f64 = 0.3;

/// Hero particle layer moves at this fraction of the scroll offset.
pub const PARALLAX_PARTICLE_FACTOR: f64 = 0.15;

// ── Menu / resize ───────────────────────────────────────────────

/// Viewport width above which the mobile menu is force-closed.
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before a resize is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Reveal / counters ───────────────────────────────────────────

/// Fraction of a reveal element that must be visible to trigger it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fraction of a counter that must be visible to start counting.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Length of one counter animation.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Per-index delay for the initial viewport reveal.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Delay between `load` and the initial viewport reveal.
pub const PRELOAD_DELAY_MS: u32 = 100;

// ── Pointer effects ─────────────────────────────────────────────

/// Pointer offset (px) per degree of card tilt.
pub const TILT_DIVISOR: f64 = 20.0;

// ── Typewriter ──────────────────────────────────────────────────

/// Delay between typed characters.
pub const TYPEWRITER_SPEED_MS: u32 = 100;

// ── Console ─────────────────────────────────────────────────────

/// Printed to the developer console on startup.
pub const BANNER: &str = r"
  _ __   ___  _ __| |_ / _| ___ | (_) ___
 | '_ \ / _ \| '__| __| |_ / _ \| | |/ _ \
 | |_) | (_) | |  | |_|  _| (_) | | | (_) |
 | .__/ \___/|_|   \__|_|  \___/|_|_|\___/
 |_|
 Looking under the hood? Built in Rust, compiled to WebAssembly.
";
