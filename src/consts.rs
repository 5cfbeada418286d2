//! Shared tuning constants for the page behavior layer.
//!
//! Every threshold, delay, and preset the interaction logic depends on lives
//! here so the numbers stay greppable in one place.

// ── Navigation ──────────────────────────────────────────────────────────────

/// Viewport width in logical pixels above which the mobile menu auto-closes.
pub const DESKTOP_BREAKPOINT_PX: f64 = 992.0;

/// Quiet period after the last resize event before the breakpoint check runs.
pub const RESIZE_SETTLE_MS: u32 = 250;

// ── Section tracking ────────────────────────────────────────────────────────

/// Offset subtracted from a section's top edge when matching the scroll
/// position against section trigger windows.
pub const SECTION_PROBE_OFFSET_PX: f64 = 100.0;

/// Scroll offset past which the header switches to the elevated shadow.
pub const HEADER_ELEVATION_PX: f64 = 50.0;

/// Header box-shadow at or below the elevation threshold.
pub const HEADER_SHADOW_RESTING: &str = "0 2px 20px var(--shadow-color)";

/// Header box-shadow past the elevation threshold.
pub const HEADER_SHADOW_ELEVATED: &str = "0 2px 30px var(--shadow-color)";

// ── Theme ───────────────────────────────────────────────────────────────────

/// Local-storage key holding the persisted theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Reveal animation ────────────────────────────────────────────────────────

/// Fraction of a reveal target that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay before the first hero element reveals after the page becomes ready.
pub const HERO_REVEAL_DELAY_MS: u32 = 100;

/// Additional reveal delay per hero element ordinal.
pub const HERO_REVEAL_STAGGER_MS: u32 = 200;
