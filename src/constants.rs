//! Compiled defaults for [`crate::config::OverlayConfig`].
//!
//! `assets/pause_overlay.toml` overrides any of these at startup.

// ── Overlay ───────────────────────────────────────────────────────────────────

/// Pause the simulation while the overlay is shown.
pub const PAUSE_ON_OPEN: bool = true;

/// Show the pointer and route input to the overlay while shown.
pub const SHOW_CURSOR_ON_OPEN: bool = true;

/// Stacking order of the overlay root; above every HUD layer.
pub const OVERLAY_Z_ORDER: i32 = 999;

/// Largest accepted z-order (keeps `GlobalZIndex` clear of engine-reserved layers).
pub const OVERLAY_Z_ORDER_MAX: i32 = 10_000;

// ── Transitions (seconds; 0 disables) ─────────────────────────────────────────

pub const OPEN_FADE_SECS: f32 = 0.3;
pub const CLOSE_FADE_SECS: f32 = 0.2;

/// Fades longer than this are rejected as misconfiguration.
pub const MAX_FADE_SECS: f32 = 5.0;

/// Opacity of the full-screen dim layer once faded in.
pub const OVERLAY_DIM_ALPHA: f32 = 0.70;

// ── Demo world ────────────────────────────────────────────────────────────────

pub const DEMO_BODY_COUNT: usize = 60;
pub const DEMO_SPAWN_HALF_EXTENT: f32 = 500.0;
pub const DEMO_BODY_RADIUS: f32 = 6.0;
pub const DEMO_INITIAL_SPEED: f32 = 120.0;
pub const DEMO_NUDGE_IMPULSE: f32 = 400.0;
