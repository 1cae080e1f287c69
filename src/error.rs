//! Configuration error types.
//!
//! The overlay state machine itself never fails: forbidden requests are
//! ignored.  The only fallible input is `assets/pause_overlay.toml`, and even
//! there an error is reported and replaced by the compiled default rather than
//! aborting the game.

use std::fmt;

use crate::constants::{MAX_FADE_SECS, OVERLAY_Z_ORDER_MAX};

/// Top-level error enum for overlay configuration.
#[derive(Debug)]
pub enum OverlayError {
    /// The config file exists but is not valid TOML for [`crate::config::OverlayConfig`].
    ConfigParse {
        /// Path that was read.
        path: String,
        /// Parser message.
        message: String,
    },

    /// A fade duration is negative, non-finite, or unreasonably long.
    InvalidFade {
        /// Config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// The overlay z-order is outside the range the UI layer accepts.
    InvalidZOrder {
        value: i32,
    },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::ConfigParse { path, message } => {
                write!(f, "failed to parse '{}': {}", path, message)
            }
            OverlayError::InvalidFade { name, value } => write!(
                f,
                "'{}' = {} is outside safe range [0.0, {}]",
                name, value, MAX_FADE_SECS
            ),
            OverlayError::InvalidZOrder { value } => write!(
                f,
                "'z_order' = {} is outside safe range [0, {}]",
                value, OVERLAY_Z_ORDER_MAX
            ),
        }
    }
}

impl std::error::Error for OverlayError {}

/// Convenience alias: a `Result` using `OverlayError` as the error type.
pub type OverlayResult<T> = Result<T, OverlayError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is a finite duration in `[0, MAX_FADE_SECS]`.
///
/// Zero is valid and disables the transition.
pub fn validate_fade_secs(name: &'static str, value: f32) -> OverlayResult<()> {
    if value.is_finite() && (0.0..=MAX_FADE_SECS).contains(&value) {
        Ok(())
    } else {
        Err(OverlayError::InvalidFade { name, value })
    }
}

pub fn validate_z_order(value: i32) -> OverlayResult<()> {
    if (0..=OVERLAY_Z_ORDER_MAX).contains(&value) {
        Ok(())
    } else {
        Err(OverlayError::InvalidZOrder { value })
    }
}
