//! Application configuration
//!
//! Centralized configuration for the PetScan frontend.
//! In development these are hardcoded. In production they could be
//! patched at build time or loaded from a config endpoint.

/// Prediction endpoint URL.
///
/// Relative path, resolved against the origin that serves the app.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Delay before a successful prediction replaces the analyzing
/// placeholder, in milliseconds.
pub const REVEAL_DELAY_MS: u32 = 1_200;

/// Extra delay before the confidence bar starts filling, in milliseconds.
pub const BAR_DELAY_MS: u32 = 100;

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_TTL_MS: u32 = 3_000;

/// Duration of the notification exit animation, in milliseconds.
///
/// Must match the `slide-out` animation length in `styles.css`.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Cosmetic delays used by the predict flow and the notification stack.
///
/// Components take this as an optional prop so the defaults apply
/// everywhere except where a caller needs faster timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Milliseconds between receiving a prediction and revealing it.
    pub reveal_ms: u32,
    /// Milliseconds between revealing a prediction and filling the bar.
    pub bar_ms: u32,
    /// Milliseconds a notification stays fully visible.
    pub notification_ttl_ms: u32,
    /// Milliseconds the notification exit animation runs.
    pub notification_exit_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            reveal_ms: REVEAL_DELAY_MS,
            bar_ms: BAR_DELAY_MS,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
        }
    }
}
