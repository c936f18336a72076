//! Error types for postboard.
//!
//! Gateway failures are typed ([`GatewayError`]) so the app can log an
//! error code and show a friendly message in the status bar. Process-level
//! failures (terminal setup, logging) use `color_eyre::Result`.
//!
//! | Variant | Meaning | Retryable |
//! |---------|---------|-----------|
//! | Network | Request failed or timed out | Yes (except bad URL) |
//! | Decode | Body was not the expected JSON | No |
//! | NotFound | HTTP 404 | No |
//! | Status | Other non-2xx | 5xx, 408 and 429 only |

mod gateway;

pub use gateway::GatewayError;

/// Type alias for gateway results.
pub type GatewayResult<T> = Result<T, GatewayError>;
