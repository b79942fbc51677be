//! Crate-level error types.
//!
//! The only fallible operation in this crate is decoding a purchase
//! confirmation payload, so [`PaylinkError`] carries a single variant.
//! Errors are surfaced immediately to the caller; nothing is retried or
//! recovered internally.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaylinkError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PaylinkError {
    /// The wire payload is missing a required key or a key holds an
    /// incompatibly-typed value.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
