//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Gateway**: Exchange/verification gateway failures (the mock services
//!   surface these the same way a real backend would)
//! - **State**: Application state management errors (lock failures, invalid
//!   transitions)
//! - **Validation**: Input validation errors (invalid format, missing fields)
//!
//! ## Error Conversion
//!
//! `String` and `&str` convert to `AppError::Gateway`, which keeps the
//! async task boundary (where errors cross the event channel as strings)
//! ergonomic.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String` message. The `#[error]`
/// attribute from `thiserror` provides `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use terminal::core::error::AppError;
///
/// let err = AppError::Validation("Amount must be greater than 0".to_string());
/// assert_eq!(err.to_string(), "Validation error: Amount must be greater than 0");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Gateway (exchange or verification service) failure.
    ///
    /// Covers everything a backend round trip can produce: transport
    /// failures, declined requests, malformed responses.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Application state management error.
    ///
    /// Lock contention or an invalid state transition. Rare; indicates a
    /// design issue rather than a user mistake.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// Invalid format, missing required fields, out-of-range values.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use terminal::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Gateway(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Gateway(msg.to_string())
    }
}
