//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Gateway traits for dependency injection
//!   (`KycGateway`, `OrderGateway`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use terminal::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! Gateway traits let the app run against mock services in demo mode and
//! against recording doubles in tests:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use terminal::core::service::KycGateway;
//! use terminal::services::kyc::MockKycGateway;
//!
//! let gateway: Arc<dyn KycGateway> = Arc::new(MockKycGateway::new());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::{KycGateway, OrderGateway};
