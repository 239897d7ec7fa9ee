//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Field-level input validation primitives
//! - **[`runtime`]**: Global Tokio runtime for async work
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (number formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
