//! # Shared Data Transfer Objects Library
//!
//! This library defines the data types used across the Vantage workspace.
//! All DTOs use JSON serialization via `serde` so they can be exchanged with
//! a verification or exchange backend unchanged once one exists.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::kyc`]**: Identity verification (KYC) payloads
//!   - **[`dto::market`]**: Market data and charting DTOs
//!   - **[`dto::trade`]**: Order tickets, receipts and fills
//!   - **[`dto::wallet`]**: Balances and transaction history
//! - **[`utils`]**: Shared formatting helpers
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Enums serialize to lowercase/snake_case strings via `#[serde(rename_all = ...)]`
//! - All structs implement both `Serialize` and `Deserialize`

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
