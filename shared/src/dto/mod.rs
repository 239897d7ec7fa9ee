//! # Data Transfer Objects (DTOs)
//!
//! Data structures shared between the GUI client and any future backend.
//!
//! ## Module Organization
//!
//! - [`kyc`] - Identity verification dossier and submission results
//! - [`market`] - Asset catalogue, OHLC candles, order books and news
//! - [`trade`] - Order tickets, receipts, open orders and fills
//! - [`wallet`] - Asset balances and transaction history
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to snake_case strings using `#[serde(rename_all = "snake_case")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod kyc;
pub mod market;
pub mod trade;
pub mod wallet;

pub use kyc::*;
pub use market::*;
pub use trade::*;
pub use wallet::*;
