//! Wallet DTOs: asset balances and transaction history rows.

use serde::{Deserialize, Serialize};

/// A held asset with its fiat valuation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetBalance {
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub usd_value: f64,
}

/// One row of account transaction history.
///
/// `tx_type` and `status` are open string sets ("Deposit", "Withdrawal",
/// "Trade", "Fee" / "Completed", "Pending") so new backend values render
/// without a client update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub date: String,
    pub tx_type: String,
    pub asset: String,
    pub amount: f64,
    pub status: String,
    pub details: String,
}
