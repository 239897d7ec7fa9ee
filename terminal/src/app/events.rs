//! # Application Events
//!
//! Event types for async task communication between background tasks and
//! the main thread.

use shared::dto::kyc::SubmissionResult;
use shared::dto::trade::OrderReceipt;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Verification submission completed
    KycSubmitResult(Result<SubmissionResult, String>),
    /// Order placement completed
    OrderResult(Result<OrderReceipt, String>),
}
