//! # Service Traits
//!
//! Gateway traits for dependency injection, enabling better testability
//! and modularity.
//!
//! Methods return `Result<T, String>` rather than [`crate::core::AppError`]
//! because results cross the async event channel back to the UI thread,
//! where only the display message survives.

use async_trait::async_trait;
use shared::dto::kyc::{KycSubmission, SubmissionResult};
use shared::dto::trade::{OrderReceipt, OrderTicket};

/// Identity verification gateway.
///
/// This trait allows for dependency injection and mocking in tests. The
/// app holds it as `Arc<dyn KycGateway>`; production wiring injects the
/// mock gateway (the platform runs entirely on placeholder data), tests
/// inject recording doubles.
#[async_trait]
pub trait KycGateway: Send + Sync {
    /// Submit a complete verification dossier.
    ///
    /// `Ok(result)` means the service processed the dossier; `result.success`
    /// says whether it was accepted. `Err` is a transport-level failure.
    async fn submit_kyc(&self, submission: KycSubmission) -> Result<SubmissionResult, String>;
}

/// Exchange order gateway.
///
/// Same injection pattern as [`KycGateway`].
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Place a validated order ticket.
    async fn place_order(&self, ticket: OrderTicket) -> Result<OrderReceipt, String>;
}
