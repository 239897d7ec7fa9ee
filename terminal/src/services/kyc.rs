//! Mock identity verification gateway.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use shared::dto::kyc::{KycSubmission, SubmissionResult};
use tracing::info;

use crate::core::service::KycGateway;

/// Stand-in for a verification provider. Sleeps for a fixed delay, then
/// accepts the dossier 80% of the time unless a forced outcome was
/// configured.
pub struct MockKycGateway {
    delay: Duration,
    /// Forced outcome for demos and tests; random when `None`.
    outcome: Option<SubmissionResult>,
}

impl MockKycGateway {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
            outcome: None,
        }
    }

    pub fn with_outcome(outcome: SubmissionResult) -> Self {
        Self {
            delay: Duration::from_secs(2),
            outcome: Some(outcome),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockKycGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KycGateway for MockKycGateway {
    async fn submit_kyc(&self, submission: KycSubmission) -> Result<SubmissionResult, String> {
        info!(
            user_id = %submission.user_id,
            document_type = ?submission.document.document_type,
            "submitting verification dossier (mock)"
        );
        tokio::time::sleep(self.delay).await;

        let result = match &self.outcome {
            Some(outcome) => outcome.clone(),
            None => {
                if rand::rng().random_bool(0.8) {
                    SubmissionResult::accepted()
                } else {
                    SubmissionResult::declined(
                        "We could not verify the submitted documents. Please try again.",
                    )
                }
            }
        };
        info!(
            user_id = %submission.user_id,
            success = result.success,
            "verification dossier processed (mock)"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::kyc::{DocumentType, DocumentUpload, PersonalInfo, Selfie};

    fn submission() -> KycSubmission {
        KycSubmission {
            user_id: "user-1".to_string(),
            personal_info: PersonalInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                date_of_birth: "1990-01-15".to_string(),
                nationality: "GB".to_string(),
                address_line1: "12 Analytical Row".to_string(),
                city: "London".to_string(),
                postal_code: "EC1A 1AA".to_string(),
                country: "United Kingdom".to_string(),
            },
            document: DocumentUpload {
                document_type: DocumentType::Passport,
                front_image: "front.png".to_string(),
                back_image: None,
            },
            selfie: Selfie {
                image: "selfie.png".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn forced_outcome_is_returned() {
        let gateway = MockKycGateway::with_outcome(SubmissionResult::declined("no"))
            .with_delay(Duration::from_millis(1));
        let result = gateway.submit_kyc(submission()).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("no"));

        let gateway = MockKycGateway::with_outcome(SubmissionResult::accepted())
            .with_delay(Duration::from_millis(1));
        let result = gateway.submit_kyc(submission()).await.unwrap();
        assert!(result.success);
    }
}
