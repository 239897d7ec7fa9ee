//! Identity verification (KYC) DTOs.
//!
//! A verification dossier is assembled in three sections (personal details,
//! identity document, selfie) and submitted as a single [`KycSubmission`].
//! The types here hold *validated* data only; raw form buffers live in the
//! client and are converted by its validation layer.

use serde::{Deserialize, Serialize};

/// Accepted identity document kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Passport,
    DriversLicense,
    NationalId,
}

impl DocumentType {
    /// All accepted document kinds, in display order.
    pub fn all() -> &'static [DocumentType] {
        &[
            DocumentType::Passport,
            DocumentType::DriversLicense,
            DocumentType::NationalId,
        ]
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::DriversLicense => "Driver's License",
            DocumentType::NationalId => "National ID",
        }
    }
}

/// Validated personal details section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// Strict `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub nationality: String,
    pub address_line1: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Validated identity document section.
///
/// Images are carried as opaque references (a file path or upload handle),
/// never raw bytes. The back image is optional for every document kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentUpload {
    pub document_type: DocumentType,
    pub front_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
}

/// Validated selfie section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selfie {
    pub image: String,
}

/// Complete verification dossier sent to the verification service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KycSubmission {
    pub user_id: String,
    pub personal_info: PersonalInfo,
    pub document: DocumentUpload,
    pub selfie: Selfie,
}

/// Outcome of a verification submission.
///
/// `success: false` means the service processed the dossier and declined it;
/// transport failures are reported separately as errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionResult {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_serializes_snake_case() {
        let json = serde_json::to_string(&DocumentType::DriversLicense).unwrap();
        assert_eq!(json, "\"drivers_license\"");

        let parsed: DocumentType = serde_json::from_str("\"national_id\"").unwrap();
        assert_eq!(parsed, DocumentType::NationalId);
    }

    #[test]
    fn submission_result_omits_empty_message() {
        let json = serde_json::to_string(&SubmissionResult::accepted()).unwrap();
        assert_eq!(json, "{\"success\":true}");

        let declined = SubmissionResult::declined("document unreadable");
        let json = serde_json::to_string(&declined).unwrap();
        assert!(json.contains("document unreadable"));
    }

    #[test]
    fn document_upload_omits_missing_back_image() {
        let doc = DocumentUpload {
            document_type: DocumentType::Passport,
            front_image: "passport-front.png".to_string(),
            back_image: None,
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("back_image"));
    }
}
