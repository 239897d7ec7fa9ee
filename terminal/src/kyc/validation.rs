//! Per-step form validation.
//!
//! Each step has a raw form struct holding the UI text buffers, and a
//! validator that converts it into the corresponding validated DTO. Every
//! field is checked independently and ALL failures are collected into one
//! [`FieldErrors`] map, so the user sees the complete picture on a single
//! submit attempt.

use shared::dto::kyc::{DocumentType, DocumentUpload, PersonalInfo, Selfie};

use crate::kyc::wizard::{KycStep, StepData};
use crate::utils::validation::{check_date_shape, check_min_len, check_required, FieldErrors};

/// Raw input buffers for the personal details step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfoForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub address_line1: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Raw input for the document step. Images are opaque references (a file
/// path or upload handle), empty string means not provided.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentForm {
    pub document_type: Option<DocumentType>,
    pub front_image: String,
    pub back_image: String,
}

/// Raw input for the selfie step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelfieForm {
    pub image: String,
}

/// All three step forms, kept together so the account screen can own one
/// value and a restart can clear everything at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KycForms {
    pub personal: PersonalInfoForm,
    pub document: DocumentForm,
    pub selfie: SelfieForm,
}

/// Validate the form for `step`, producing the validated step payload or
/// the full error map. Outcome states have no form and always fail closed.
pub fn validate_step(step: KycStep, forms: &KycForms) -> Result<StepData, FieldErrors> {
    match step {
        KycStep::PersonalInfo => {
            validate_personal_info(&forms.personal).map(StepData::PersonalInfo)
        }
        KycStep::DocumentUpload => validate_document(&forms.document).map(StepData::Document),
        KycStep::Selfie => validate_selfie(&forms.selfie).map(StepData::Selfie),
        _ => Err(FieldErrors::new()),
    }
}

pub fn validate_personal_info(form: &PersonalInfoForm) -> Result<PersonalInfo, FieldErrors> {
    let mut errors = FieldErrors::new();

    let checks: [(&'static str, Option<String>); 8] = [
        (
            "first_name",
            check_min_len(&form.first_name, 2, "First name is required"),
        ),
        (
            "last_name",
            check_min_len(&form.last_name, 2, "Last name is required"),
        ),
        (
            "date_of_birth",
            check_date_shape(&form.date_of_birth, "Invalid date format (YYYY-MM-DD)"),
        ),
        (
            "nationality",
            check_min_len(&form.nationality, 2, "Nationality is required"),
        ),
        (
            "address_line1",
            check_min_len(&form.address_line1, 5, "Address is required"),
        ),
        ("city", check_min_len(&form.city, 2, "City is required")),
        (
            "postal_code",
            check_min_len(&form.postal_code, 4, "Postal code is required"),
        ),
        (
            "country",
            check_min_len(&form.country, 2, "Country is required"),
        ),
    ];
    for (field, failure) in checks {
        if let Some(message) = failure {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(PersonalInfo {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        date_of_birth: form.date_of_birth.clone(),
        nationality: form.nationality.trim().to_string(),
        address_line1: form.address_line1.trim().to_string(),
        city: form.city.trim().to_string(),
        postal_code: form.postal_code.trim().to_string(),
        country: form.country.trim().to_string(),
    })
}

pub fn validate_document(form: &DocumentForm) -> Result<DocumentUpload, FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.document_type.is_none() {
        errors.insert("document_type", "Document type is required".to_string());
    }
    if let Some(message) = check_required(&form.front_image, "Front of document is required.") {
        errors.insert("front_image", message);
    }
    // The back image stays optional for every document kind.

    let document_type = match form.document_type {
        Some(doc_type) if errors.is_empty() => doc_type,
        _ => return Err(errors),
    };
    let back = form.back_image.trim();
    Ok(DocumentUpload {
        document_type,
        front_image: form.front_image.trim().to_string(),
        back_image: (!back.is_empty()).then(|| back.to_string()),
    })
}

pub fn validate_selfie(form: &SelfieForm) -> Result<Selfie, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(message) = check_required(&form.image, "Selfie is required.") {
        errors.insert("image", message);
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Selfie {
        image: form.image.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_personal_form() -> PersonalInfoForm {
        PersonalInfoForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_birth: "1990-01-15".to_string(),
            nationality: "GB".to_string(),
            address_line1: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            postal_code: "EC1A 1AA".to_string(),
            country: "United Kingdom".to_string(),
        }
    }

    #[test]
    fn valid_personal_info_passes() {
        let info = validate_personal_info(&valid_personal_form()).unwrap();
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.date_of_birth, "1990-01-15");
    }

    #[test]
    fn empty_personal_form_reports_every_field() {
        let errors = validate_personal_info(&PersonalInfoForm::default()).unwrap_err();
        for field in [
            "first_name",
            "last_name",
            "date_of_birth",
            "nationality",
            "address_line1",
            "city",
            "postal_code",
            "country",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn errors_are_keyed_to_the_failing_field() {
        let mut form = valid_personal_form();
        form.first_name = "A".to_string();
        form.postal_code = "123".to_string();
        let errors = validate_personal_info(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["first_name"], "First name is required");
        assert_eq!(errors["postal_code"], "Postal code is required");
    }

    #[test]
    fn date_of_birth_must_be_iso_shaped() {
        for bad in ["15-01-1990", "1990/01/15", "1990-1-5", "", "19900115"] {
            let mut form = valid_personal_form();
            form.date_of_birth = bad.to_string();
            let errors = validate_personal_info(&form).unwrap_err();
            assert_eq!(errors["date_of_birth"], "Invalid date format (YYYY-MM-DD)");
        }
    }

    #[test]
    fn document_requires_type_and_front() {
        let errors = validate_document(&DocumentForm::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["document_type"], "Document type is required");
        assert_eq!(errors["front_image"], "Front of document is required.");
    }

    #[test]
    fn back_image_is_optional_for_every_type() {
        for doc_type in DocumentType::all() {
            let form = DocumentForm {
                document_type: Some(*doc_type),
                front_image: "front.png".to_string(),
                back_image: String::new(),
            };
            let doc = validate_document(&form).unwrap();
            assert_eq!(doc.back_image, None);
        }
    }

    #[test]
    fn back_image_is_kept_when_provided() {
        let form = DocumentForm {
            document_type: Some(DocumentType::NationalId),
            front_image: "front.png".to_string(),
            back_image: "back.png".to_string(),
        };
        let doc = validate_document(&form).unwrap();
        assert_eq!(doc.back_image.as_deref(), Some("back.png"));
    }

    #[test]
    fn selfie_requires_image() {
        let errors = validate_selfie(&SelfieForm::default()).unwrap_err();
        assert_eq!(errors["image"], "Selfie is required.");

        let selfie = validate_selfie(&SelfieForm {
            image: "selfie.png".to_string(),
        })
        .unwrap();
        assert_eq!(selfie.image, "selfie.png");
    }

    #[test]
    fn validate_step_dispatches_by_step() {
        let mut forms = KycForms {
            personal: valid_personal_form(),
            ..KycForms::default()
        };
        assert!(validate_step(KycStep::PersonalInfo, &forms).is_ok());
        assert!(validate_step(KycStep::DocumentUpload, &forms).is_err());

        forms.document.document_type = Some(DocumentType::Passport);
        forms.document.front_image = "front.png".to_string();
        assert!(validate_step(KycStep::DocumentUpload, &forms).is_ok());

        // Outcome states have no form to validate
        assert!(validate_step(KycStep::Pending, &forms).is_err());
    }
}
