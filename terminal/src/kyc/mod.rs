//! # KYC Onboarding Wizard
//!
//! The identity verification flow: three forward-only steps (personal
//! details, identity document, selfie) followed by a single submission to
//! the verification gateway.
//!
//! The flow is split cleanly from the UI:
//!
//! - **[`wizard`]**: the state machine. An immutable [`wizard::WizardState`]
//!   value and a pure reducer, `state.apply(event) -> state`. All
//!   sequencing rules (forward-only order, submit guard, restart rules)
//!   live here and are unit-tested without any GUI or async machinery.
//! - **[`validation`]**: per-step form validation. Each step's raw text
//!   buffers are checked field by field, collecting every error into a
//!   [`crate::utils::validation::FieldErrors`] map before returning.
//!
//! The app layer wires the two together: `handlers::kyc` validates the
//! current step and feeds `WizardEvent`s to the reducer, `tasks::kyc`
//! drives the async submission.

pub mod validation;
pub mod wizard;

pub use validation::{DocumentForm, KycForms, PersonalInfoForm, SelfieForm};
pub use wizard::{CollectedData, KycStep, StepData, WizardEvent, WizardState};
