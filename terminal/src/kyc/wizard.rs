//! Verification wizard state machine.
//!
//! [`WizardState`] is an immutable value; every transition goes through the
//! pure reducer [`WizardState::apply`], which returns a new state and never
//! mutates. The UI renders whatever state says, handlers only produce
//! events. This keeps the sequencing rules in one tested place:
//!
//! - steps run forward-only: personal info, then document, then selfie
//! - submission only happens from the selfie step with a complete dossier
//! - at most one submission is in flight at a time
//! - a failed submission keeps the user on the selfie step with data intact
//! - only a rejected verification can be restarted

use serde::{Deserialize, Serialize};
use shared::dto::kyc::{DocumentUpload, KycSubmission, PersonalInfo, Selfie};

/// One stage of the verification flow.
///
/// The first three are active steps the user works through in order; the
/// last three are outcome states. `Verified` and `Rejected` are never
/// produced by the reducer itself, they arrive as externally-known statuses
/// (a prior review) at initialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStep {
    PersonalInfo,
    DocumentUpload,
    Selfie,
    Pending,
    Verified,
    Rejected,
}

impl KycStep {
    /// The active steps, in the order the user works through them.
    pub fn active() -> &'static [KycStep] {
        &[KycStep::PersonalInfo, KycStep::DocumentUpload, KycStep::Selfie]
    }

    /// Display title for step headers.
    pub fn title(&self) -> &'static str {
        match self {
            KycStep::PersonalInfo => "Personal Information",
            KycStep::DocumentUpload => "Document Upload",
            KycStep::Selfie => "Selfie Check",
            KycStep::Pending => "Verification Pending",
            KycStep::Verified => "Verified",
            KycStep::Rejected => "Verification Rejected",
        }
    }

    /// Whether this is one of the three form steps.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            KycStep::PersonalInfo | KycStep::DocumentUpload | KycStep::Selfie
        )
    }

    /// Completion percentage shown by the progress bar, `None` for outcome
    /// states. `(index + 1) / step_count * 100`.
    pub fn progress_percent(&self) -> Option<f32> {
        let steps = Self::active();
        let idx = steps.iter().position(|s| s == self)?;
        Some((idx + 1) as f32 / steps.len() as f32 * 100.0)
    }

    fn next_active(&self) -> Option<KycStep> {
        match self {
            KycStep::PersonalInfo => Some(KycStep::DocumentUpload),
            KycStep::DocumentUpload => Some(KycStep::Selfie),
            _ => None,
        }
    }
}

/// Validated data gathered so far, one slot per active step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedData {
    pub personal_info: Option<PersonalInfo>,
    pub document: Option<DocumentUpload>,
    pub selfie: Option<Selfie>,
}

/// Validated payload for one completed step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepData {
    PersonalInfo(PersonalInfo),
    Document(DocumentUpload),
    Selfie(Selfie),
}

impl StepData {
    /// The step this payload belongs to.
    pub fn step(&self) -> KycStep {
        match self {
            StepData::PersonalInfo(_) => KycStep::PersonalInfo,
            StepData::Document(_) => KycStep::DocumentUpload,
            StepData::Selfie(_) => KycStep::Selfie,
        }
    }
}

/// Events fed to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    /// The current step's form validated successfully.
    StepCompleted(StepData),
    /// An async submission was accepted for dispatch.
    SubmitStarted,
    /// The verification service accepted the dossier.
    SubmitSucceeded,
    /// The service declined the dossier or the call failed; the message is
    /// shown to the user.
    SubmitFailed(String),
    /// The user asked to redo verification after a rejection.
    Restart,
}

/// Immutable wizard state. Transitions only via [`WizardState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub user_id: String,
    pub current_step: KycStep,
    pub collected: CollectedData,
    pub submission_error: Option<String>,
    pub is_submitting: bool,
}

impl WizardState {
    /// Start a wizard for `user_id`. `known_status` carries a previously
    /// determined outcome (e.g. a verification already under review), which
    /// becomes the initial step; otherwise the flow starts at the first
    /// form step.
    pub fn new(user_id: impl Into<String>, known_status: Option<KycStep>) -> Self {
        Self {
            user_id: user_id.into(),
            current_step: known_status.unwrap_or(KycStep::PersonalInfo),
            collected: CollectedData::default(),
            submission_error: None,
            is_submitting: false,
        }
    }

    /// All three sections collected.
    pub fn is_complete(&self) -> bool {
        self.collected.personal_info.is_some()
            && self.collected.document.is_some()
            && self.collected.selfie.is_some()
    }

    /// The dossier to submit, once complete.
    pub fn payload(&self) -> Option<KycSubmission> {
        Some(KycSubmission {
            user_id: self.user_id.clone(),
            personal_info: self.collected.personal_info.clone()?,
            document: self.collected.document.clone()?,
            selfie: self.collected.selfie.clone()?,
        })
    }

    /// The pure reducer. Returns the successor state; events that are not
    /// legal in the current state return the state unchanged.
    pub fn apply(&self, event: WizardEvent) -> WizardState {
        match event {
            WizardEvent::StepCompleted(data) => self.complete_step(data),
            WizardEvent::SubmitStarted => self.start_submit(),
            WizardEvent::SubmitSucceeded => self.finish_submit_ok(),
            WizardEvent::SubmitFailed(message) => self.finish_submit_err(message),
            WizardEvent::Restart => self.restart(),
        }
    }

    fn complete_step(&self, data: StepData) -> WizardState {
        // Forward-only: data is only accepted for the step the user is on.
        if data.step() != self.current_step || self.is_submitting {
            return self.clone();
        }

        let mut next = self.clone();
        match data {
            StepData::PersonalInfo(info) => next.collected.personal_info = Some(info),
            StepData::Document(doc) => next.collected.document = Some(doc),
            StepData::Selfie(selfie) => next.collected.selfie = Some(selfie),
        }
        // The selfie step has no successor; submission is a separate event.
        if let Some(step) = self.current_step.next_active() {
            next.current_step = step;
        }
        next
    }

    fn start_submit(&self) -> WizardState {
        // Single-flight guard plus completeness check.
        if self.current_step != KycStep::Selfie || self.is_submitting || !self.is_complete() {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_submitting = true;
        next.submission_error = None;
        next
    }

    fn finish_submit_ok(&self) -> WizardState {
        if !self.is_submitting {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_submitting = false;
        next.submission_error = None;
        next.current_step = KycStep::Pending;
        next
    }

    fn finish_submit_err(&self, message: String) -> WizardState {
        if !self.is_submitting {
            return self.clone();
        }
        // Stay on the selfie step with everything intact so the user can
        // retry immediately.
        let mut next = self.clone();
        next.is_submitting = false;
        next.submission_error = Some(message);
        next
    }

    fn restart(&self) -> WizardState {
        if self.current_step != KycStep::Rejected {
            return self.clone();
        }
        WizardState::new(self.user_id.clone(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::kyc::DocumentType;

    fn personal_info() -> PersonalInfo {
        PersonalInfo {
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

    fn document() -> DocumentUpload {
        DocumentUpload {
            document_type: DocumentType::Passport,
            front_image: "passport-front.png".to_string(),
            back_image: None,
        }
    }

    fn selfie() -> Selfie {
        Selfie {
            image: "selfie.png".to_string(),
        }
    }

    /// Runs the wizard up to the selfie step with all data collected.
    fn completed_wizard() -> WizardState {
        WizardState::new("user-1", None)
            .apply(WizardEvent::StepCompleted(StepData::PersonalInfo(
                personal_info(),
            )))
            .apply(WizardEvent::StepCompleted(StepData::Document(document())))
            .apply(WizardEvent::StepCompleted(StepData::Selfie(selfie())))
    }

    #[test]
    fn starts_at_first_step_by_default() {
        let state = WizardState::new("user-1", None);
        assert_eq!(state.current_step, KycStep::PersonalInfo);
        assert!(!state.is_submitting);
        assert!(state.submission_error.is_none());
        assert!(!state.is_complete());
    }

    #[test]
    fn starts_at_known_status_when_given() {
        let state = WizardState::new("user-1", Some(KycStep::Verified));
        assert_eq!(state.current_step, KycStep::Verified);

        let state = WizardState::new("user-1", Some(KycStep::Rejected));
        assert_eq!(state.current_step, KycStep::Rejected);
    }

    #[test]
    fn steps_advance_in_fixed_order() {
        let state = WizardState::new("user-1", None);

        let state = state.apply(WizardEvent::StepCompleted(StepData::PersonalInfo(
            personal_info(),
        )));
        assert_eq!(state.current_step, KycStep::DocumentUpload);
        assert!(state.collected.personal_info.is_some());

        let state = state.apply(WizardEvent::StepCompleted(StepData::Document(document())));
        assert_eq!(state.current_step, KycStep::Selfie);

        // Completing the last step does not advance; submission is separate
        let state = state.apply(WizardEvent::StepCompleted(StepData::Selfie(selfie())));
        assert_eq!(state.current_step, KycStep::Selfie);
        assert!(state.is_complete());
    }

    #[test]
    fn cannot_skip_ahead() {
        let state = WizardState::new("user-1", None);
        let after = state.apply(WizardEvent::StepCompleted(StepData::Selfie(selfie())));
        assert_eq!(after, state); // no-op
        assert!(after.collected.selfie.is_none());
    }

    #[test]
    fn later_steps_preserve_earlier_data() {
        let state = completed_wizard();
        assert_eq!(state.collected.personal_info, Some(personal_info()));
        assert_eq!(state.collected.document, Some(document()));
        assert_eq!(state.collected.selfie, Some(selfie()));
    }

    #[test]
    fn resubmitting_a_step_replaces_its_data() {
        let state = completed_wizard();
        let new_selfie = Selfie {
            image: "selfie-2.png".to_string(),
        };
        let state = state.apply(WizardEvent::StepCompleted(StepData::Selfie(
            new_selfie.clone(),
        )));
        assert_eq!(state.collected.selfie, Some(new_selfie));
        assert_eq!(state.collected.personal_info, Some(personal_info()));
    }

    #[test]
    fn submit_requires_complete_dossier() {
        let state = WizardState::new("user-1", None);
        let after = state.apply(WizardEvent::SubmitStarted);
        assert!(!after.is_submitting);

        let state = completed_wizard().apply(WizardEvent::SubmitStarted);
        assert!(state.is_submitting);
        assert!(state.submission_error.is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_a_noop() {
        let submitting = completed_wizard().apply(WizardEvent::SubmitStarted);
        let again = submitting.apply(WizardEvent::SubmitStarted);
        assert_eq!(again, submitting);

        // Step completion is also blocked while a submission is in flight
        let during = submitting.apply(WizardEvent::StepCompleted(StepData::Selfie(Selfie {
            image: "other.png".to_string(),
        })));
        assert_eq!(during, submitting);
    }

    #[test]
    fn success_moves_to_pending() {
        let state = completed_wizard()
            .apply(WizardEvent::SubmitStarted)
            .apply(WizardEvent::SubmitSucceeded);
        assert_eq!(state.current_step, KycStep::Pending);
        assert!(!state.is_submitting);
        assert!(state.submission_error.is_none());
    }

    #[test]
    fn failure_keeps_position_and_data() {
        let state = completed_wizard()
            .apply(WizardEvent::SubmitStarted)
            .apply(WizardEvent::SubmitFailed("document unreadable".to_string()));
        assert_eq!(state.current_step, KycStep::Selfie);
        assert!(!state.is_submitting);
        assert_eq!(
            state.submission_error.as_deref(),
            Some("document unreadable")
        );
        assert!(state.is_complete());

        // Retry works: starting a new submission clears the error
        let retry = state.apply(WizardEvent::SubmitStarted);
        assert!(retry.is_submitting);
        assert!(retry.submission_error.is_none());
    }

    #[test]
    fn outcome_events_ignored_when_not_submitting() {
        let state = completed_wizard();
        assert_eq!(state.apply(WizardEvent::SubmitSucceeded), state);
        assert_eq!(
            state.apply(WizardEvent::SubmitFailed("late".to_string())),
            state
        );
    }

    #[test]
    fn restart_only_from_rejected() {
        let rejected = WizardState::new("user-1", Some(KycStep::Rejected));
        let restarted = rejected.apply(WizardEvent::Restart);
        assert_eq!(restarted.current_step, KycStep::PersonalInfo);
        assert_eq!(restarted.user_id, "user-1");
        assert!(!restarted.is_complete());

        let pending = completed_wizard()
            .apply(WizardEvent::SubmitStarted)
            .apply(WizardEvent::SubmitSucceeded);
        assert_eq!(pending.apply(WizardEvent::Restart), pending);

        let verified = WizardState::new("user-1", Some(KycStep::Verified));
        assert_eq!(verified.apply(WizardEvent::Restart), verified);

        let mid_flow = WizardState::new("user-1", None);
        assert_eq!(mid_flow.apply(WizardEvent::Restart), mid_flow);
    }

    #[test]
    fn progress_percentages() {
        let pct = KycStep::PersonalInfo.progress_percent().unwrap();
        assert!((pct - 33.333_332).abs() < 0.01);
        let pct = KycStep::DocumentUpload.progress_percent().unwrap();
        assert!((pct - 66.666_664).abs() < 0.01);
        assert_eq!(KycStep::Selfie.progress_percent(), Some(100.0));
        assert_eq!(KycStep::Pending.progress_percent(), None);
        assert_eq!(KycStep::Rejected.progress_percent(), None);
    }

    #[test]
    fn payload_only_when_complete() {
        let state = WizardState::new("user-1", None).apply(WizardEvent::StepCompleted(
            StepData::PersonalInfo(personal_info()),
        ));
        assert!(state.payload().is_none());

        let payload = completed_wizard().payload().unwrap();
        assert_eq!(payload.user_id, "user-1");
        assert_eq!(payload.personal_info, personal_info());
        assert_eq!(payload.document, document());
        assert_eq!(payload.selfie, selfie());
    }

    #[test]
    fn reducer_never_produces_verified() {
        // Verified only arrives as an externally-known status
        let mut state = completed_wizard();
        for event in [
            WizardEvent::SubmitStarted,
            WizardEvent::SubmitSucceeded,
            WizardEvent::SubmitFailed("x".to_string()),
            WizardEvent::Restart,
        ] {
            state = state.apply(event);
            assert_ne!(state.current_step, KycStep::Verified);
        }
    }
}
