//! # Verification Handlers
//!
//! Handlers for the KYC wizard: step submission and restart after a
//! rejection. All sequencing decisions are delegated to the pure reducer in
//! [`crate::kyc::wizard`]; this layer only validates forms and triggers the
//! async submission.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::kyc::wizard::{KycStep, WizardEvent};
use crate::kyc::validation;

/// Validate the current step's form and advance the wizard. On the last
/// step a successful validation hands off to the async submission task.
///
/// Internal handler function - use [`crate::app::App::handle_kyc_continue`] instead.
pub(crate) fn handle_step_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let step = {
        let mut guard = state.write();
        let step = guard.account.kyc.wizard.current_step;
        if !step.is_active() || guard.account.kyc.wizard.is_submitting {
            return;
        }

        match validation::validate_step(step, &guard.account.kyc.forms) {
            Ok(data) => {
                guard.account.kyc.field_errors.clear();
                guard.account.kyc.wizard = guard
                    .account
                    .kyc
                    .wizard
                    .apply(WizardEvent::StepCompleted(data));
                tracing::info!(
                    step = step.title(),
                    next = guard.account.kyc.wizard.current_step.title(),
                    "verification step completed"
                );
            }
            Err(errors) => {
                tracing::debug!(
                    step = step.title(),
                    error_count = errors.len(),
                    "verification step validation failed"
                );
                guard.account.kyc.field_errors = errors;
                return;
            }
        }
        step
    };

    // Completing the selfie step triggers the dossier submission
    if step == KycStep::Selfie {
        tasks::kyc::submit(state, event_tx);
    }
}

/// Restart the wizard after a rejection. The reducer enforces that restarts
/// from any other state are no-ops; the form buffers are only cleared when
/// the restart actually happened.
///
/// Internal handler function - use [`crate::app::App::handle_kyc_restart`] instead.
pub(crate) fn handle_restart(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let restarted = guard.account.kyc.wizard.apply(WizardEvent::Restart);
    if restarted.current_step != guard.account.kyc.wizard.current_step {
        tracing::info!(user_id = %restarted.user_id, "verification restarted");
        guard.account.kyc.wizard = restarted;
        guard.account.kyc.forms = Default::default();
        guard.account.kyc.field_errors.clear();
    }
}
