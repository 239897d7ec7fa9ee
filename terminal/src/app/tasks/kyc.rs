//! # Verification Tasks
//!
//! Async submission of the completed verification dossier.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::kyc::WizardEvent;

/// Submit the collected dossier to the verification gateway.
///
/// The single-flight guard lives in the reducer: `SubmitStarted` only takes
/// effect when no submission is in flight and the dossier is complete. The
/// gateway is called exactly once per accepted submission; a duplicate
/// trigger is dropped here before anything is spawned.
///
/// Internal task function - use [`crate::app::App::handle_kyc_continue`] instead.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (payload, gateway) = {
        let mut guard = state.write();

        if guard.account.kyc.wizard.is_submitting {
            tracing::debug!("verification submission skipped - already in flight");
            return;
        }
        let started = guard.account.kyc.wizard.apply(WizardEvent::SubmitStarted);
        if !started.is_submitting {
            tracing::debug!("verification submission skipped - dossier not ready");
            return;
        }
        guard.account.kyc.wizard = started;

        let payload = match guard.account.kyc.wizard.payload() {
            Some(payload) => payload,
            None => return, // unreachable once SubmitStarted was accepted
        };
        (payload, guard.kyc_gateway.clone())
    };

    spawn(async move {
        let result = gateway.submit_kyc(payload).await;
        let _ = event_tx.send(AppEvent::KycSubmitResult(result)).await;
    });
}
