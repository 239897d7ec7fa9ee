//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly.
//!
//! This module processes `AppEvent` messages received from async tasks and
//! updates the application state in a thread-safe manner.

use shared::dto::kyc::SubmissionResult;
use shared::dto::trade::{OpenOrder, OrderReceipt};

use crate::app::{App, AppEvent};
use crate::kyc::WizardEvent;

/// Shown when the service declines a dossier without a reason of its own.
const DEFAULT_SUBMIT_ERROR: &str = "Submission failed. Please try again.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per-event for minimal duration to prevent UI
    /// freezing.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::KycSubmitResult(result) => {
                self.handle_kyc_submit_result(result);
            }
            AppEvent::OrderResult(result) => {
                self.handle_order_result(result);
            }
        }
    }
}

impl App {
    /// A declined result and a transport error surface identically: the
    /// wizard stays on the selfie step with `submission_error` set.
    fn handle_kyc_submit_result(&mut self, result: Result<SubmissionResult, String>) {
        let mut state = self.state.write();
        match result {
            Ok(outcome) if outcome.success => {
                state.account.kyc.wizard =
                    state.account.kyc.wizard.apply(WizardEvent::SubmitSucceeded);
                state.notify("success", "Verification submitted for review");
                tracing::info!(
                    user_id = %state.account.kyc.wizard.user_id,
                    "verification submission accepted"
                );
            }
            Ok(outcome) => {
                let message = outcome
                    .message
                    .unwrap_or_else(|| DEFAULT_SUBMIT_ERROR.to_string());
                tracing::warn!(
                    user_id = %state.account.kyc.wizard.user_id,
                    error = %message,
                    "verification submission declined"
                );
                state.account.kyc.wizard = state
                    .account
                    .kyc
                    .wizard
                    .apply(WizardEvent::SubmitFailed(message));
            }
            Err(error) => {
                tracing::warn!(
                    user_id = %state.account.kyc.wizard.user_id,
                    error = %error,
                    "verification submission failed"
                );
                state.account.kyc.wizard = state
                    .account
                    .kyc
                    .wizard
                    .apply(WizardEvent::SubmitFailed(error));
            }
        }
    }

    fn handle_order_result(&mut self, result: Result<OrderReceipt, String>) {
        let mut state = self.state.write();
        state.order_form.is_submitting = false;
        match result {
            Ok(receipt) => {
                tracing::info!(order_id = %receipt.order_id, "order placed");
                // Mock platform: acknowledged orders show up as resting orders
                let form = &state.order_form;
                let order = OpenOrder {
                    order_id: receipt.order_id.clone(),
                    pair: state.market.selected_pair.clone(),
                    side: form.side,
                    order_type: form.order_type,
                    amount: form.amount.trim().parse().unwrap_or(0.0),
                    price: form.price.trim().parse().ok(),
                    created_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
                };
                state.market.open_orders.insert(0, order);
                state.order_form.amount.clear();
                state.order_form.price.clear();
                state.order_form.stop_price.clear();
                state.notify("success", receipt.message);
            }
            Err(error) => {
                tracing::warn!(error = %error, "order placement failed");
                state.notify("error", format!("Order failed: {}", error));
            }
        }
    }
}
