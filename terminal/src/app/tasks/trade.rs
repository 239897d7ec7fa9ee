//! # Trade Tasks
//!
//! Async order placement against the exchange gateway.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::spawn;

use shared::dto::trade::OrderTicket;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Place a validated order ticket.
///
/// Internal task function - use [`crate::app::App::handle_order_submit`] instead.
pub(crate) fn place_order(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    ticket: OrderTicket,
) {
    let gateway = {
        let mut guard = state.write();
        if guard.order_form.is_submitting {
            tracing::debug!("order submission skipped - already in flight");
            return;
        }
        guard.order_form.is_submitting = true;
        guard.order_gateway.clone()
    };

    spawn(async move {
        let result = gateway.place_order(ticket).await;
        let _ = event_tx.send(AppEvent::OrderResult(result)).await;
    });
}
