//! # Account Handlers
//!
//! Profile form actions. Saving is a mock: it validates, logs and toasts.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::state::AppState;

/// Handle profile save.
///
/// Internal handler function - use [`crate::app::App::handle_profile_save`] instead.
pub(crate) fn handle_profile_save(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.account.profile.full_name.trim().is_empty() {
        state.notify("error", "Name cannot be empty");
        return;
    }
    tracing::info!(
        name = %state.account.profile.full_name,
        "profile saved (mock)"
    );
    state.notify("success", "Profile updated");
}
