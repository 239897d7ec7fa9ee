//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the entire application, coordinating
//! between the UI rendering layer, async task handlers, and application
//! state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Thread-safe shared state, locks held briefly      │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  tasks::kyc::submit()     - verification dossier            │
//! │  tasks::trade::place_order() - order placement              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - **[`App`]**: Main application orchestrator with event handling
//! - **[`AppState`]**: Thread-safe shared application state (see [`state`] module)
//! - **[`AppEvent`]**: Event enum for async task results (see [`events`] module)
//! - **[`handlers`]**: User action handlers (navigation, kyc, trade, account)
//! - **[`tasks`]**: Async background tasks (verification, orders)
//!
//! ## State Management Pattern
//!
//! The application uses `Arc<RwLock<AppState>>` for thread-safe state.
//! Locks are held for minimal duration to prevent UI freezing: the UI takes
//! a read lock once per frame to snapshot state, handlers take short write
//! locks per action.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::service::{KycGateway, OrderGateway};
use crate::services::kyc::MockKycGateway;
use crate::services::trade::MockOrderGateway;
use event_handler::AppEventHandler;
use shared::dto::trade::{OrderSide, OrderType};

/// Main application orchestrator.
///
/// Coordinates the egui rendering layer (main thread), async gateway tasks
/// (Tokio) and the shared state. Async tasks send [`AppEvent`] results back
/// through an unbounded channel which is drained once per frame in
/// [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Receiving end of the async event channel (drained on the main thread)
    event_rx: Receiver<AppEvent>,
    /// Sending end, cloned into every spawned task
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the app with the default mock gateways.
    pub fn new() -> Self {
        Self::with_gateways(
            Arc::new(MockKycGateway::new()),
            Arc::new(MockOrderGateway::new()),
        )
    }

    /// Create the app with injected gateways. Tests use this to substitute
    /// recording doubles.
    pub fn with_gateways(
        kyc_gateway: Arc<dyn KycGateway>,
        order_gateway: Arc<dyn OrderGateway>,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = Arc::new(RwLock::new(AppState::new(kyc_gateway, order_gateway)));
        Self {
            state,
            event_rx,
            event_tx,
        }
    }

    /// Process pending async events. Called once per frame; non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle a single async event result.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // ---- Navigation ----------------------------------------------------

    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
    }

    // ---- Verification wizard -------------------------------------------

    /// Validate the current wizard step and advance; on the selfie step a
    /// successful validation submits the dossier.
    pub fn handle_kyc_continue(&mut self) {
        handlers::kyc::handle_step_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Restart verification after a rejection.
    pub fn handle_kyc_restart(&mut self) {
        handlers::kyc::handle_restart(self.state.clone());
    }

    // ---- Trading -------------------------------------------------------

    pub fn handle_order_submit(&mut self) {
        handlers::trade::handle_order_submit(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_side_change(&mut self, side: OrderSide) {
        handlers::trade::handle_side_change(self.state.clone(), side);
    }

    pub fn handle_order_type_change(&mut self, order_type: OrderType) {
        handlers::trade::handle_order_type_change(self.state.clone(), order_type);
    }

    pub fn handle_amount_percent(&mut self, percent: u8) {
        handlers::trade::handle_amount_percent(self.state.clone(), percent);
    }

    pub fn handle_pair_change(&mut self, pair: String) {
        handlers::trade::handle_pair_change(self.state.clone(), pair);
    }

    // ---- Account -------------------------------------------------------

    pub fn handle_profile_save(&mut self) {
        handlers::account::handle_profile_save(self.state.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kyc::KycStep;
    use shared::dto::kyc::{DocumentType, KycSubmission, SubmissionResult};
    use shared::dto::trade::{OrderReceipt, OrderTicket};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Gateway double that records every call.
    struct RecordingKycGateway {
        calls: AtomicUsize,
        last_submission: parking_lot::Mutex<Option<KycSubmission>>,
        response: Result<SubmissionResult, String>,
    }

    impl RecordingKycGateway {
        fn new(response: Result<SubmissionResult, String>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_submission: parking_lot::Mutex::new(None),
                response,
            })
        }
    }

    #[async_trait::async_trait]
    impl crate::core::service::KycGateway for RecordingKycGateway {
        async fn submit_kyc(
            &self,
            submission: KycSubmission,
        ) -> Result<SubmissionResult, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_submission.lock() = Some(submission);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.response.clone()
        }
    }

    struct RecordingOrderGateway {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl crate::core::service::OrderGateway for RecordingOrderGateway {
        async fn place_order(&self, ticket: OrderTicket) -> Result<OrderReceipt, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(OrderReceipt {
                order_id: "ord-test".to_string(),
                message: format!("order for {} accepted", ticket.pair),
            })
        }
    }

    fn app_with_kyc(gateway: Arc<RecordingKycGateway>) -> App {
        App::with_gateways(
            gateway,
            Arc::new(RecordingOrderGateway {
                calls: AtomicUsize::new(0),
            }),
        )
    }

    /// Fill all three wizard forms with valid data and walk to the selfie
    /// step so the next continue submits.
    fn walk_to_selfie(app: &mut App) {
        {
            let mut state = app.state.write();
            let personal = &mut state.account.kyc.forms.personal;
            personal.first_name = "Ada".to_string();
            personal.last_name = "Lovelace".to_string();
            personal.date_of_birth = "1990-01-15".to_string();
            personal.nationality = "GB".to_string();
            personal.address_line1 = "12 Analytical Row".to_string();
            personal.city = "London".to_string();
            personal.postal_code = "EC1A 1AA".to_string();
            personal.country = "United Kingdom".to_string();
        }
        app.handle_kyc_continue();
        {
            let mut state = app.state.write();
            state.account.kyc.forms.document.document_type = Some(DocumentType::Passport);
            state.account.kyc.forms.document.front_image = "front.png".to_string();
        }
        app.handle_kyc_continue();
        {
            let mut state = app.state.write();
            state.account.kyc.forms.selfie.image = "selfie.png".to_string();
        }
    }

    #[test]
    fn initial_state() {
        let app = App::new();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::PersonalInfo);
        assert_eq!(state.account.kyc.wizard.user_id, "user-placeholder-123");
        assert!(!state.account.kyc.wizard.is_submitting);
        assert!(state.market.candles.len() > 0);
        assert_eq!(state.market.selected_pair, "BTC/USDT");
    }

    #[test]
    fn navigation_cycles_through_all_screens() {
        let mut app = App::new();
        let screens = Screen::all();

        for expected in screens.iter().skip(1) {
            app.next_screen();
            assert_eq!(app.state.read().current_screen, *expected);
        }
        // Wrap-around
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Dashboard);

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Account);
    }

    #[test]
    fn screen_change_is_direct() {
        let mut app = App::new();
        app.handle_screen_change(Screen::Wallet);
        assert_eq!(app.state.read().current_screen, Screen::Wallet);
    }

    #[test]
    fn continue_with_empty_form_reports_all_errors_and_stays() {
        let mut app = App::new();
        app.handle_kyc_continue();

        let state = app.state.read();
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::PersonalInfo);
        assert_eq!(state.account.kyc.field_errors.len(), 8);
        assert!(state.account.kyc.field_errors.contains_key("first_name"));
        assert!(state.account.kyc.field_errors.contains_key("date_of_birth"));
    }

    #[test]
    fn continue_advances_through_steps() {
        let mut app = App::new();
        walk_to_selfie(&mut app);

        let state = app.state.read();
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::Selfie);
        assert!(state.account.kyc.field_errors.is_empty());
        assert!(state.account.kyc.wizard.collected.personal_info.is_some());
        assert!(state.account.kyc.wizard.collected.document.is_some());
    }

    #[tokio::test]
    async fn selfie_continue_submits_exactly_once_with_full_payload() {
        let gateway = RecordingKycGateway::new(Ok(SubmissionResult::accepted()));
        let mut app = app_with_kyc(gateway.clone());
        walk_to_selfie(&mut app);

        app.handle_kyc_continue();
        assert!(app.state.read().account.kyc.wizard.is_submitting);

        // A second trigger while in flight must not reach the gateway
        app.handle_kyc_continue();

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert!(app.event_rx.try_recv().is_err());

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        let submission = gateway.last_submission.lock().clone().unwrap();
        assert_eq!(submission.user_id, "user-placeholder-123");
        assert_eq!(submission.personal_info.first_name, "Ada");
        assert_eq!(submission.document.document_type, DocumentType::Passport);
        assert_eq!(submission.selfie.image, "selfie.png");

        let state = app.state.read();
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::Pending);
        assert!(!state.account.kyc.wizard.is_submitting);
    }

    #[tokio::test]
    async fn declined_submission_keeps_selfie_with_error() {
        let gateway =
            RecordingKycGateway::new(Ok(SubmissionResult::declined("document unreadable")));
        let mut app = app_with_kyc(gateway.clone());
        walk_to_selfie(&mut app);

        app.handle_kyc_continue();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        {
            let state = app.state.read();
            assert_eq!(state.account.kyc.wizard.current_step, KycStep::Selfie);
            assert_eq!(
                state.account.kyc.wizard.submission_error.as_deref(),
                Some("document unreadable")
            );
            assert!(state.account.kyc.wizard.is_complete());
            assert!(!state.account.kyc.wizard.is_submitting);
        }

        // Retry succeeds end to end with the retained data
        app.handle_kyc_continue();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn transport_error_surfaces_like_a_decline() {
        let gateway = RecordingKycGateway::new(Err("connection reset".to_string()));
        let mut app = app_with_kyc(gateway);
        walk_to_selfie(&mut app);

        app.handle_kyc_continue();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::Selfie);
        assert_eq!(
            state.account.kyc.wizard.submission_error.as_deref(),
            Some("connection reset")
        );
    }

    #[tokio::test]
    async fn decline_without_message_uses_default_text() {
        let gateway = RecordingKycGateway::new(Ok(SubmissionResult {
            success: false,
            message: None,
        }));
        let mut app = app_with_kyc(gateway);
        walk_to_selfie(&mut app);

        app.handle_kyc_continue();
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(
            state.account.kyc.wizard.submission_error.as_deref(),
            Some("Submission failed. Please try again.")
        );
    }

    #[test]
    fn restart_resets_wizard_and_forms_only_from_rejected() {
        let mut app = App::new();
        walk_to_selfie(&mut app);

        // Not rejected: restart is a no-op
        app.handle_kyc_restart();
        assert_eq!(
            app.state.read().account.kyc.wizard.current_step,
            KycStep::Selfie
        );

        {
            let mut state = app.state.write();
            state.account.kyc = KycState::new("user-placeholder-123", Some(KycStep::Rejected));
            state.account.kyc.forms.selfie.image = "stale.png".to_string();
        }
        app.handle_kyc_restart();

        let state = app.state.read();
        assert_eq!(state.account.kyc.wizard.current_step, KycStep::PersonalInfo);
        assert!(state.account.kyc.forms.selfie.image.is_empty());
        assert!(state.account.kyc.field_errors.is_empty());
    }

    #[tokio::test]
    async fn order_submit_round_trip() {
        let order_gateway = Arc::new(RecordingOrderGateway {
            calls: AtomicUsize::new(0),
        });
        let mut app = App::with_gateways(
            RecordingKycGateway::new(Ok(SubmissionResult::accepted())),
            order_gateway.clone(),
        );

        // Invalid form: errors, no gateway call
        app.handle_order_submit();
        assert!(app
            .state
            .read()
            .order_form
            .errors
            .contains_key("amount"));
        assert_eq!(order_gateway.calls.load(Ordering::SeqCst), 0);

        {
            let mut state = app.state.write();
            state.order_form.amount = "0.5".to_string();
        }
        let open_before = app.state.read().market.open_orders.len();
        app.handle_order_submit();
        assert!(app.state.read().order_form.is_submitting);

        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert_eq!(order_gateway.calls.load(Ordering::SeqCst), 1);
        assert!(!state.order_form.is_submitting);
        assert_eq!(state.market.open_orders.len(), open_before + 1);
        assert_eq!(state.market.open_orders[0].order_id, "ord-test");
    }

    #[test]
    fn order_type_change_clears_unused_fields() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.order_form.order_type = OrderType::StopLimit;
            state.order_form.price = "39000".to_string();
            state.order_form.stop_price = "39500".to_string();
        }
        app.handle_order_type_change(OrderType::Limit);
        {
            let state = app.state.read();
            assert_eq!(state.order_form.price, "39000");
            assert!(state.order_form.stop_price.is_empty());
        }
        app.handle_order_type_change(OrderType::Market);
        let state = app.state.read();
        assert!(state.order_form.price.is_empty());
    }

    #[test]
    fn amount_percent_uses_mid_price() {
        let mut app = App::new();
        app.handle_amount_percent(50);
        let state = app.state.read();
        let amount: f64 = state.order_form.amount.parse().unwrap();
        assert!(amount > 0.0);
        // 50% of 12000 USDT at ~40000 mid is ~0.15 BTC
        assert!(amount < 1.0);
    }

    #[test]
    fn pair_change_reseeds_market_data() {
        let mut app = App::new();
        app.handle_pair_change("ETH/USDT".to_string());
        let state = app.state.read();
        assert_eq!(state.market.selected_pair, "ETH/USDT");
        let mid = state.market.order_book.mid_price().unwrap();
        assert!(mid > 2000.0 && mid < 3000.0);
    }

    #[test]
    fn unknown_pair_is_ignored() {
        let mut app = App::new();
        app.handle_pair_change("FOO/BAR".to_string());
        assert_eq!(app.state.read().market.selected_pair, "BTC/USDT");
    }
}
