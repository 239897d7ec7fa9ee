//! # Application State Types
//!
//! All state-related types for the application: screens, per-screen state
//! (market, order form, wallet, discover, account) and the top-level
//! [`AppState`] shared across threads.

use std::sync::Arc;

use shared::dto::market::{AssetInfo, Candle, NewsItem, OrderBook};
use shared::dto::trade::{OpenOrder, OrderSide, OrderType, TradeFill};
use shared::dto::wallet::{AssetBalance, TransactionRecord};

use crate::core::service::{KycGateway, OrderGateway};
use crate::kyc::{KycForms, KycStep, WizardState};
use crate::services;
use crate::utils::validation::FieldErrors;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Portfolio overview with performance chart and news
    Dashboard,
    /// Order entry, chart and order book
    Trade,
    /// Balances and transaction history
    Wallet,
    /// Asset catalogue search and market news
    Discover,
    /// Profile and identity verification
    Account,
}

impl Screen {
    /// Get all screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Trade,
            Screen::Wallet,
            Screen::Discover,
            Screen::Account,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Trade => "Trade",
            Screen::Wallet => "Wallet",
            Screen::Discover => "Discover",
            Screen::Account => "Account",
        }
    }
}

/// Market data shown on the trade screen.
#[derive(Debug, Clone)]
pub struct MarketState {
    pub pairs: Vec<String>,
    pub selected_pair: String,
    pub candles: Vec<Candle>,
    pub order_book: OrderBook,
    pub open_orders: Vec<OpenOrder>,
    pub trade_history: Vec<TradeFill>,
}

impl Default for MarketState {
    fn default() -> Self {
        let pairs = services::market::demo_pairs();
        let selected_pair = pairs[0].clone();
        Self {
            pairs,
            selected_pair,
            candles: services::market::demo_candles(40000.0, 60),
            order_book: services::market::demo_order_book(40000.0),
            open_orders: services::market::demo_open_orders(),
            trade_history: services::market::demo_trade_history(),
        }
    }
}

/// Order entry form buffers and status.
#[derive(Debug, Clone)]
pub struct OrderFormState {
    pub side: OrderSide,
    pub order_type: OrderType,
    pub amount: String,
    pub price: String,
    pub stop_price: String,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    /// Quote-asset balance available for the percentage buttons.
    pub available_balance: f64,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self {
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            amount: String::new(),
            price: String::new(),
            stop_price: String::new(),
            errors: FieldErrors::new(),
            is_submitting: false,
            available_balance: 12000.0,
        }
    }
}

/// Active tab on the wallet screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletTab {
    Assets,
    History,
}

impl WalletTab {
    pub fn all() -> &'static [WalletTab] {
        &[WalletTab::Assets, WalletTab::History]
    }

    pub fn title(&self) -> &'static str {
        match self {
            WalletTab::Assets => "Assets",
            WalletTab::History => "History",
        }
    }
}

/// Wallet screen state.
#[derive(Debug, Clone)]
pub struct WalletState {
    pub balances: Vec<AssetBalance>,
    pub transactions: Vec<TransactionRecord>,
    pub active_tab: WalletTab,
}

impl WalletState {
    /// Total account value in USD.
    pub fn total_usd(&self) -> f64 {
        self.balances.iter().map(|b| b.usd_value).sum()
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            balances: services::market::demo_wallet_balances(),
            transactions: services::market::demo_transactions(),
            active_tab: WalletTab::Assets,
        }
    }
}

/// Active tab on the discover screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverTab {
    AllAssets,
    News,
    Learn,
}

impl DiscoverTab {
    pub fn all() -> &'static [DiscoverTab] {
        &[DiscoverTab::AllAssets, DiscoverTab::News, DiscoverTab::Learn]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DiscoverTab::AllAssets => "All Assets",
            DiscoverTab::News => "News",
            DiscoverTab::Learn => "Learn",
        }
    }
}

/// Discover screen state.
#[derive(Debug, Clone)]
pub struct DiscoverState {
    pub assets: Vec<AssetInfo>,
    pub news: Vec<NewsItem>,
    pub search_query: String,
    pub active_tab: DiscoverTab,
}

impl DiscoverState {
    /// Case-insensitive substring filter on symbol and name.
    pub fn filtered_assets(&self) -> Vec<&AssetInfo> {
        let query = self.search_query.trim().to_lowercase();
        self.assets
            .iter()
            .filter(|a| {
                query.is_empty()
                    || a.symbol.to_lowercase().contains(&query)
                    || a.name.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl Default for DiscoverState {
    fn default() -> Self {
        Self {
            assets: services::market::demo_assets(),
            news: services::market::demo_news(),
            search_query: String::new(),
            active_tab: DiscoverTab::AllAssets,
        }
    }
}

/// Active tab on the account screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTab {
    Profile,
    Verification,
}

impl AccountTab {
    pub fn all() -> &'static [AccountTab] {
        &[AccountTab::Profile, AccountTab::Verification]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Verification => "Verification",
        }
    }
}

/// Profile form buffers (mock, save just logs).
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            full_name: "Demo User".to_string(),
            email: "demo@vantage.example".to_string(),
        }
    }
}

/// Everything the verification tab needs: the wizard value, the raw form
/// buffers and the last validation errors.
#[derive(Debug, Clone)]
pub struct KycState {
    pub wizard: WizardState,
    pub forms: KycForms,
    pub field_errors: FieldErrors,
}

impl KycState {
    pub fn new(user_id: impl Into<String>, known_status: Option<KycStep>) -> Self {
        Self {
            wizard: WizardState::new(user_id, known_status),
            forms: KycForms::default(),
            field_errors: FieldErrors::new(),
        }
    }
}

/// Account screen state.
#[derive(Debug, Clone)]
pub struct AccountState {
    pub active_tab: AccountTab,
    pub profile: ProfileForm,
    pub kyc: KycState,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            active_tab: AccountTab::Profile,
            profile: ProfileForm::default(),
            kyc: KycState::new("user-placeholder-123", None),
        }
    }
}

/// Dashboard screen state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub portfolio: Vec<AssetBalance>,
    pub monthly_performance: Vec<(String, f64)>,
    pub pnl_24h: f64,
}

impl DashboardState {
    pub fn total_value(&self) -> f64 {
        self.portfolio.iter().map(|a| a.usd_value).sum()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            portfolio: services::market::demo_portfolio(),
            monthly_performance: services::market::demo_monthly_performance(),
            pnl_24h: 1280.45,
        }
    }
}

/// Top-level shared application state.
///
/// Wrapped in `Arc<parking_lot::RwLock<_>>` by [`crate::app::App`]; the UI
/// thread takes short read locks for rendering, handlers take short write
/// locks for mutations.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub dashboard: DashboardState,
    pub market: MarketState,
    pub order_form: OrderFormState,
    pub wallet: WalletState,
    pub discover: DiscoverState,
    pub account: AccountState,

    /// Verification gateway, injected for testability.
    pub kyc_gateway: Arc<dyn KycGateway>,
    /// Exchange gateway, injected for testability.
    pub order_gateway: Arc<dyn OrderGateway>,

    /// Toasts queued by handlers and drained by the UI each frame as
    /// `(level, message)` where level is one of "success", "error", "info".
    pub pending_notifications: Vec<(String, String)>,
}

impl AppState {
    pub fn new(kyc_gateway: Arc<dyn KycGateway>, order_gateway: Arc<dyn OrderGateway>) -> Self {
        Self {
            current_screen: Screen::Dashboard,
            dashboard: DashboardState::default(),
            market: MarketState::default(),
            order_form: OrderFormState::default(),
            wallet: WalletState::default(),
            discover: DiscoverState::default(),
            account: AccountState::default(),
            kyc_gateway,
            order_gateway,
            pending_notifications: Vec::new(),
        }
    }

    /// Queue a toast for the next frame.
    pub fn notify(&mut self, level: &str, message: impl Into<String>) {
        self.pending_notifications
            .push((level.to_string(), message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_order_and_titles() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 5);
        assert_eq!(screens[0], Screen::Dashboard);
        assert_eq!(screens[4], Screen::Account);
        assert_eq!(Screen::Trade.title(), "Trade");
    }

    #[test]
    fn discover_filter_matches_symbol_and_name() {
        let discover = DiscoverState::default();

        let all = discover.filtered_assets();
        assert_eq!(all.len(), discover.assets.len());

        let mut by_symbol = DiscoverState::default();
        by_symbol.search_query = "btc".to_string();
        let hits = by_symbol.filtered_assets();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "BTC");

        let mut by_name = DiscoverState::default();
        by_name.search_query = "Chain".to_string();
        let names: Vec<&str> = by_name
            .filtered_assets()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert!(names.contains(&"Chainlink"));

        let mut no_hit = DiscoverState::default();
        no_hit.search_query = "xyzzy".to_string();
        assert!(no_hit.filtered_assets().is_empty());
    }

    #[test]
    fn wallet_total_sums_balances() {
        let wallet = WalletState::default();
        assert_eq!(wallet.total_usd(), 80000.0);
    }
}
