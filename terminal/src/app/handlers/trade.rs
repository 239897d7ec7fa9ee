//! # Trade Handlers
//!
//! Handlers for the order entry form: side/type switching, percentage
//! buttons and ticket validation.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use shared::dto::trade::{OrderSide, OrderTicket, OrderType};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, OrderFormState};
use crate::app::tasks;
use crate::utils::validation::{parse_positive, FieldErrors};

/// Build a validated ticket from the form buffers, collecting all field
/// errors. Price fields are only consulted for order types that use them.
pub(crate) fn validate_order_form(
    form: &OrderFormState,
    pair: &str,
) -> Result<OrderTicket, FieldErrors> {
    let mut errors = FieldErrors::new();

    let amount = match parse_positive(&form.amount, "Amount must be a positive number") {
        Ok(n) => Some(n),
        Err(message) => {
            errors.insert("amount", message);
            None
        }
    };

    let price = if form.order_type.uses_price() {
        match parse_positive(&form.price, "Price is required for this order type") {
            Ok(n) => Some(n),
            Err(message) => {
                errors.insert("price", message);
                None
            }
        }
    } else {
        None
    };

    let stop_price = if form.order_type.uses_stop_price() {
        match parse_positive(&form.stop_price, "Stop price is required for stop-limit orders") {
            Ok(n) => Some(n),
            Err(message) => {
                errors.insert("stop_price", message);
                None
            }
        }
    } else {
        None
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(OrderTicket {
        pair: pair.to_string(),
        side: form.side,
        order_type: form.order_type,
        amount: amount.unwrap_or_default(),
        price,
        stop_price,
    })
}

/// Handle order submit: validate, then hand off to the async task.
///
/// Internal handler function - use [`crate::app::App::handle_order_submit`] instead.
pub(crate) fn handle_order_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let ticket = {
        let mut guard = state.write();
        if guard.order_form.is_submitting {
            return;
        }
        let pair = guard.market.selected_pair.clone();
        match validate_order_form(&guard.order_form, &pair) {
            Ok(ticket) => {
                guard.order_form.errors.clear();
                ticket
            }
            Err(errors) => {
                guard.order_form.errors = errors;
                return;
            }
        }
    };
    tasks::trade::place_order(state, event_tx, ticket);
}

/// Switch order side.
pub(crate) fn handle_side_change(state: Arc<RwLock<AppState>>, side: OrderSide) {
    let mut state = state.write();
    state.order_form.side = side;
}

/// Switch order type, clearing the buffers the new type does not use.
pub(crate) fn handle_order_type_change(state: Arc<RwLock<AppState>>, order_type: OrderType) {
    let mut state = state.write();
    state.order_form.order_type = order_type;
    state.order_form.errors.clear();
    if !order_type.uses_price() {
        state.order_form.price.clear();
    }
    if !order_type.uses_stop_price() {
        state.order_form.stop_price.clear();
    }
}

/// Fill the amount from a percentage of the available quote balance.
pub(crate) fn handle_amount_percent(state: Arc<RwLock<AppState>>, percent: u8) {
    let mut state = state.write();
    let balance = state.order_form.available_balance;
    let spend = balance * percent as f64 / 100.0;

    // Convert the quote spend to a base amount using the current mid price
    let amount = match state.market.order_book.mid_price() {
        Some(mid) if mid > 0.0 => spend / mid,
        _ => spend,
    };
    state.order_form.amount = format!("{:.6}", amount);
}

/// Change the selected trading pair and reseed the demo book and chart.
pub(crate) fn handle_pair_change(state: Arc<RwLock<AppState>>, pair: String) {
    let mut state = state.write();
    if !state.market.pairs.contains(&pair) || state.market.selected_pair == pair {
        return;
    }
    tracing::debug!(pair = %pair, "pair change");
    let base = match pair.as_str() {
        "BTC/USDT" => 40000.0,
        "ETH/USDT" => 2500.0,
        "SOL/USDT" => 150.0,
        "ETH/BTC" => 0.0625,
        _ => 100.0,
    };
    state.market.selected_pair = pair;
    state.market.order_book = crate::services::market::demo_order_book(base);
    state.market.candles = crate::services::market::demo_candles(base, 60);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(order_type: OrderType, amount: &str, price: &str, stop: &str) -> OrderFormState {
        OrderFormState {
            order_type,
            amount: amount.to_string(),
            price: price.to_string(),
            stop_price: stop.to_string(),
            ..OrderFormState::default()
        }
    }

    #[test]
    fn market_order_needs_only_amount() {
        let ticket = validate_order_form(&form(OrderType::Market, "0.5", "", ""), "BTC/USDT")
            .unwrap();
        assert_eq!(ticket.amount, 0.5);
        assert_eq!(ticket.price, None);
        assert_eq!(ticket.stop_price, None);

        let errors =
            validate_order_form(&form(OrderType::Market, "", "", ""), "BTC/USDT").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("amount"));
    }

    #[test]
    fn limit_order_requires_price() {
        let errors =
            validate_order_form(&form(OrderType::Limit, "0.5", "", ""), "BTC/USDT").unwrap_err();
        assert!(errors.contains_key("price"));

        let ticket = validate_order_form(&form(OrderType::Limit, "0.5", "39000", ""), "BTC/USDT")
            .unwrap();
        assert_eq!(ticket.price, Some(39000.0));
        assert_eq!(ticket.stop_price, None);
    }

    #[test]
    fn stop_limit_requires_both_prices() {
        let errors = validate_order_form(&form(OrderType::StopLimit, "", "", ""), "BTC/USDT")
            .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("amount"));
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("stop_price"));

        let ticket = validate_order_form(
            &form(OrderType::StopLimit, "1.0", "39000", "39500"),
            "BTC/USDT",
        )
        .unwrap();
        assert_eq!(ticket.stop_price, Some(39500.0));
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for bad in ["0", "-1", "abc"] {
            let result = validate_order_form(&form(OrderType::Market, bad, "", ""), "BTC/USDT");
            assert!(result.is_err(), "{bad} should be rejected");
        }
    }
}
