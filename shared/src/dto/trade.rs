//! Trading DTOs: order tickets, receipts, resting orders and fills.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Buy",
            OrderSide::Sell => "Sell",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Market,
    Limit,
    StopLimit,
}

impl OrderType {
    pub fn all() -> &'static [OrderType] {
        &[OrderType::Market, OrderType::Limit, OrderType::StopLimit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
            OrderType::StopLimit => "Stop-Limit",
        }
    }

    /// Whether this order type carries a limit price.
    pub fn uses_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopLimit)
    }

    /// Whether this order type carries a stop trigger price.
    pub fn uses_stop_price(&self) -> bool {
        matches!(self, OrderType::StopLimit)
    }
}

/// A validated order request as sent to the exchange gateway.
///
/// `price` is present exactly for limit and stop-limit orders, `stop_price`
/// exactly for stop-limit orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTicket {
    pub pair: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<f64>,
}

/// Acknowledgement returned by the exchange gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: String,
    pub message: String,
}

/// A resting order shown in the open orders table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenOrder {
    pub order_id: String,
    pub pair: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub amount: f64,
    pub price: Option<f64>,
    pub created_at: String,
}

/// A historical fill shown in the trade history table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeFill {
    pub pair: String,
    pub side: OrderSide,
    pub amount: f64,
    pub price: f64,
    pub executed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_ticket_omits_price_fields() {
        let ticket = OrderTicket {
            pair: "BTC/USDT".to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            amount: 0.5,
            price: None,
            stop_price: None,
        };
        let json = serde_json::to_string(&ticket).unwrap();
        assert!(!json.contains("\"price\""));
        assert!(!json.contains("stop_price"));
        assert!(json.contains("\"market\""));
    }

    #[test]
    fn order_type_price_rules() {
        assert!(!OrderType::Market.uses_price());
        assert!(OrderType::Limit.uses_price());
        assert!(OrderType::StopLimit.uses_price());
        assert!(OrderType::StopLimit.uses_stop_price());
        assert!(!OrderType::Limit.uses_stop_price());
    }
}
