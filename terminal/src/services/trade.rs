//! Mock exchange order gateway.

use std::time::Duration;

use async_trait::async_trait;
use shared::dto::trade::{OrderReceipt, OrderTicket};
use tracing::info;

use crate::core::service::OrderGateway;

/// Stand-in for the exchange matching engine. Acknowledges every valid
/// ticket after a fixed delay.
pub struct MockOrderGateway {
    delay: Duration,
}

impl MockOrderGateway {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockOrderGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn place_order(&self, ticket: OrderTicket) -> Result<OrderReceipt, String> {
        info!(
            pair = %ticket.pair,
            side = ?ticket.side,
            order_type = ?ticket.order_type,
            amount = ticket.amount,
            "placing order (mock)"
        );
        tokio::time::sleep(self.delay).await;

        let order_id = uuid::Uuid::new_v4().to_string();
        info!(order_id = %order_id, "order accepted (mock)");
        Ok(OrderReceipt {
            order_id,
            message: format!(
                "{} {} order for {} {} placed",
                ticket.side.label(),
                ticket.order_type.label().to_lowercase(),
                ticket.amount,
                ticket.pair
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::trade::{OrderSide, OrderType};

    #[tokio::test]
    async fn every_ticket_gets_a_receipt() {
        let gateway = MockOrderGateway::with_delay(Duration::from_millis(1));
        let receipt = gateway
            .place_order(OrderTicket {
                pair: "BTC/USDT".to_string(),
                side: OrderSide::Buy,
                order_type: OrderType::Limit,
                amount: 0.5,
                price: Some(39000.0),
                stop_price: None,
            })
            .await
            .unwrap();
        assert!(!receipt.order_id.is_empty());
        assert!(receipt.message.contains("BTC/USDT"));
    }
}
