//! Market data DTOs: asset catalogue, OHLC candles, order books and news.

use serde::{Deserialize, Serialize};

/// A listed asset with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetInfo {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// 24h change in percent, signed.
    pub change_24h: f64,
    pub market_cap: f64,
    pub tags: Vec<String>,
}

/// One OHLC candle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// One price level in an order book ladder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookLevel {
    pub price: f64,
    pub size: f64,
    /// Cumulative size from the top of the book down to this level.
    pub total: f64,
}

/// Order book snapshot. Bids are sorted descending by price, asks ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    /// Mid price between best bid and best ask, if both sides are present.
    pub fn mid_price(&self) -> Option<f64> {
        let best_bid = self.bids.first()?.price;
        let best_ask = self.asks.first()?.price;
        Some((best_bid + best_ask) / 2.0)
    }
}

/// A market news item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub date: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_price_uses_top_of_book() {
        let book = OrderBook {
            bids: vec![BookLevel {
                price: 39990.0,
                size: 1.0,
                total: 1.0,
            }],
            asks: vec![BookLevel {
                price: 40010.0,
                size: 1.0,
                total: 1.0,
            }],
        };
        assert_eq!(book.mid_price(), Some(40000.0));
        assert_eq!(OrderBook::default().mid_price(), None);
    }
}
