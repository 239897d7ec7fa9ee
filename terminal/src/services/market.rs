//! Demo market, wallet and account data.
//!
//! Everything the screens display comes from here. Catalogue values are
//! fixed; candles and order book sizes use a seeded-feeling random walk so
//! the charts look alive without any network.

use rand::Rng;
use shared::dto::market::{AssetInfo, BookLevel, Candle, NewsItem, OrderBook};
use shared::dto::trade::{OpenOrder, OrderSide, OrderType, TradeFill};
use shared::dto::wallet::{AssetBalance, TransactionRecord};

/// Listed assets shown on the discover and dashboard screens.
pub fn demo_assets() -> Vec<AssetInfo> {
    fn asset(symbol: &str, name: &str, price: f64, change: f64, mcap: f64, tags: &[&str]) -> AssetInfo {
        AssetInfo {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change_24h: change,
            market_cap: mcap,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    vec![
        asset("BTC", "Bitcoin", 40000.00, 2.5, 780_000_000_000.0, &["PoW", "Store of Value"]),
        asset("ETH", "Ethereum", 2500.00, -1.2, 300_000_000_000.0, &["Smart Contracts", "PoS"]),
        asset("SOL", "Solana", 150.00, 5.8, 65_000_000_000.0, &["High Throughput", "PoS"]),
        asset("ADA", "Cardano", 0.45, 0.3, 16_000_000_000.0, &["Research", "PoS"]),
        asset("DOGE", "Dogecoin", 0.15, 12.4, 21_000_000_000.0, &["Meme", "PoW"]),
        asset("SHIB", "Shiba Inu", 0.000024, -3.1, 14_000_000_000.0, &["Meme"]),
        asset("LINK", "Chainlink", 18.50, 1.7, 10_000_000_000.0, &["Oracle"]),
    ]
}

/// Trading pairs offered on the trade screen.
pub fn demo_pairs() -> Vec<String> {
    ["BTC/USDT", "ETH/USDT", "SOL/USDT", "ETH/BTC"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Order book ladder around `mid`: ten bids stepping down, ten asks
/// stepping up, with cumulative totals for depth shading.
pub fn demo_order_book(mid: f64) -> OrderBook {
    let mut rng = rand::rng();
    let step = (mid * 0.00025).max(0.01);

    let mut bids = Vec::with_capacity(10);
    let mut total = 0.0;
    for i in 0..10 {
        let size: f64 = rng.random_range(0.05..2.5);
        total += size;
        bids.push(BookLevel {
            price: mid - step * (i + 1) as f64,
            size,
            total,
        });
    }

    let mut asks = Vec::with_capacity(10);
    let mut total = 0.0;
    for i in 0..10 {
        let size: f64 = rng.random_range(0.05..2.5);
        total += size;
        asks.push(BookLevel {
            price: mid + step * (i + 1) as f64,
            size,
            total,
        });
    }

    OrderBook { bids, asks }
}

/// Random-walk candles ending at roughly `base_price`, oldest first.
pub fn demo_candles(base_price: f64, count: usize) -> Vec<Candle> {
    let mut rng = rand::rng();
    let mut candles = Vec::with_capacity(count);
    let now = chrono::Utc::now().timestamp();
    let interval = 3600i64;

    let mut current = base_price;
    for i in 0..count {
        let timestamp = now - ((count - i - 1) as i64 * interval);
        let drift = base_price * rng.random_range(-0.008..0.008);
        current = (current + drift).clamp(base_price * 0.85, base_price * 1.15);

        let open = current;
        let close = open + base_price * rng.random_range(-0.004..0.004);
        let high = open.max(close) + base_price * rng.random_range(0.0..0.002);
        let low = open.min(close) - base_price * rng.random_range(0.0..0.002);
        let volume = rng.random_range(1000.0..10000.0);

        candles.push(Candle {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        });
        current = close;
    }
    candles
}

/// Portfolio holdings shown on the dashboard.
pub fn demo_portfolio() -> Vec<AssetBalance> {
    vec![
        AssetBalance {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            amount: 0.5,
            usd_value: 20000.00,
        },
        AssetBalance {
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            amount: 10.0,
            usd_value: 25000.00,
        },
        AssetBalance {
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            amount: 150.0,
            usd_value: 22500.00,
        },
    ]
}

/// Monthly portfolio value series for the dashboard bar chart.
pub fn demo_monthly_performance() -> Vec<(String, f64)> {
    [
        ("Jan", 28_000.0),
        ("Feb", 31_500.0),
        ("Mar", 30_200.0),
        ("Apr", 34_800.0),
        ("May", 37_400.0),
        ("Jun", 40_000.0),
    ]
    .iter()
    .map(|(m, v)| (m.to_string(), *v))
    .collect()
}

/// Wallet balances shown on the wallet screen.
pub fn demo_wallet_balances() -> Vec<AssetBalance> {
    vec![
        AssetBalance {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            amount: 1.2,
            usd_value: 48000.00,
        },
        AssetBalance {
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            amount: 8.0,
            usd_value: 20000.00,
        },
        AssetBalance {
            symbol: "USDT".to_string(),
            name: "Tether".to_string(),
            amount: 12000.0,
            usd_value: 12000.00,
        },
    ]
}

/// Account transaction history.
pub fn demo_transactions() -> Vec<TransactionRecord> {
    fn tx(id: &str, date: &str, tx_type: &str, asset: &str, amount: f64, status: &str, details: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            date: date.to_string(),
            tx_type: tx_type.to_string(),
            asset: asset.to_string(),
            amount,
            status: status.to_string(),
            details: details.to_string(),
        }
    }

    vec![
        tx("t1", "2026-08-24", "Deposit", "BTC", 0.2, "Completed", "From external wallet"),
        tx("t2", "2026-08-23", "Withdrawal", "ETH", -1.5, "Completed", "To cold storage"),
        tx("t3", "2026-08-22", "Trade", "BTC", 0.1, "Completed", "Bought BTC with USDT"),
        tx("t4", "2026-08-22", "Fee", "USDT", -4.25, "Completed", "Trading fee"),
    ]
}

/// Resting orders shown in the open orders table.
pub fn demo_open_orders() -> Vec<OpenOrder> {
    vec![
        OpenOrder {
            order_id: "ord-1001".to_string(),
            pair: "BTC/USDT".to_string(),
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            amount: 0.25,
            price: Some(39500.00),
            created_at: "2026-08-25 09:14".to_string(),
        },
        OpenOrder {
            order_id: "ord-1002".to_string(),
            pair: "ETH/USDT".to_string(),
            side: OrderSide::Sell,
            order_type: OrderType::Limit,
            amount: 2.0,
            price: Some(2650.00),
            created_at: "2026-08-25 11:40".to_string(),
        },
    ]
}

/// Recent fills shown in the trade history table.
pub fn demo_trade_history() -> Vec<TradeFill> {
    vec![
        TradeFill {
            pair: "BTC/USDT".to_string(),
            side: OrderSide::Buy,
            amount: 0.1,
            price: 39875.50,
            executed_at: "2026-08-24 16:03".to_string(),
        },
        TradeFill {
            pair: "SOL/USDT".to_string(),
            side: OrderSide::Sell,
            amount: 25.0,
            price: 148.20,
            executed_at: "2026-08-24 10:31".to_string(),
        },
        TradeFill {
            pair: "ETH/USDT".to_string(),
            side: OrderSide::Buy,
            amount: 1.5,
            price: 2480.00,
            executed_at: "2026-08-23 14:12".to_string(),
        },
    ]
}

/// Market news shown on the dashboard and discover screens.
pub fn demo_news() -> Vec<NewsItem> {
    fn item(title: &str, source: &str, date: &str, summary: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            source: source.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
        }
    }

    vec![
        item(
            "Bitcoin holds above $40k as volatility cools",
            "Market Desk",
            "2026-08-25",
            "Spot volumes thinned over the weekend while open interest kept climbing.",
        ),
        item(
            "Ethereum staking ratio reaches new high",
            "Chain Weekly",
            "2026-08-24",
            "More than a third of circulating supply is now locked in the beacon chain.",
        ),
        item(
            "Exchange inflows drop to six-month low",
            "Flows Report",
            "2026-08-23",
            "On-chain data points to continued accumulation by long-term holders.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_book_ladder_is_sorted_with_running_totals() {
        let book = demo_order_book(40000.0);
        assert_eq!(book.bids.len(), 10);
        assert_eq!(book.asks.len(), 10);

        for pair in book.bids.windows(2) {
            assert!(pair[0].price > pair[1].price);
            assert!(pair[0].total < pair[1].total);
        }
        for pair in book.asks.windows(2) {
            assert!(pair[0].price < pair[1].price);
            assert!(pair[0].total < pair[1].total);
        }
        assert!(book.bids[0].price < 40000.0);
        assert!(book.asks[0].price > 40000.0);
    }

    #[test]
    fn candles_are_ordered_and_coherent() {
        let candles = demo_candles(40000.0, 50);
        assert_eq!(candles.len(), 50);
        for pair in candles.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        for candle in &candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
        }
    }

    #[test]
    fn portfolio_total_matches_dashboard_demo() {
        let total: f64 = demo_portfolio().iter().map(|a| a.usd_value).sum();
        assert_eq!(total, 67500.0);
    }
}
