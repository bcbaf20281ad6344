// Shared test fixtures for the analytics modules.
// Only compiled under #[cfg(test)].

use chrono::NaiveDateTime;
use core_types::{Direction, TradeRecord, TradeResult};
use rust_decimal::Decimal;

/// Parses `"YYYY-MM-DD HH:MM"` into a local timestamp.
pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("fixture timestamp")
}

/// Build a closed trade with the fields the aggregates read.
pub fn trade(
    date: &str,
    direction: Direction,
    result: TradeResult,
    gain_loss: Decimal,
    pnl_percent: Decimal,
) -> TradeRecord {
    TradeRecord {
        id: format!("{date}-{direction}-{result}"),
        ticker: "BTC".to_string(),
        direction: Some(direction),
        result: Some(result),
        entry_price: Decimal::ONE_HUNDRED,
        exit_price: None,
        leverage: Decimal::from(25),
        gain_loss,
        fee: Decimal::ZERO,
        pnl_percent,
        comment: String::new(),
        trade_date: Some(at(date)),
        chart_image_url: None,
        created_at: None,
    }
}

pub fn win(date: &str, gain_loss: Decimal, pnl_percent: Decimal) -> TradeRecord {
    trade(date, Direction::Long, TradeResult::Win, gain_loss, pnl_percent)
}

pub fn loss(date: &str, gain_loss: Decimal, pnl_percent: Decimal) -> TradeRecord {
    trade(date, Direction::Long, TradeResult::Loss, gain_loss, pnl_percent)
}

/// A trade that is still open (no result yet).
pub fn open(date: &str, gain_loss: Decimal) -> TradeRecord {
    TradeRecord {
        result: None,
        ..trade(date, Direction::Long, TradeResult::Win, gain_loss, Decimal::ZERO)
    }
}

/// A trade whose date could not be read.
pub fn undated(result: TradeResult, gain_loss: Decimal) -> TradeRecord {
    TradeRecord {
        trade_date: None,
        ..trade("2026-01-01 00:00", Direction::Long, result, gain_loss, Decimal::ZERO)
    }
}
