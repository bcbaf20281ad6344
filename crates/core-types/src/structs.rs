use crate::enums::{Direction, TradeResult};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A trade exactly as the journal's document store hands it over.
///
/// Every field is optional and loosely typed: numbers may arrive as strings,
/// timestamps as structured objects, epoch millis or ISO-like strings. The
/// field names are the stored document names and must not change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTradeRecord {
    pub id: Option<Value>,
    pub ticker: Option<Value>,
    pub direction: Option<Value>,
    pub result: Option<Value>,
    pub entry_price: Option<Value>,
    pub exit_price: Option<Value>,
    pub leverage: Option<Value>,
    pub gain_loss: Option<Value>,
    pub fee: Option<Value>,
    pub pnl_percent: Option<Value>,
    pub comment: Option<Value>,
    pub trade_date: Option<Value>,
    pub chart_image_url: Option<Value>,
    pub created_at: Option<Value>,
}

/// The canonical, normalized trade the analytics engine operates on.
///
/// Timestamps are journal-local wall-clock times. A `trade_date` of `None`
/// marks a record whose date was missing or unparsable; such records are
/// left out of every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub ticker: String,
    pub direction: Option<Direction>,
    pub result: Option<TradeResult>,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub leverage: Decimal,
    pub gain_loss: Decimal,
    pub fee: Decimal,
    pub pnl_percent: Decimal,
    pub comment: String,
    pub trade_date: Option<NaiveDateTime>,
    pub chart_image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl TradeRecord {
    /// A trade is closed once it has been marked a win or a loss.
    pub fn is_closed(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_win(&self) -> bool {
        self.result == Some(TradeResult::Win)
    }

    pub fn is_loss(&self) -> bool {
        self.result == Some(TradeResult::Loss)
    }
}
