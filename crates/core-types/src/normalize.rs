//! Coerces raw trade documents into canonical `TradeRecord`s.
//!
//! Nothing in here fails. A field that cannot be read falls back to its
//! neutral value (zero for amounts, `None` for dates and enums) so that an
//! in-progress or half-filled trade never breaks a whole snapshot.

use crate::structs::{RawTradeRecord, TradeRecord};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;
use std::str::FromStr;

/// Wall-clock layouts accepted for timestamps that carry no offset.
const LOCAL_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Bare dates are stored at local noon by the entry form.
const DATE_ONLY_HOUR: u32 = 12;

/// Reads a trade timestamp in any of the shapes the store produces and
/// returns it as a journal-local wall-clock time.
///
/// Accepted shapes:
/// * `{ "seconds": .., "nanoseconds": .. }` (or `_seconds` / `_nanoseconds`), UTC
/// * a JSON number of Unix epoch milliseconds, UTC
/// * an RFC 3339 string with an offset or `Z`
/// * an ISO-like string without an offset, already local
/// * a bare `YYYY-MM-DD` date, anchored at local noon
///
/// Returns `None` for anything else.
pub fn parse_trade_timestamp(raw: &Value, offset: &FixedOffset) -> Option<NaiveDateTime> {
    match raw {
        Value::String(s) => parse_timestamp_str(s, offset),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| to_local(dt, offset))
        }
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            let nanos = u32::try_from(nanos).ok()?;
            DateTime::<Utc>::from_timestamp(seconds, nanos).map(|dt| to_local(dt, offset))
        }
        _ => None,
    }
}

fn parse_timestamp_str(s: &str, offset: &FixedOffset) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(offset).naive_local());
    }

    if let Some(local) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(local);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(DATE_ONLY_HOUR, 0, 0))
}

fn to_local(dt: DateTime<Utc>, offset: &FixedOffset) -> NaiveDateTime {
    dt.with_timezone(offset).naive_local()
}

/// Parses a numeric field. Returns `None` when the field is absent or not a number.
pub fn coerce_decimal(raw: Option<&Value>) -> Option<Decimal> {
    match raw? {
        Value::Number(n) => {
            parse_decimal_str(&n.to_string()).or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        Value::String(s) => parse_decimal_str(s.trim()),
        _ => None,
    }
}

fn parse_decimal_str(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parse-or-zero, used for every amount that feeds a sum.
pub fn decimal_or_zero(raw: Option<&Value>) -> Decimal {
    coerce_decimal(raw).unwrap_or(Decimal::ZERO)
}

/// Reads a free-text field, stringifying scalars.
pub fn coerce_string(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Normalizes one raw record. Never fails.
pub fn normalize(raw: &RawTradeRecord, offset: &FixedOffset) -> TradeRecord {
    let timestamp = |v: &Option<Value>| v.as_ref().and_then(|v| parse_trade_timestamp(v, offset));

    TradeRecord {
        id: coerce_string(raw.id.as_ref()).unwrap_or_default(),
        ticker: coerce_string(raw.ticker.as_ref()).unwrap_or_default(),
        direction: coerce_string(raw.direction.as_ref()).and_then(|s| s.parse().ok()),
        result: coerce_string(raw.result.as_ref()).and_then(|s| s.parse().ok()),
        entry_price: decimal_or_zero(raw.entry_price.as_ref()),
        exit_price: coerce_decimal(raw.exit_price.as_ref()),
        leverage: decimal_or_zero(raw.leverage.as_ref()),
        gain_loss: decimal_or_zero(raw.gain_loss.as_ref()),
        fee: decimal_or_zero(raw.fee.as_ref()),
        pnl_percent: decimal_or_zero(raw.pnl_percent.as_ref()),
        comment: coerce_string(raw.comment.as_ref()).unwrap_or_default(),
        trade_date: timestamp(&raw.trade_date),
        chart_image_url: coerce_string(raw.chart_image_url.as_ref()).filter(|s| !s.is_empty()),
        created_at: timestamp(&raw.created_at),
    }
}

/// Normalizes a whole snapshot, keeping undated records so display views can list them.
pub fn normalize_all(raws: &[RawTradeRecord], offset: &FixedOffset) -> Vec<TradeRecord> {
    let trades: Vec<TradeRecord> = raws.iter().map(|raw| normalize(raw, offset)).collect();

    let undated = trades.iter().filter(|t| t.trade_date.is_none()).count();
    tracing::debug!(
        total = trades.len(),
        undated,
        "Normalized trade snapshot; undated records are left out of analytics."
    );

    trades
}
