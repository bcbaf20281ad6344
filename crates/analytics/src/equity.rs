use crate::metrics::{chronological, dated};
use chrono::{Datelike, Duration, Months, NaiveDateTime};
use core_types::{Timeframe, TradeRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of the equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDateTime,
    pub ticker: String,
    /// Running sum of `gain_loss` over the full history up to and including this trade.
    pub cumulative_pnl: Decimal,
    /// The trade's own leveraged return.
    pub pnl_percent: Decimal,
}

/// Builds the cumulative P&L curve and returns the slice visible in `timeframe`.
///
/// The running sum is always taken over the entire dated history; narrowing
/// the window only hides older points, it never restarts the sum. The sum
/// saturates at the `Decimal` bounds.
pub fn equity_curve(
    trades: &[TradeRecord],
    now: NaiveDateTime,
    timeframe: Timeframe,
) -> Vec<EquityPoint> {
    let mut cumulative = Decimal::ZERO;
    let points = chronological(trades).into_iter().map(|(date, trade)| {
        cumulative = cumulative.saturating_add(trade.gain_loss);
        EquityPoint {
            date,
            ticker: trade.ticker.clone(),
            cumulative_pnl: cumulative,
            pnl_percent: trade.pnl_percent,
        }
    });

    match window_start(timeframe, now) {
        Some(start) => points.filter(|p| p.date >= start).collect(),
        None => points.collect(),
    }
}

/// The earliest visible instant for a timeframe, or `None` for no limit.
fn window_start(timeframe: Timeframe, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match timeframe {
        Timeframe::Daily => now.checked_sub_signed(Duration::days(1)),
        Timeframe::Weekly => now.checked_sub_signed(Duration::days(7)),
        Timeframe::Monthly => now.checked_sub_months(Months::new(1)),
        Timeframe::All => None,
    }
}

/// The four dashboard summary periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Same calendar date as now.
    Day,
    /// Trailing seven days, inclusive of both ends.
    Week,
    /// Same calendar month as now.
    Month,
    /// Same calendar year as now.
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    fn contains(self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self {
            Period::Day => date.date() == now.date(),
            Period::Week => {
                now.checked_sub_signed(Duration::days(7)).is_none_or(|start| date >= start)
                    && date <= now
            }
            Period::Month => date.year() == now.year() && date.month() == now.month(),
            Period::Year => date.year() == now.year(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
            Period::Year => write!(f, "year"),
        }
    }
}

/// Sum of P&L% over one summary period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodCard {
    pub period: Period,
    pub pnl_percent: Decimal,
    pub trades: usize,
}

/// Computes the day/week/month/year P&L% cards relative to `now`.
pub fn period_cards(trades: &[TradeRecord], now: NaiveDateTime) -> Vec<PeriodCard> {
    Period::ALL
        .into_iter()
        .map(|period| {
            let (pnl_percent, count) = dated(trades)
                .filter(|(date, _)| period.contains(*date, now))
                .fold((Decimal::ZERO, 0), |(sum, n), (_, trade)| {
                    (sum.saturating_add(trade.pnl_percent), n + 1)
                });

            PeriodCard { period, pnl_percent, trades: count }
        })
        .collect()
}
