use crate::grade::{GradeCard, grade_month};
use crate::metrics::{dated, ratio, win_rate};
use chrono::{Datelike, NaiveDate};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A calendar month. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// e.g. `February 2026`
    pub fn label(self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

/// `YYYY-MM`
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Percentage-based performance and grade for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub key: String,
    pub label: String,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// Sum of winners' positive P&L%.
    pub total_win_percent: Decimal,
    /// Sum of |losers' negative P&L%|.
    pub total_loss_percent_abs: Decimal,
    /// Net `gain_loss` in currency.
    pub total_pnl: Decimal,
    /// Sum of every trade's P&L%, the month's aggregate leveraged return.
    pub total_pnl_percent: Decimal,
    pub win_rate: Decimal,
    pub avg_win: Decimal,
    /// Negative (or zero) average losing P&L%.
    pub avg_loss: Decimal,
    /// Expected P&L% per closed trade.
    pub expectancy: Decimal,
    pub profit_factor: Decimal,
    pub grade: GradeCard,
}

#[derive(Debug, Default)]
struct MonthTally {
    trades: usize,
    wins: usize,
    losses: usize,
    total_win_percent: Decimal,
    total_loss_percent_abs: Decimal,
    total_pnl: Decimal,
    total_pnl_percent: Decimal,
}

impl MonthTally {
    fn add(&mut self, trade: &TradeRecord) {
        self.trades += 1;
        if trade.is_win() {
            self.wins += 1;
            self.total_win_percent = self
                .total_win_percent
                .saturating_add(trade.pnl_percent.max(Decimal::ZERO));
        } else if trade.is_loss() {
            self.losses += 1;
            self.total_loss_percent_abs = self
                .total_loss_percent_abs
                .saturating_add(trade.pnl_percent.min(Decimal::ZERO).abs());
        }
        self.total_pnl = self.total_pnl.saturating_add(trade.gain_loss);
        self.total_pnl_percent = self.total_pnl_percent.saturating_add(trade.pnl_percent);
    }

    fn summarize(self, key: MonthKey) -> MonthlySummary {
        let closed = self.wins + self.losses;
        let win_rate = win_rate(self.wins, self.losses);
        let avg_win = ratio(self.total_win_percent, Decimal::from(self.wins));
        // `-ratio(..)` would turn a loss-free month into a negative zero that prints as "-0".
        let avg_loss =
            Decimal::ZERO - ratio(self.total_loss_percent_abs, Decimal::from(self.losses));

        let expectancy = if closed > 0 {
            let p_win = ratio(win_rate, dec!(100));
            p_win
                .saturating_mul(avg_win)
                .saturating_add((Decimal::ONE - p_win).saturating_mul(avg_loss))
        } else {
            Decimal::ZERO
        };
        let profit_factor = ratio(self.total_win_percent, self.total_loss_percent_abs);
        let grade = grade_month(self.total_pnl_percent, profit_factor, expectancy, self.total_pnl);

        MonthlySummary {
            key: key.to_string(),
            label: key.label(),
            trades: self.trades,
            wins: self.wins,
            losses: self.losses,
            total_win_percent: self.total_win_percent,
            total_loss_percent_abs: self.total_loss_percent_abs,
            total_pnl: self.total_pnl,
            total_pnl_percent: self.total_pnl_percent,
            win_rate,
            avg_win,
            avg_loss,
            expectancy,
            profit_factor,
            grade,
        }
    }
}

/// Groups dated trades by calendar month and grades each month, newest first.
pub fn monthly_summaries(trades: &[TradeRecord]) -> Vec<MonthlySummary> {
    let months = dated(trades).fold(
        BTreeMap::<MonthKey, MonthTally>::new(),
        |mut months, (date, trade)| {
            months
                .entry(MonthKey::containing(date.date()))
                .or_default()
                .add(trade);
            months
        },
    );

    tracing::debug!(months = months.len(), "Aggregated monthly buckets.");

    months
        .into_iter()
        .rev()
        .map(|(key, tally)| tally.summarize(key))
        .collect()
}
