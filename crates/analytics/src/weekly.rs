use crate::metrics::{currency_expectancy_pct, dated, ratio, win_rate};
use chrono::{Datelike, Days, NaiveDate};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A Monday-to-Sunday week, identified by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// The week containing `date`. A Sunday belongs to the week that began six days earlier.
    pub fn containing(date: NaiveDate) -> Self {
        let days_since_monday = u64::from(date.weekday().num_days_from_monday());
        Self(date.checked_sub_days(Days::new(days_since_monday)).unwrap_or(NaiveDate::MIN))
    }

    pub fn start(self) -> NaiveDate {
        self.0
    }

    pub fn end(self) -> NaiveDate {
        self.0.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
    }

    /// e.g. `Feb 2 - Feb 8, 2026`
    pub fn label(self) -> String {
        format!(
            "{} - {}",
            self.start().format("%b %-d"),
            self.end().format("%b %-d, %Y")
        )
    }
}

/// Currency-based performance for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    /// Every dated trade in the week, closed or not.
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// Sum of winners' `gain_loss`.
    pub total_gain: Decimal,
    /// Sum of |losers' `gain_loss`|.
    pub total_loss: Decimal,
    pub fees: Decimal,
    /// Net `gain_loss` over every trade in the week.
    pub pnl: Decimal,
    pub win_rate: Decimal,
    pub avg_win: Decimal,
    pub avg_loss: Decimal,
    /// Currency expectancy as a percentage of `avg_loss`.
    pub expectancy: Decimal,
    pub profit_factor: Decimal,
    /// Equal to `pnl` (currency) when the week has a closed trade, else zero.
    /// Kept for compatibility with stored dashboards; it is not a percentage.
    pub pnl_percent: Decimal,
}

#[derive(Debug, Default)]
struct WeekTally {
    trades: usize,
    wins: usize,
    losses: usize,
    total_gain: Decimal,
    total_loss: Decimal,
    fees: Decimal,
    pnl: Decimal,
}

impl WeekTally {
    fn add(&mut self, trade: &TradeRecord) {
        self.trades += 1;
        if trade.is_win() {
            self.wins += 1;
            self.total_gain = self.total_gain.saturating_add(trade.gain_loss);
        } else if trade.is_loss() {
            self.losses += 1;
            self.total_loss = self.total_loss.saturating_add(trade.gain_loss.abs());
        }
        self.fees = self.fees.saturating_add(trade.fee);
        self.pnl = self.pnl.saturating_add(trade.gain_loss);
    }

    fn summarize(self, key: WeekKey) -> WeeklySummary {
        let closed = self.wins + self.losses;
        let win_rate = win_rate(self.wins, self.losses);
        let avg_win = ratio(self.total_gain, Decimal::from(self.wins));
        let avg_loss = ratio(self.total_loss, Decimal::from(self.losses));

        WeeklySummary {
            start: key.start(),
            end: key.end(),
            label: key.label(),
            trades: self.trades,
            wins: self.wins,
            losses: self.losses,
            total_gain: self.total_gain,
            total_loss: self.total_loss,
            fees: self.fees,
            pnl: self.pnl,
            win_rate,
            avg_win,
            avg_loss,
            expectancy: currency_expectancy_pct(win_rate, avg_win, avg_loss, closed),
            profit_factor: ratio(self.total_gain, self.total_loss),
            pnl_percent: if closed > 0 { self.pnl } else { Decimal::ZERO },
        }
    }
}

/// Groups dated trades into Monday-to-Sunday weeks, newest week first.
///
/// Independent of "now": the same snapshot always yields the same weeks.
pub fn weekly_summaries(trades: &[TradeRecord]) -> Vec<WeeklySummary> {
    let weeks = dated(trades).fold(
        BTreeMap::<WeekKey, WeekTally>::new(),
        |mut weeks, (date, trade)| {
            weeks
                .entry(WeekKey::containing(date.date()))
                .or_default()
                .add(trade);
            weeks
        },
    );

    weeks
        .into_iter()
        .rev()
        .map(|(key, tally)| tally.summarize(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use core_types::TradeResult;
    use rust_decimal_macros::dec;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn week_starts_on_monday_and_sunday_closes_it() {
        // 2026-02-02 is a Monday, 2026-02-08 a Sunday.
        assert_eq!(WeekKey::containing(day("2026-02-02")).start(), day("2026-02-02"));
        assert_eq!(WeekKey::containing(day("2026-02-05")).start(), day("2026-02-02"));
        assert_eq!(WeekKey::containing(day("2026-02-08")).start(), day("2026-02-02"));
        assert_eq!(WeekKey::containing(day("2026-02-09")).start(), day("2026-02-09"));
        assert_eq!(WeekKey::containing(day("2026-02-08")).end(), day("2026-02-08"));
    }

    #[test]
    fn weeks_at_the_calendar_edges_are_clamped() {
        assert_eq!(WeekKey::containing(NaiveDate::MIN).start(), NaiveDate::MIN);
        assert_eq!(WeekKey::containing(NaiveDate::MAX).end(), NaiveDate::MAX);
    }

    #[test]
    fn labels_span_the_week() {
        assert_eq!(WeekKey::containing(day("2026-02-04")).label(), "Feb 2 - Feb 8, 2026");
        assert_eq!(WeekKey::containing(day("2026-01-01")).label(), "Dec 29 - Jan 4, 2026");
    }

    #[test]
    fn aggregates_one_week() {
        let mut first = win("2026-02-03 10:00", dec!(15), dec!(20));
        first.fee = dec!(1.2);
        let mut second = loss("2026-02-04 10:00", dec!(-5), dec!(-10));
        second.fee = dec!(0.8);

        let weeks = weekly_summaries(&[first, second]);
        assert_eq!(weeks.len(), 1);
        let week = &weeks[0];
        assert_eq!(week.win_rate, dec!(50));
        assert_eq!(week.total_gain, dec!(15));
        assert_eq!(week.total_loss, dec!(5));
        assert_eq!(week.fees, dec!(2.0));
        assert_eq!(week.pnl, dec!(10));
        assert_eq!(week.pnl_percent, dec!(10));
        assert_eq!(week.avg_win, dec!(15));
        assert_eq!(week.avg_loss, dec!(5));
        assert_eq!(week.profit_factor, dec!(3));
        assert_eq!(week.expectancy, dec!(100));
    }

    #[test]
    fn open_trades_count_toward_pnl_and_fees_only() {
        let mut pending = open("2026-02-05 10:00", dec!(-3));
        pending.fee = dec!(0.5);
        let weeks = weekly_summaries(&[win("2026-02-03 10:00", dec!(6), dec!(8)), pending]);

        let week = &weeks[0];
        assert_eq!(week.trades, 2);
        assert_eq!((week.wins, week.losses), (1, 0));
        assert_eq!(week.pnl, dec!(3));
        assert_eq!(week.fees, dec!(0.5));
        assert_eq!(week.profit_factor, Decimal::ZERO);
        assert_eq!(week.expectancy, Decimal::ZERO);
    }

    #[test]
    fn week_without_closed_trades_has_zero_pnl_percent() {
        let weeks = weekly_summaries(&[open("2026-02-05 10:00", dec!(4))]);
        assert_eq!(weeks[0].pnl, dec!(4));
        assert_eq!(weeks[0].pnl_percent, Decimal::ZERO);
        assert_eq!(weeks[0].win_rate, Decimal::ZERO);
    }

    #[test]
    fn newest_week_first_and_undated_ignored() {
        let trades = vec![
            win("2026-01-12 10:00", dec!(1), dec!(1)),
            loss("2026-02-08 23:00", dec!(-1), dec!(-1)),
            undated(TradeResult::Win, dec!(100)),
            win("2026-01-25 10:00", dec!(2), dec!(2)),
        ];
        let starts: Vec<_> = weekly_summaries(&trades).iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![day("2026-02-02"), day("2026-01-19"), day("2026-01-12")]);
    }
}
