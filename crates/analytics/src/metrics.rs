//! Small building blocks shared by every aggregate.

use chrono::NaiveDateTime;
use core_types::TradeRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Division that yields zero instead of panicking on a zero denominator or a
/// quotient too large for a `Decimal`.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// `wins / (wins + losses) * 100`, or zero when there are no closed trades.
pub fn win_rate(wins: usize, losses: usize) -> Decimal {
    ratio(Decimal::from(wins), Decimal::from(wins + losses)) * dec!(100)
}

/// Currency expectancy re-expressed as a percentage of the average loss.
///
/// `(win_rate/100 * avg_win) - ((1 - win_rate/100) * avg_loss)`, divided by
/// `avg_loss` and scaled by 100. Zero when there are no closed trades or no
/// average loss to scale against. The final scaling by 100 saturates.
pub fn currency_expectancy_pct(
    win_rate: Decimal,
    avg_win: Decimal,
    avg_loss: Decimal,
    closed: usize,
) -> Decimal {
    if closed == 0 {
        return Decimal::ZERO;
    }
    let p_win = ratio(win_rate, dec!(100));
    let expectancy = (p_win.saturating_mul(avg_win))
        .saturating_sub((Decimal::ONE - p_win).saturating_mul(avg_loss));
    ratio(expectancy, avg_loss).saturating_mul(dec!(100))
}

/// Yields every trade with a usable date together with that date.
pub(crate) fn dated(trades: &[TradeRecord]) -> impl Iterator<Item = (NaiveDateTime, &TradeRecord)> {
    trades
        .iter()
        .filter_map(|trade| trade.trade_date.map(|date| (date, trade)))
}

/// Dated trades in ascending date order. The sort is stable, so trades that
/// share a timestamp keep their snapshot order.
pub(crate) fn chronological(trades: &[TradeRecord]) -> Vec<(NaiveDateTime, &TradeRecord)> {
    let mut ordered: Vec<_> = dated(trades).collect();
    ordered.sort_by_key(|(date, _)| *date);
    ordered
}

/// Win/loss tally over a set of closed trades.
///
/// Used for the per-direction and per-session breakdowns, which report the
/// same figures over different partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStats {
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: Decimal,
    pub total_pnl: Decimal,
    pub avg_pnl_percent: Decimal,
}

impl OutcomeStats {
    /// Folds a set of trades. Trades that are not closed are skipped.
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        let mut stats = Self::default();
        let mut pnl_percent_sum = Decimal::ZERO;

        for trade in trades.into_iter().filter(|t| t.is_closed()) {
            stats.trades += 1;
            if trade.is_win() {
                stats.wins += 1;
            } else {
                stats.losses += 1;
            }
            stats.total_pnl = stats.total_pnl.saturating_add(trade.gain_loss);
            pnl_percent_sum = pnl_percent_sum.saturating_add(trade.pnl_percent);
        }

        stats.win_rate = win_rate(stats.wins, stats.losses);
        stats.avg_pnl_percent = ratio(pnl_percent_sum, Decimal::from(stats.trades));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn ratio_guards_zero_denominators() {
        assert_eq!(ratio(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio(dec!(15), dec!(5)), dec!(3));
    }

    #[test]
    fn win_rate_is_zero_without_closed_trades() {
        assert_eq!(win_rate(0, 0), Decimal::ZERO);
        assert_eq!(win_rate(1, 1), dec!(50));
        assert_eq!(win_rate(3, 0), dec!(100));
    }

    #[test]
    fn currency_expectancy_is_relative_to_average_loss() {
        assert_eq!(currency_expectancy_pct(dec!(50), dec!(15), dec!(5), 2), dec!(100));
        assert_eq!(
            currency_expectancy_pct(dec!(100), dec!(15), Decimal::ZERO, 1),
            Decimal::ZERO
        );
        assert_eq!(
            currency_expectancy_pct(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, 0),
            Decimal::ZERO
        );
    }

    #[test]
    fn ratio_is_zero_when_the_quotient_overflows() {
        assert_eq!(ratio(Decimal::MAX, dec!(0.1)), Decimal::ZERO);
        assert_eq!(ratio(Decimal::MIN, dec!(0.5)), Decimal::ZERO);
    }

    #[test]
    fn expectancy_saturates_against_a_tiny_average_loss() {
        let tiny = dec!(0.0000000000000000000000000001);
        assert_eq!(currency_expectancy_pct(dec!(100), dec!(1), tiny, 3), Decimal::MAX);
        // The quotient itself does not fit, so it falls back to zero.
        assert_eq!(currency_expectancy_pct(dec!(100), Decimal::MAX, tiny, 3), Decimal::ZERO);
    }

    #[test]
    fn outcome_totals_saturate_instead_of_overflowing() {
        let trades = vec![
            win("2026-02-03 10:00", Decimal::MAX, Decimal::MAX),
            win("2026-02-04 10:00", Decimal::MAX, Decimal::MAX),
        ];
        let stats = OutcomeStats::from_trades(&trades);
        assert_eq!(stats.trades, 2);
        assert_eq!(stats.total_pnl, Decimal::MAX);
        assert_eq!(stats.avg_pnl_percent, Decimal::MAX / dec!(2));
    }
}
