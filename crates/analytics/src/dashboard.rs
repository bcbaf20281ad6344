use crate::metrics::{currency_expectancy_pct, dated, ratio, win_rate};
use crate::monthly::MonthKey;
use chrono::NaiveDateTime;
use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the calendar month containing "now".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthToDate {
    /// `YYYY-MM`
    pub month: String,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_pnl: Decimal,
    pub win_rate: Decimal,
    pub avg_win: Decimal,
    pub avg_loss: Decimal,
    /// Same definition as the weekly expectancy: currency expectancy as a
    /// percentage of the average loss.
    pub expectancy: Decimal,
    pub profit_factor: Decimal,
}

pub fn month_to_date(trades: &[TradeRecord], now: NaiveDateTime) -> MonthToDate {
    let current = MonthKey::containing(now.date());

    let mut count = 0;
    let (mut wins, mut losses) = (0, 0);
    let (mut total_pnl, mut gross_win, mut gross_loss) =
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

    let this_month = dated(trades).filter(|(date, _)| MonthKey::containing(date.date()) == current);
    for (_, trade) in this_month {
        count += 1;
        total_pnl = total_pnl.saturating_add(trade.gain_loss);
        if trade.is_win() {
            wins += 1;
            gross_win = gross_win.saturating_add(trade.gain_loss);
        } else if trade.is_loss() {
            losses += 1;
            gross_loss = gross_loss.saturating_add(trade.gain_loss);
        }
    }

    let gross_loss = gross_loss.abs();
    let win_rate = win_rate(wins, losses);
    let avg_win = ratio(gross_win, Decimal::from(wins));
    let avg_loss = ratio(gross_loss, Decimal::from(losses));

    MonthToDate {
        month: current.to_string(),
        trades: count,
        wins,
        losses,
        total_pnl,
        win_rate,
        avg_win,
        avg_loss,
        expectancy: currency_expectancy_pct(win_rate, avg_win, avg_loss, wins + losses),
        profit_factor: ratio(gross_win, gross_loss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use rust_decimal_macros::dec;

    #[test]
    fn only_the_current_month_counts() {
        let trades = vec![
            win("2026-02-03 10:00", dec!(30), dec!(10)),
            loss("2026-02-05 10:00", dec!(-10), dec!(-5)),
            open("2026-02-06 10:00", dec!(2)),
            win("2026-01-30 10:00", dec!(500), dec!(50)),
        ];

        let mtd = month_to_date(&trades, at("2026-02-10 12:00"));
        assert_eq!(mtd.month, "2026-02");
        assert_eq!(mtd.trades, 3);
        assert_eq!((mtd.wins, mtd.losses), (1, 1));
        assert_eq!(mtd.total_pnl, dec!(22));
        assert_eq!(mtd.win_rate, dec!(50));
        assert_eq!(mtd.profit_factor, dec!(3));
        // (0.5 * 30 - 0.5 * 10) / 10 * 100
        assert_eq!(mtd.expectancy, dec!(100));
    }

    #[test]
    fn empty_month_is_all_zero() {
        let mtd = month_to_date(&[], at("2026-02-10 12:00"));
        assert_eq!(mtd.trades, 0);
        assert!(mtd.win_rate.is_zero() && mtd.expectancy.is_zero() && mtd.profit_factor.is_zero());
    }
}
