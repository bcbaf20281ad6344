use crate::dashboard::month_to_date;
use crate::direction::direction_stats;
use crate::equity::{equity_curve, period_cards};
use crate::monthly::monthly_summaries;
use crate::report::JournalReport;
use crate::session::session_stats;
use crate::streak::analyze_streaks;
use crate::weekly::weekly_summaries;
use chrono::NaiveDateTime;
use core_types::{Timeframe, TradeRecord};

/// A stateless calculator for deriving journal analytics from a trade snapshot.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating every journal metric.
    ///
    /// # Arguments
    ///
    /// * `trades` - The full, normalized snapshot, in any order. Undated records are tolerated.
    /// * `now` - The local instant relative windows are measured from.
    /// * `timeframe` - The visible window of the equity curve.
    ///
    /// # Returns
    ///
    /// A `JournalReport`. The calculation is total: an empty snapshot yields
    /// an empty, zeroed report.
    pub fn calculate(
        &self,
        trades: &[TradeRecord],
        now: NaiveDateTime,
        timeframe: Timeframe,
    ) -> JournalReport {
        let analyzed_records = trades.iter().filter(|t| t.trade_date.is_some()).count();

        tracing::debug!(
            total = trades.len(),
            analyzed = analyzed_records,
            %timeframe,
            "Calculating journal analytics."
        );

        JournalReport {
            as_of: now,
            timeframe,
            total_records: trades.len(),
            analyzed_records,
            equity_curve: equity_curve(trades, now, timeframe),
            period_cards: period_cards(trades, now),
            direction_stats: direction_stats(trades),
            session_stats: session_stats(trades),
            streaks: analyze_streaks(trades),
            weekly: weekly_summaries(trades),
            monthly: monthly_summaries(trades),
            month_to_date: month_to_date(trades, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use core_types::TradeResult;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_snapshot_yields_an_empty_report() {
        let report = AnalyticsEngine::new().calculate(&[], at("2026-02-10 12:00"), Timeframe::All);
        assert_eq!(report.total_records, 0);
        assert!(report.equity_curve.is_empty());
        assert_eq!(report.period_cards.len(), 4);
        assert_eq!(report.direction_stats.len(), 2);
        assert_eq!(report.session_stats.len(), 4);
        assert_eq!(report.streaks.current, None);
        assert!(report.weekly.is_empty());
        assert!(report.monthly.is_empty());
        assert_eq!(report.month_to_date.total_pnl, Decimal::ZERO);
    }

    #[test]
    fn counts_only_dated_records_as_analyzed() {
        let trades = vec![
            win("2026-02-09 10:00", dec!(10), dec!(5)),
            undated(TradeResult::Loss, dec!(-3)),
        ];
        let now = at("2026-02-10 12:00");
        let report = AnalyticsEngine::new().calculate(&trades, now, Timeframe::Weekly);
        assert_eq!(report.total_records, 2);
        assert_eq!(report.analyzed_records, 1);
        assert_eq!(report.equity_curve.len(), 1);
        assert_eq!(report.timeframe, Timeframe::Weekly);
    }
}
