use crate::dashboard::MonthToDate;
use crate::direction::DirectionStats;
use crate::equity::{EquityPoint, PeriodCard};
use crate::monthly::MonthlySummary;
use crate::session::SessionStats;
use crate::streak::StreakSummary;
use crate::weekly::WeeklySummary;
use chrono::NaiveDateTime;
use core_types::Timeframe;
use serde::{Deserialize, Serialize};

/// Every derived view of one trade snapshot.
///
/// This struct is the final output of the `AnalyticsEngine` and is what the
/// presentation layer renders. It is rebuilt from scratch for every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalReport {
    /// The "now" every relative window was measured from.
    pub as_of: NaiveDateTime,
    pub timeframe: Timeframe,

    // I. Snapshot coverage
    pub total_records: usize,
    /// Records with a usable trade date; only these feed the figures below.
    pub analyzed_records: usize,

    // II. Equity
    pub equity_curve: Vec<EquityPoint>,
    pub period_cards: Vec<PeriodCard>,

    // III. Breakdowns
    pub direction_stats: Vec<DirectionStats>,
    pub session_stats: Vec<SessionStats>,
    pub streaks: StreakSummary,

    // IV. Calendar periods
    pub weekly: Vec<WeeklySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub month_to_date: MonthToDate,
}
