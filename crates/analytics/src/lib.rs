//! # Tradebook Analytics Engine
//!
//! This crate turns a flat, unordered snapshot of journal trades into the
//! performance views the journal displays: equity curve, period cards,
//! direction and session breakdowns, streaks, weekly and monthly tables, and
//! the monthly letter grade.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of storage,
//!   sync or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every component is a pure fold over the snapshot.
//!   Nothing is cached between snapshots and "now" is always passed in, so the
//!   same input always produces the same output.
//! - **Total:** Undated records are skipped and every zero denominator yields zero.
//!   No function in this crate returns an error.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: runs every component and returns a `JournalReport`.
//! - The individual component functions (`equity_curve`, `weekly_summaries`, ...)
//!   for callers that need a single view.

// Declare the modules that constitute this crate.
pub mod dashboard;
pub mod direction;
pub mod engine;
pub mod equity;
pub mod grade;
pub mod metrics;
pub mod monthly;
pub mod recent;
pub mod report;
pub mod session;
pub mod streak;
pub mod weekly;

#[cfg(test)]
mod test_helpers;

// Re-export the key components to create a clean, public-facing API.
pub use dashboard::{MonthToDate, month_to_date};
pub use direction::{DirectionStats, direction_stats};
pub use engine::AnalyticsEngine;
pub use equity::{EquityPoint, Period, PeriodCard, equity_curve, period_cards};
pub use grade::{Grade, GradeCard, grade_month};
pub use metrics::OutcomeStats;
pub use monthly::{MonthKey, MonthlySummary, monthly_summaries};
pub use recent::recent_trades;
pub use report::JournalReport;
pub use session::{Session, SessionStats, session_stats};
pub use streak::{Streak, StreakSummary, analyze_streaks};
pub use weekly::{WeekKey, WeeklySummary, weekly_summaries};
