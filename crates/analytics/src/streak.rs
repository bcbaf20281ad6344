use crate::metrics::chronological;
use core_types::{TradeRecord, TradeResult};
use serde::{Deserialize, Serialize};

/// The run in progress at the most recent closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub result: TradeResult,
    pub length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
    /// `None` when there are no closed trades.
    pub current: Option<Streak>,
}

/// Walks closed trades in date order once, tracking runs of equal results.
///
/// The win and loss maxima are tracked independently. `current` is the state
/// at the end of the walk, not a historical maximum.
pub fn analyze_streaks(trades: &[TradeRecord]) -> StreakSummary {
    let mut summary = StreakSummary::default();

    for result in chronological(trades).into_iter().filter_map(|(_, t)| t.result) {
        let run = match summary.current {
            Some(streak) if streak.result == result => Streak {
                result,
                length: streak.length + 1,
            },
            _ => Streak { result, length: 1 },
        };

        let best = match result {
            TradeResult::Win => &mut summary.max_win_streak,
            TradeResult::Loss => &mut summary.max_loss_streak,
        };
        *best = (*best).max(run.length);
        summary.current = Some(run);
    }

    summary
}
