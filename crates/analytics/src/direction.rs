use crate::metrics::{OutcomeStats, dated};
use core_types::{Direction, TradeRecord};
use serde::{Deserialize, Serialize};

/// Closed-trade performance for one trade direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionStats {
    pub direction: Direction,
    #[serde(flatten)]
    pub stats: OutcomeStats,
}

/// Splits closed, dated trades into exactly two buckets: long, then short.
///
/// Trades with no recognizable direction belong to neither bucket.
pub fn direction_stats(trades: &[TradeRecord]) -> Vec<DirectionStats> {
    Direction::ALL
        .into_iter()
        .map(|direction| DirectionStats {
            direction,
            stats: OutcomeStats::from_trades(
                dated(trades)
                    .map(|(_, trade)| trade)
                    .filter(|trade| trade.direction == Some(direction)),
            ),
        })
        .collect()
}
