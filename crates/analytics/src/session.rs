use crate::metrics::{OutcomeStats, dated};
use chrono::Timelike;
use core_types::TradeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Hour-of-day trading session. The four sessions cover 0..=23 without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Overnight,
    Morning,
    Afternoon,
    Evening,
}

impl Session {
    pub const ALL: [Session; 4] = [
        Session::Overnight,
        Session::Morning,
        Session::Afternoon,
        Session::Evening,
    ];

    pub fn hours(self) -> RangeInclusive<u32> {
        match self {
            Session::Overnight => 0..=5,
            Session::Morning => 6..=11,
            Session::Afternoon => 12..=17,
            Session::Evening => 18..=23,
        }
    }

    /// The session containing a local hour (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => Session::Overnight,
            6..=11 => Session::Morning,
            12..=17 => Session::Afternoon,
            _ => Session::Evening,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        let name = match self {
            Session::Overnight => "Overnight",
            Session::Morning => "Morning",
            Session::Afternoon => "Afternoon",
            Session::Evening => "Evening",
        };
        write!(f, "{name} ({:02}:00-{:02}:59)", hours.start(), hours.end())
    }
}

/// Closed-trade performance for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub session: Session,
    #[serde(flatten)]
    pub stats: OutcomeStats,
}

/// Buckets closed, dated trades by the local hour of their trade date.
pub fn session_stats(trades: &[TradeRecord]) -> Vec<SessionStats> {
    Session::ALL
        .into_iter()
        .map(|session| SessionStats {
            session,
            stats: OutcomeStats::from_trades(
                dated(trades)
                    .filter(|(date, _)| Session::from_hour(date.hour()) == session)
                    .map(|(_, trade)| trade),
            ),
        })
        .collect()
}
