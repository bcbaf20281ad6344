use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The side a trade was taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Long, Direction::Short];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "long"),
            Direction::Short => write!(f, "short"),
        }
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(Direction::Long),
            "short" => Ok(Direction::Short),
            _ => Err(CoreError::InvalidInput("direction".to_string(), s.to_string())),
        }
    }
}

/// The outcome of a closed trade.
///
/// Open or breakeven positions have no `TradeResult`; a record carrying
/// `None` is not a closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeResult {
    Win,
    Loss,
}

impl TradeResult {
    /// Suggests a result from a computed P&L. A flat trade gets no suggestion.
    pub fn from_pnl(pnl: Decimal) -> Option<Self> {
        if pnl > Decimal::ZERO {
            Some(TradeResult::Win)
        } else if pnl < Decimal::ZERO {
            Some(TradeResult::Loss)
        } else {
            None
        }
    }
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeResult::Win => write!(f, "win"),
            TradeResult::Loss => write!(f, "loss"),
        }
    }
}

impl FromStr for TradeResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(TradeResult::Win),
            "loss" => Ok(TradeResult::Loss),
            _ => Err(CoreError::InvalidInput("result".to_string(), s.to_string())),
        }
    }
}

/// The visible window of the equity curve, measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// The last day.
    Daily,
    /// The last seven days.
    Weekly,
    /// The last calendar month.
    Monthly,
    #[default]
    All,
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Daily => write!(f, "daily"),
            Timeframe::Weekly => write!(f, "weekly"),
            Timeframe::Monthly => write!(f, "monthly"),
            Timeframe::All => write!(f, "all"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            "all" => Ok(Timeframe::All),
            _ => Err(CoreError::InvalidInput("timeframe".to_string(), s.to_string())),
        }
    }
}

/// Period filter for the recent-trades feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecentPeriod {
    #[default]
    Today,
    Week,
    Month,
    All,
}

impl fmt::Display for RecentPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecentPeriod::Today => write!(f, "today"),
            RecentPeriod::Week => write!(f, "week"),
            RecentPeriod::Month => write!(f, "month"),
            RecentPeriod::All => write!(f, "all"),
        }
    }
}

impl FromStr for RecentPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(RecentPeriod::Today),
            "week" => Ok(RecentPeriod::Week),
            "month" => Ok(RecentPeriod::Month),
            "all" => Ok(RecentPeriod::All),
            _ => Err(CoreError::InvalidInput("period".to_string(), s.to_string())),
        }
    }
}
