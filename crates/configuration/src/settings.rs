use crate::error::ConfigError;
use chrono::FixedOffset;
use core_types::{RecentPeriod, Timeframe};
use serde::Deserialize;
use std::path::PathBuf;

/// Furthest a real-world UTC offset reaches, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

const MAX_SENSIBLE_RECENT_LIMIT: usize = 1_000;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing file or section falls back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub journal: Journal,
    pub report: Report,
    pub logging: Logging,
}

impl Config {
    /// Rejects values that would make the engine's output meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.journal.offset()?;
        if self.report.recent_limit == 0 {
            return Err(ConfigError::ValidationError(
                "report.recent_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Values that are valid but probably not what the user meant.
    pub fn unusual_values(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.journal.utc_offset_minutes % 15 != 0 {
            notes.push(format!(
                "journal.utc_offset_minutes = {} is not a whole quarter hour",
                self.journal.utc_offset_minutes
            ));
        }
        if self.report.recent_limit > MAX_SENSIBLE_RECENT_LIMIT {
            notes.push(format!(
                "report.recent_limit = {} will print a very long table",
                self.report.recent_limit
            ));
        }
        notes
    }

    /// Emits a warning for each of [`Config::unusual_values`]. Call once logging is up.
    pub fn warn_unusual_values(&self) {
        for note in self.unusual_values() {
            tracing::warn!("{note}");
        }
    }
}

/// Settings describing where the journal's trades were logged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Journal {
    /// The journal's local UTC offset in minutes (e.g. -300 for UTC-5).
    /// Trade dates without an explicit offset are taken to be in this zone,
    /// and hour-of-day and calendar bucketing happen in it.
    pub utc_offset_minutes: i32,
}

impl Journal {
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::ValidationError(format!(
                "journal.utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {}",
                self.utc_offset_minutes
            )));
        }
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "journal.utc_offset_minutes is not a valid offset: {}",
                self.utc_offset_minutes
            ))
        })
    }
}

/// Defaults for the report views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    /// The visible window of the equity curve.
    pub timeframe: Timeframe,
    pub recent_period: RecentPeriod,
    pub recent_limit: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::All,
            recent_period: RecentPeriod::Today,
            recent_limit: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
