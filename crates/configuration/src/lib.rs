use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{Config, Journal, Logging, Report};

/// Prefix for environment overrides, e.g. `TRADEBOOK__JOURNAL__UTC_OFFSET_MINUTES=-300`.
const ENV_PREFIX: &str = "TRADEBOOK";
const ENV_SEPARATOR: &str = "__";

/// Loads the application configuration.
///
/// This function is the primary entry point for this crate. It reads the TOML
/// file at `path` if it exists, layers `TRADEBOOK__*` environment variables on
/// top, deserializes the result into our strongly-typed `Config` struct and
/// validates it.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path.as_ref()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{RecentPeriod, Timeframe};
    use std::fs;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.journal.utc_offset_minutes, 0);
        assert_eq!(config.report.timeframe, Timeframe::All);
        assert_eq!(config.report.recent_period, RecentPeriod::Today);
        assert_eq!(config.report.recent_limit, 20);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn reads_every_section() {
        let (_dir, path) = write_config(
            r#"
            [journal]
            utc_offset_minutes = -300

            [report]
            timeframe = "weekly"
            recent_period = "month"
            recent_limit = 5

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.journal.offset().unwrap().local_minus_utc(), -300 * 60);
        assert_eq!(config.report.timeframe, Timeframe::Weekly);
        assert_eq!(config.report.recent_period, RecentPeriod::Month);
        assert_eq!(config.report.recent_limit, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory.as_deref(), Some(Path::new("logs")));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let (_dir, path) = write_config("[report]\ntimeframe = \"daily\"\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.report.timeframe, Timeframe::Daily);
        assert_eq!(config.report.recent_limit, 20);
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        let (_dir, path) = write_config("[journal]\nutc_offset_minutes = 900\n");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_a_zero_recent_limit() {
        let (_dir, path) = write_config("[report]\nrecent_limit = 0\n");
        assert!(matches!(load_config(&path), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn rejects_unknown_timeframes() {
        let (_dir, path) = write_config("[report]\ntimeframe = \"hourly\"\n");
        assert!(matches!(load_config(&path), Err(ConfigError::LoadError(_))));
    }
}
