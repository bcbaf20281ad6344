mod render;

use analytics::{AnalyticsEngine, recent_trades};
use anyhow::Context;
use chrono::{FixedOffset, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use core_types::{
    Direction, RecentPeriod, Timeframe, TradeRecord, TradeResult, leveraged_pnl_percent,
    normalize_all, parse_trade_timestamp, read_snapshot,
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

/// The main entry point for the Tradebook journal analytics CLI.
fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    let _guard: Option<WorkerGuard> =
        configuration::init_logging(&config.logging).context("Failed to initialise logging")?;
    config.warn_unusual_values();
    let offset = config.journal.offset()?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config.report, &offset),
        Commands::Recent(args) => handle_recent(args, &config.report, &offset),
        Commands::Pnl(args) => {
            handle_pnl(args);
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics over an exported trading-journal snapshot.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every analytics view for a snapshot.
    Report(ReportArgs),
    /// List the most recent trades, optionally filtered.
    Recent(RecentArgs),
    /// Compute the leveraged P&L% of a single trade.
    Pnl(PnlArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Snapshot export: a JSON array of trades or an object keyed by trade id.
    #[arg(long)]
    input: PathBuf,

    /// The instant relative windows are measured from (defaults to the current time).
    #[arg(long)]
    now: Option<String>,

    /// Equity curve window: daily, weekly, monthly or all.
    #[arg(long)]
    timeframe: Option<Timeframe>,

    /// Print the report as pretty JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct RecentArgs {
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    now: Option<String>,

    /// today, week, month or all.
    #[arg(long)]
    period: Option<RecentPeriod>,

    /// Case-insensitive match against ticker or comment.
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct PnlArgs {
    #[arg(long)]
    direction: Direction,

    #[arg(long)]
    entry: Decimal,

    #[arg(long)]
    exit: Decimal,

    #[arg(long, default_value = "25")]
    leverage: Decimal,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_report(
    args: ReportArgs,
    defaults: &configuration::Report,
    offset: &FixedOffset,
) -> anyhow::Result<()> {
    let trades = load_trades(&args.input, offset)?;
    let now = resolve_now(args.now.as_deref(), offset)?;
    let timeframe = args.timeframe.unwrap_or(defaults.timeframe);

    let report = AnalyticsEngine::new().calculate(&trades, now, timeframe);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }
    Ok(())
}

fn handle_recent(
    args: RecentArgs,
    defaults: &configuration::Report,
    offset: &FixedOffset,
) -> anyhow::Result<()> {
    let trades = load_trades(&args.input, offset)?;
    let now = resolve_now(args.now.as_deref(), offset)?;
    let period = args.period.unwrap_or(defaults.recent_period);
    let limit = args.limit.unwrap_or(defaults.recent_limit);

    let feed = recent_trades(&trades, now, period, args.search.as_deref(), limit);
    tracing::info!(%period, shown = feed.len(), "Built recent-trades feed.");

    println!("{}", render::recent_table(&feed));
    Ok(())
}

fn handle_pnl(args: PnlArgs) {
    let pnl = leveraged_pnl_percent(args.direction, args.entry, args.exit, args.leverage);
    let suggested =
        TradeResult::from_pnl(pnl).map_or_else(|| "none".to_string(), |r| r.to_string());

    println!("P&L%: {:.2}%", pnl);
    println!("Suggested result: {suggested}");
}

/// Reads, decodes and normalizes a snapshot export.
fn load_trades(path: &Path, offset: &FixedOffset) -> anyhow::Result<Vec<TradeRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    let raws = read_snapshot(BufReader::new(file))
        .with_context(|| format!("Failed to decode snapshot {}", path.display()))?;

    let trades = normalize_all(&raws, offset);
    tracing::info!(path = %path.display(), records = trades.len(), "Loaded trade snapshot.");
    Ok(trades)
}

/// Parses `--now` with the same rules as a trade date, or reads the clock.
fn resolve_now(raw: Option<&str>, offset: &FixedOffset) -> anyhow::Result<NaiveDateTime> {
    match raw {
        Some(text) => parse_trade_timestamp(&serde_json::Value::String(text.to_string()), offset)
            .with_context(|| format!("Unrecognised --now timestamp: {text}")),
        None => Ok(Utc::now().with_timezone(offset).naive_local()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(line.split_whitespace())
    }

    #[test]
    fn now_accepts_local_and_offset_timestamps() {
        let offset = FixedOffset::east_opt(-5 * 3600).unwrap();

        let local = resolve_now(Some("2026-02-10T09:30"), &offset).unwrap();
        assert_eq!(local.to_string(), "2026-02-10 09:30:00");

        let utc = resolve_now(Some("2026-02-10T14:30:00Z"), &offset).unwrap();
        assert_eq!(utc, local);
    }

    #[test]
    fn now_rejects_garbage() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert!(resolve_now(Some("yesterday-ish"), &offset).is_err());
    }

    #[test]
    fn cli_parses_every_subcommand() {
        let cli = parse("tradebook report --input trades.json --timeframe weekly --json").unwrap();
        assert!(matches!(
            cli.command,
            Commands::Report(ReportArgs {
                timeframe: Some(Timeframe::Weekly),
                json: true,
                ..
            })
        ));
        assert_eq!(cli.config, PathBuf::from("config.toml"));

        let cli =
            parse("tradebook --config alt.toml recent --input t.json --period month").unwrap();
        assert!(matches!(
            cli.command,
            Commands::Recent(RecentArgs {
                period: Some(RecentPeriod::Month),
                ..
            })
        ));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));

        let cli = parse("tradebook pnl --direction short --entry 3040 --exit 2950").unwrap();
        match cli.command {
            Commands::Pnl(args) => {
                assert_eq!(args.direction, Direction::Short);
                assert_eq!(args.leverage, Decimal::from(25));
            }
            _ => panic!("expected the pnl subcommand"),
        }
    }

    #[test]
    fn cli_rejects_unknown_timeframes() {
        assert!(parse("tradebook report --input t.json --timeframe hourly").is_err());
    }

    #[test]
    fn pnl_with_a_tiny_entry_price_prints_instead_of_crashing() {
        let cli = parse(
            "tradebook pnl --direction long --entry 0.0000000000000000000000000001 --exit 2",
        )
        .unwrap();
        let Commands::Pnl(args) = cli.command else {
            panic!("expected the pnl subcommand");
        };
        handle_pnl(args);
    }
}
