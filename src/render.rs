use analytics::{
    DirectionStats, EquityPoint, JournalReport, MonthToDate, MonthlySummary, PeriodCard,
    SessionStats, StreakSummary, WeeklySummary,
};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use core_types::TradeRecord;
use rust_decimal::Decimal;

// ==============================================================================
// Formatting helpers
// ==============================================================================

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn signed_color(value: Decimal) -> Color {
    if value > Decimal::ZERO {
        Color::Green
    } else if value < Decimal::ZERO {
        Color::Red
    } else {
        Color::Reset
    }
}

fn money(value: Decimal) -> Cell {
    Cell::new(format!("{:.2}", value)).fg(signed_color(value))
}

fn percent(value: Decimal) -> Cell {
    Cell::new(format!("{:.2}%", value)).fg(signed_color(value))
}

fn plain(value: Decimal) -> Cell {
    Cell::new(format!("{:.2}", value))
}

fn outcome_header(first: &str) -> Vec<&str> {
    vec![first, "Trades", "Wins", "Losses", "Win Rate", "P&L", "Avg P&L%"]
}

// ==============================================================================
// Report sections
// ==============================================================================

/// Prints every section of a report to stdout.
pub fn print_report(report: &JournalReport) {
    println!(
        "Journal report as of {} ({} of {} records analyzed)",
        report.as_of.format("%Y-%m-%d %H:%M"),
        report.analyzed_records,
        report.total_records
    );

    println!("\nThis month ({})", report.month_to_date.month);
    println!("{}", month_to_date_table(&report.month_to_date));

    println!("\nP&L% by period");
    println!("{}", period_cards_table(&report.period_cards));

    println!("\nEquity curve ({})", report.timeframe);
    println!("{}", equity_table(&report.equity_curve));

    println!("\nBy direction");
    println!("{}", direction_table(&report.direction_stats));

    println!("\nBy session");
    println!("{}", session_table(&report.session_stats));

    println!("\nStreaks");
    println!("{}", streak_table(&report.streaks));

    println!("\nWeekly");
    println!("{}", weekly_table(&report.weekly));

    println!("\nMonthly");
    println!("{}", monthly_table(&report.monthly));
}

pub fn month_to_date_table(mtd: &MonthToDate) -> Table {
    let mut table = new_table(vec![
        "Trades",
        "W / L",
        "P&L",
        "Win Rate",
        "Profit Factor",
        "Expectancy",
    ]);
    table.add_row(vec![
        Cell::new(mtd.trades),
        Cell::new(format!("{} / {}", mtd.wins, mtd.losses)),
        money(mtd.total_pnl),
        plain(mtd.win_rate),
        plain(mtd.profit_factor),
        percent(mtd.expectancy),
    ]);
    table
}

pub fn period_cards_table(cards: &[PeriodCard]) -> Table {
    let mut table = new_table(vec!["Period", "Trades", "P&L%"]);
    for card in cards {
        table.add_row(vec![
            Cell::new(card.period),
            Cell::new(card.trades),
            percent(card.pnl_percent),
        ]);
    }
    table
}

pub fn equity_table(points: &[EquityPoint]) -> Table {
    let mut table = new_table(vec!["Date", "Ticker", "P&L%", "Cumulative P&L"]);
    for point in points {
        table.add_row(vec![
            Cell::new(point.date.format("%Y-%m-%d %H:%M")),
            Cell::new(&point.ticker),
            percent(point.pnl_percent),
            money(point.cumulative_pnl),
        ]);
    }
    table
}

pub fn direction_table(rows: &[DirectionStats]) -> Table {
    let mut table = new_table(outcome_header("Direction"));
    for row in rows {
        let s = &row.stats;
        table.add_row(vec![
            Cell::new(row.direction),
            Cell::new(s.trades),
            Cell::new(s.wins),
            Cell::new(s.losses),
            plain(s.win_rate),
            money(s.total_pnl),
            percent(s.avg_pnl_percent),
        ]);
    }
    table
}

pub fn session_table(rows: &[SessionStats]) -> Table {
    let mut table = new_table(outcome_header("Session"));
    for row in rows {
        let s = &row.stats;
        table.add_row(vec![
            Cell::new(row.session),
            Cell::new(s.trades),
            Cell::new(s.wins),
            Cell::new(s.losses),
            plain(s.win_rate),
            money(s.total_pnl),
            percent(s.avg_pnl_percent),
        ]);
    }
    table
}

pub fn streak_table(streaks: &StreakSummary) -> Table {
    let current = streaks
        .current
        .map_or_else(|| "-".to_string(), |s| format!("{} x{}", s.result, s.length));

    let mut table = new_table(vec!["Max Win Streak", "Max Loss Streak", "Current"]);
    table.add_row(vec![
        Cell::new(streaks.max_win_streak),
        Cell::new(streaks.max_loss_streak),
        Cell::new(current),
    ]);
    table
}

pub fn weekly_table(weeks: &[WeeklySummary]) -> Table {
    let mut table = new_table(vec![
        "Week",
        "Trades",
        "W / L",
        "Gain",
        "Loss",
        "Fees",
        "P&L",
        "Win Rate",
        "Avg Win",
        "Avg Loss",
        "PF",
        "Expectancy",
    ]);
    for week in weeks {
        table.add_row(vec![
            Cell::new(&week.label),
            Cell::new(week.trades),
            Cell::new(format!("{} / {}", week.wins, week.losses)),
            plain(week.total_gain),
            plain(week.total_loss),
            plain(week.fees),
            money(week.pnl),
            plain(week.win_rate),
            plain(week.avg_win),
            plain(week.avg_loss),
            plain(week.profit_factor),
            percent(week.expectancy),
        ]);
    }
    table
}

pub fn monthly_table(months: &[MonthlySummary]) -> Table {
    let mut table = new_table(vec![
        "Month",
        "Trades",
        "W / L",
        "P&L",
        "P&L%",
        "Win Rate",
        "Avg Win%",
        "Avg Loss%",
        "PF",
        "Expectancy%",
        "Score",
        "Grade",
    ]);
    for month in months {
        table.add_row(vec![
            Cell::new(&month.label),
            Cell::new(month.trades),
            Cell::new(format!("{} / {}", month.wins, month.losses)),
            money(month.total_pnl),
            percent(month.total_pnl_percent),
            plain(month.win_rate),
            plain(month.avg_win),
            plain(month.avg_loss),
            plain(month.profit_factor),
            percent(month.expectancy),
            Cell::new(month.grade.score),
            Cell::new(month.grade.grade),
        ]);
    }
    table
}

// ==============================================================================
// Recent trades
// ==============================================================================

pub fn recent_table(trades: &[&TradeRecord]) -> Table {
    let mut table = new_table(vec![
        "Date", "Ticker", "Side", "Result", "Entry", "Exit", "Lev", "P&L", "P&L%", "Comment",
    ]);
    for trade in trades {
        let date = trade.trade_date.map_or_else(
            || "invalid date".to_string(),
            |d| d.format("%Y-%m-%d %H:%M").to_string(),
        );
        table.add_row(vec![
            Cell::new(date),
            Cell::new(&trade.ticker),
            Cell::new(trade.direction.map_or_else(|| "-".to_string(), |d| d.to_string())),
            Cell::new(trade.result.map_or_else(|| "open".to_string(), |r| r.to_string())),
            plain(trade.entry_price),
            Cell::new(trade.exit_price.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))),
            Cell::new(format!("{}x", trade.leverage.normalize())),
            money(trade.gain_loss),
            percent(trade.pnl_percent),
            Cell::new(&trade.comment),
        ]);
    }
    table
}
