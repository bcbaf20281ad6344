use chrono::{Datelike, Duration, NaiveDateTime};
use core_types::{RecentPeriod, TradeRecord};

/// The journal's recent-trades feed: filtered, searched, newest first.
///
/// Ordering is trade date, then logging time (`created_at`), then id, all
/// descending. Undated records only show up under [`RecentPeriod::All`], after
/// every dated record.
pub fn recent_trades<'a>(
    trades: &'a [TradeRecord],
    now: NaiveDateTime,
    period: RecentPeriod,
    search: Option<&str>,
    limit: usize,
) -> Vec<&'a TradeRecord> {
    let needle = search.map(str::trim).unwrap_or_default().to_lowercase();

    let mut feed: Vec<&TradeRecord> = trades
        .iter()
        .filter(|trade| in_period(trade, now, period))
        .filter(|trade| {
            needle.is_empty()
                || trade.ticker.to_lowercase().contains(&needle)
                || trade.comment.to_lowercase().contains(&needle)
        })
        .collect();

    feed.sort_by(|a, b| {
        b.trade_date
            .cmp(&a.trade_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
    feed.truncate(limit);
    feed
}

fn in_period(trade: &TradeRecord, now: NaiveDateTime, period: RecentPeriod) -> bool {
    if period == RecentPeriod::All {
        return true;
    }
    let Some(date) = trade.trade_date else {
        return false;
    };
    match period {
        RecentPeriod::Today => date.date() == now.date(),
        RecentPeriod::Week => now
            .checked_sub_signed(Duration::days(7))
            .is_none_or(|start| date >= start),
        RecentPeriod::Month => date.year() == now.year() && date.month() == now.month(),
        RecentPeriod::All => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use core_types::TradeResult;
    use rust_decimal_macros::dec;

    fn journal() -> Vec<TradeRecord> {
        let mut a = win("2026-02-10 09:00", dec!(1), dec!(1));
        a.id = "a".into();
        a.ticker = "ETH - Dec".into();
        let mut b = loss("2026-02-10 09:00", dec!(-1), dec!(-1));
        b.id = "b".into();
        b.created_at = Some(at("2026-02-10 09:05"));
        b.comment = "stopped out".into();
        let mut c = win("2026-02-05 09:00", dec!(1), dec!(1));
        c.id = "c".into();
        let mut d = undated(TradeResult::Loss, dec!(-2));
        d.id = "d".into();
        let mut e = win("2026-01-20 09:00", dec!(1), dec!(1));
        e.id = "e".into();
        vec![c, d, a, e, b]
    }

    fn ids(feed: &[&TradeRecord]) -> Vec<String> {
        feed.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn today_breaks_ties_on_created_at() {
        let trades = journal();
        let feed = recent_trades(&trades, at("2026-02-10 18:00"), RecentPeriod::Today, None, 10);
        assert_eq!(ids(&feed), vec!["b", "a"]);
    }

    #[test]
    fn periods_widen_the_feed() {
        let trades = journal();
        let now = at("2026-02-10 18:00");
        assert_eq!(
            ids(&recent_trades(&trades, now, RecentPeriod::Week, None, 10)),
            vec!["b", "a", "c"]
        );
        assert_eq!(
            ids(&recent_trades(&trades, now, RecentPeriod::Month, None, 10)),
            vec!["b", "a", "c"]
        );
        assert_eq!(
            ids(&recent_trades(&trades, now, RecentPeriod::All, None, 10)),
            vec!["b", "a", "c", "e", "d"]
        );
    }

    #[test]
    fn searches_ticker_and_comment_case_insensitively() {
        let trades = journal();
        let now = at("2026-02-10 18:00");
        let by_ticker = recent_trades(&trades, now, RecentPeriod::All, Some("eth"), 10);
        assert_eq!(ids(&by_ticker), vec!["a"]);
        let by_comment = recent_trades(&trades, now, RecentPeriod::All, Some("STOPPED"), 10);
        assert_eq!(ids(&by_comment), vec!["b"]);
        let blank = recent_trades(&trades, now, RecentPeriod::All, Some("  "), 10);
        assert_eq!(blank.len(), 5);
    }

    #[test]
    fn truncates_to_limit() {
        let trades = journal();
        let feed = recent_trades(&trades, at("2026-02-10 18:00"), RecentPeriod::All, None, 2);
        assert_eq!(ids(&feed), vec!["b", "a"]);
    }
}
