use crate::pnl;
use crate::report::AggregationBucket;
use chrono::{Datelike, NaiveDate, Weekday};
use core_types::{MarketSession, Trade};
use std::collections::HashMap;
use std::hash::Hash;

/// Bucket label for trades that carry no tags at all.
pub const UNTAGGED: &str = "untagged";

/// Groups trades by an arbitrary key and reduces each group into an
/// [`AggregationBucket`].
///
/// P&L is recomputed from source fields per trade; the cached column is
/// never consulted. Date-range scoping is the caller's job — pass an
/// already-filtered slice. Every trade lands in exactly one bucket, so
/// bucket trade counts always sum to the input length.
pub fn aggregate_by<K, F>(trades: &[Trade], key_fn: F) -> HashMap<K, AggregationBucket>
where
    K: Eq + Hash,
    F: Fn(&Trade) -> K,
{
    let mut buckets: HashMap<K, AggregationBucket> = HashMap::new();
    for trade in trades {
        buckets
            .entry(key_fn(trade))
            .or_default()
            .record(pnl::net_profit_loss(trade));
    }
    buckets
}

/// Calendar day of the trade's entry.
pub fn day_key(trade: &Trade) -> NaiveDate {
    trade.entry_date.date_naive()
}

/// Weekday of the trade's entry.
pub fn weekday_key(trade: &Trade) -> Weekday {
    trade.entry_date.date_naive().weekday()
}

/// Market session, with missing sessions grouped under `Other`.
pub fn session_key(trade: &Trade) -> MarketSession {
    trade.session()
}

pub fn symbol_key(trade: &Trade) -> String {
    trade.symbol.clone()
}

/// Tag-dimension aggregation. Unlike [`aggregate_by`], a trade carrying
/// several tags is folded into every one of its tag buckets, so counts
/// across buckets can exceed the number of trades. Untagged trades fall
/// into the [`UNTAGGED`] bucket rather than disappearing.
pub fn aggregate_by_tag(trades: &[Trade]) -> HashMap<String, AggregationBucket> {
    let mut buckets: HashMap<String, AggregationBucket> = HashMap::new();
    for trade in trades {
        let pl = pnl::net_profit_loss(trade);
        if trade.tags.is_empty() {
            buckets.entry(UNTAGGED.to_string()).or_default().record(pl);
            continue;
        }
        for tag in &trade.tags {
            buckets.entry(tag.clone()).or_default().record(pl);
        }
    }
    buckets
}
