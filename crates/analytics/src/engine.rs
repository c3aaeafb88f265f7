use crate::aggregate::{self, day_key};
use crate::pnl::{self, round_money};
use crate::report::{DailyPoint, DateRange, ProfitFactor, StatsSummary};
use chrono::{Datelike, Duration, NaiveDate};
use core_types::Trade;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// A stateless calculator for deriving performance statistics from a set
/// of journaled trades.
///
/// Every method is a pure function of its arguments: the engine holds no
/// state, never mutates its input, and has defined zero/neutral results
/// for the empty trade set. "Today" is always passed in by the caller.
#[derive(Debug, Default)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces a trade set into the scalar statistics dashboards display.
    ///
    /// The win/loss split here is strict (losses are `pl < 0`) with
    /// break-even trades counted separately; the per-bucket aggregation
    /// deliberately uses the other convention. Open trades count toward
    /// `total_trades` only.
    pub fn summarize(&self, trades: &[Trade]) -> StatsSummary {
        let mut summary = StatsSummary::new();
        summary.total_trades = trades.len();

        for trade in trades {
            let Some(pl) = pnl::net_profit_loss(trade) else {
                continue;
            };
            summary.total_net_pl += pl;
            if pl > Decimal::ZERO {
                summary.winning_trades += 1;
                summary.gross_profit += pl;
                summary.largest_win = summary.largest_win.max(pl);
            } else if pl < Decimal::ZERO {
                summary.losing_trades += 1;
                summary.gross_loss += pl.abs();
                summary.largest_loss = summary.largest_loss.max(pl.abs());
            } else {
                summary.break_even_trades += 1;
            }
        }

        if summary.total_trades > 0 {
            summary.win_rate_pct = round_money(
                Decimal::from(summary.winning_trades) / Decimal::from(summary.total_trades)
                    * dec!(100),
            );
        }
        if summary.winning_trades > 0 {
            summary.average_win =
                round_money(summary.gross_profit / Decimal::from(summary.winning_trades));
        }
        if summary.losing_trades > 0 {
            summary.average_loss =
                round_money(summary.gross_loss / Decimal::from(summary.losing_trades));
        }

        summary.profit_factor = if summary.gross_loss > Decimal::ZERO {
            ProfitFactor::Finite(round_money(summary.gross_profit / summary.gross_loss))
        } else if summary.gross_profit > Decimal::ZERO {
            ProfitFactor::Infinite(summary.gross_profit)
        } else {
            ProfitFactor::Finite(Decimal::ZERO)
        };

        tracing::debug!(
            total = summary.total_trades,
            wins = summary.winning_trades,
            losses = summary.losing_trades,
            "summarized trade set"
        );
        summary
    }

    /// Builds the running P&L series: one point per calendar day from the
    /// range start through `today` inclusive, zero-trade days included.
    pub fn cumulative_series(
        &self,
        trades: &[Trade],
        range: DateRange,
        today: NaiveDate,
    ) -> Vec<DailyPoint> {
        let start = range_start(range, trades, today);

        let daily: HashMap<NaiveDate, Decimal> = aggregate::aggregate_by(trades, day_key)
            .into_iter()
            .map(|(day, bucket)| (day, bucket.net_pl))
            .collect();

        let mut series = Vec::new();
        let mut cumulative = Decimal::ZERO;
        for day in start.iter_days() {
            if day > today {
                break;
            }
            let daily_pl = daily.get(&day).copied().unwrap_or(Decimal::ZERO);
            cumulative += daily_pl;
            series.push(DailyPoint {
                date: day,
                daily_pl,
                cumulative_pl: cumulative,
            });
        }
        series
    }

    /// Restricts a trade set to the named range, by entry date. This is
    /// the pre-filter aggregation call sites apply; grouping itself knows
    /// nothing about date ranges.
    pub fn filter_by_range(
        &self,
        trades: &[Trade],
        range: DateRange,
        today: NaiveDate,
    ) -> Vec<Trade> {
        let start = range_start(range, trades, today);
        trades
            .iter()
            .filter(|t| day_key(t) >= start)
            .cloned()
            .collect()
    }
}

/// Resolves a named range to its concrete start date.
fn range_start(range: DateRange, trades: &[Trade], today: NaiveDate) -> NaiveDate {
    match range {
        DateRange::Week => today - Duration::days(7),
        DateRange::Month => today.with_day(1).unwrap_or(today),
        DateRange::Quarter => today - Duration::days(90),
        DateRange::Year => today - Duration::days(365),
        // Earliest entry on record; an empty journal collapses the series
        // to the single point at `today`.
        DateRange::All => trades.iter().map(day_key).min().unwrap_or(today),
    }
}
