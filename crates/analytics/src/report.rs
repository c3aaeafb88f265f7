use crate::error::AnalyticsError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gross-profit-to-gross-loss ratio, with the zero-loss case made explicit.
///
/// When a trade set has no gross loss the ratio is undefined; the journal
/// treats it as infinite and falls back to the gross profit itself as the
/// numeric value. `Finite(0)` covers the doubly-degenerate case of no
/// profit and no loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProfitFactor {
    Finite(Decimal),
    /// No losing volume; carries gross profit as the numeric fallback.
    Infinite(Decimal),
}

impl ProfitFactor {
    /// The numeric value consumed by callers that need a scalar: the ratio
    /// itself, or gross profit when the ratio is infinite.
    pub fn value(&self) -> Decimal {
        match self {
            ProfitFactor::Finite(v) | ProfitFactor::Infinite(v) => *v,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ProfitFactor::Infinite(_))
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Finite(Decimal::ZERO)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(v) => write!(f, "{}", v),
            ProfitFactor::Infinite(_) => write!(f, "∞"),
        }
    }
}

/// The scalar statistics a dashboard shows for one trade set.
///
/// Sign conventions: `avg_loss` and `largest_loss` are positive
/// magnitudes; display layers negate them. The win/loss split here is
/// strict — break-even trades land in `break_even_trades`, counting toward
/// neither wins nor losses — which deliberately differs from the
/// per-bucket split in [`AggregationBucket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_trades: usize,
    /// Closed trades with strictly positive net P&L.
    pub winning_trades: usize,
    /// Closed trades with strictly negative net P&L.
    pub losing_trades: usize,
    /// Closed trades with exactly zero net P&L.
    pub break_even_trades: usize,
    /// winning / total × 100; 0 when the set is empty.
    pub win_rate_pct: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    pub total_net_pl: Decimal,
    pub profit_factor: ProfitFactor,
    pub average_win: Decimal,
    /// Positive magnitude of the average losing trade.
    pub average_loss: Decimal,
    pub largest_win: Decimal,
    /// Positive magnitude of the worst losing trade.
    pub largest_loss: Decimal,
}

impl StatsSummary {
    /// Creates a new, zeroed-out summary — the defined result for an empty
    /// trade set.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            break_even_trades: 0,
            win_rate_pct: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            total_net_pl: Decimal::ZERO,
            profit_factor: ProfitFactor::default(),
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            largest_win: Decimal::ZERO,
            largest_loss: Decimal::ZERO,
        }
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// One group's reduction under an arbitrary grouping key.
///
/// Ephemeral: recomputed on every query, never persisted. The win/loss
/// split here counts break-even trades as losses (`loss` means "not
/// strictly positive"); they contribute zero to both gross figures. Trades
/// whose P&L is not yet realized count only toward `trade_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationBucket {
    pub trade_count: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    pub net_pl: Decimal,
}

impl AggregationBucket {
    pub fn new() -> Self {
        Self {
            trade_count: 0,
            win_count: 0,
            loss_count: 0,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            net_pl: Decimal::ZERO,
        }
    }

    /// Folds one trade's realized P&L into the bucket. `None` marks an
    /// open position: counted, but excluded from win/loss and gross
    /// accounting.
    pub fn record(&mut self, profit_loss: Option<Decimal>) {
        self.trade_count += 1;
        let Some(pl) = profit_loss else {
            return;
        };
        self.net_pl += pl;
        if pl > Decimal::ZERO {
            self.win_count += 1;
            self.gross_profit += pl;
        } else {
            self.loss_count += 1;
            self.gross_loss += pl.abs();
        }
    }
}

impl Default for AggregationBucket {
    fn default() -> Self {
        Self::new()
    }
}

/// One calendar day of the cumulative P&L series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub daily_pl: Decimal,
    pub cumulative_pl: Decimal,
}

/// Named date ranges the dashboards filter by. Resolution to a concrete
/// start date happens against a caller-supplied "today" so the engine
/// stays a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Week,
    Month,
    Quarter,
    Year,
    All,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Quarter => "quarter",
            DateRange::Year => "year",
            DateRange::All => "all",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for DateRange {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "quarter" => Ok(DateRange::Quarter),
            "year" => Ok(DateRange::Year),
            "all" => Ok(DateRange::All),
            other => Err(AnalyticsError::InvalidDateRange(other.to_string())),
        }
    }
}
