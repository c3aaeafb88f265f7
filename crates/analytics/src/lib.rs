//! # Trade Performance Analytics Engine
//!
//! This crate turns a list of raw journaled trades into the profit/loss
//! values, grouped aggregates and summary statistics the rest of the
//! application displays. It is the single place P&L math lives.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   storage or presentation. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every entry point is a pure function of its
//!   inputs. Nothing is cached, nothing is mutated, and the empty trade set
//!   has a defined zero/neutral result everywhere — the engine never errors
//!   on its documented domain.
//! - **Recompute, don't trust:** the `profit_loss` column cached on trade
//!   records is a display convenience; every calculation here re-derives
//!   P&L from the source fields.
//!
//! ## Public API
//!
//! - `instrument`: symbol classification and per-class sizing constants.
//! - `pnl`: per-trade gross and net P&L.
//! - `metrics`: per-trade return %, risk % and R-multiple, plus the
//!   derived-column refresh the storage layer runs on every write.
//! - `aggregate`: grouping by arbitrary key (day, weekday, session,
//!   symbol, tag) into reduction buckets.
//! - `StatsEngine`: whole-set summaries and the cumulative daily series.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod instrument;
pub mod metrics;
pub mod pnl;
pub mod report;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatsEngine;
pub use error::AnalyticsError;
pub use instrument::{classify, spec_for, InstrumentSpec};
pub use report::{AggregationBucket, DailyPoint, DateRange, ProfitFactor, StatsSummary};
