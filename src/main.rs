use analytics::{aggregate, metrics, pnl, AggregationBucket, DateRange, StatsEngine};
use anyhow::Context;
use chrono::{Utc, Weekday};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use core_types::{MarketSession, Trade};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// The main entry point for the tradescope journal analytics CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = configuration::load_config().context("failed to load config.toml")?;
    let balance = cli.balance.unwrap_or(config.account.balance);

    let trades = load_journal(&cli.journal)?;
    let engine = StatsEngine::new();
    let today = Utc::now().date_naive();
    let scoped = engine.filter_by_range(&trades, cli.range, today);

    match cli.command {
        Commands::List => handle_list(&scoped, balance, &config),
        Commands::Summary => handle_summary(&engine, &scoped, &config),
        Commands::Sessions => handle_sessions(&scoped, &config),
        Commands::Symbols => handle_symbols(&scoped, &config),
        Commands::Weekdays => handle_weekdays(&scoped, &config),
        Commands::Tags => handle_tags(&scoped, &config),
        Commands::Daily => handle_daily(&engine, &trades, cli.range, &config),
        Commands::Recompute { output } => handle_recompute(trades, balance, &output)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics over a trading-journal file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the journal file (a JSON array of trade records).
    #[arg(long)]
    journal: PathBuf,

    /// Date range to scope the view to (week, month, quarter, year, all).
    #[arg(long, default_value = "all")]
    range: DateRange,

    /// Override the configured account balance for return/risk figures.
    #[arg(long)]
    balance: Option<Decimal>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the trades in the selected range with recomputed figures.
    List,
    /// Overall performance statistics for the selected range.
    Summary,
    /// Performance grouped by market session.
    Sessions,
    /// Performance grouped by symbol.
    Symbols,
    /// Performance grouped by weekday of entry.
    Weekdays,
    /// Performance grouped by tag.
    Tags,
    /// Daily and cumulative P&L, one row per calendar day.
    Daily,
    /// Refresh the cached derived fields and write the journal back.
    Recompute {
        /// Where to write the refreshed journal.
        #[arg(long)]
        output: PathBuf,
    },
}

// ==============================================================================
// Journal loading (the data-layer boundary)
// ==============================================================================

/// Reads and validates the journal. Malformed records are rejected here,
/// before they ever reach the analytics layer.
fn load_journal(path: &Path) -> anyhow::Result<Vec<Trade>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read journal file {}", path.display()))?;
    let trades: Vec<Trade> =
        serde_json::from_str(&raw).context("journal file is not a valid trade array")?;
    for trade in &trades {
        trade
            .validate()
            .with_context(|| format!("invalid trade record {}", trade.id))?;
    }
    tracing::info!(count = trades.len(), "journal loaded");
    Ok(trades)
}

// ==============================================================================
// Rendering
// ==============================================================================

fn fmt_money(value: Decimal, config: &Config) -> String {
    format!("{} {}", value, config.account.currency)
}

/// Open positions have undefined figures and render as "—", never "0.00".
fn fmt_opt_money(value: Option<Decimal>, config: &Config) -> String {
    match value {
        Some(v) => fmt_money(v, config),
        None => "—".to_string(),
    }
}

fn fmt_opt(value: Option<Decimal>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    }
}

fn handle_list(trades: &[Trade], balance: Decimal, config: &Config) {
    let mut table = Table::new();
    table.set_header(vec![
        "Symbol", "Direction", "Entry", "Exit", "Size", "Session", "Net P&L", "Return %", "R",
    ]);
    for trade in trades {
        table.add_row(vec![
            trade.symbol.clone(),
            trade.direction.to_string(),
            trade.entry_price.to_string(),
            trade
                .exit_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "—".to_string()),
            trade.quantity.to_string(),
            trade.session().to_string(),
            fmt_opt_money(pnl::net_profit_loss(trade), config),
            fmt_opt(metrics::return_percentage(trade, balance)),
            fmt_opt(metrics::r_multiple(trade)),
        ]);
    }
    println!("{table}");
}

fn handle_summary(engine: &StatsEngine, trades: &[Trade], config: &Config) {
    let summary = engine.summarize(trades);

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total trades".to_string(), summary.total_trades.to_string()]);
    table.add_row(vec!["Winning trades".to_string(), summary.winning_trades.to_string()]);
    table.add_row(vec!["Losing trades".to_string(), summary.losing_trades.to_string()]);
    table.add_row(vec![
        "Break-even trades".to_string(),
        summary.break_even_trades.to_string(),
    ]);
    table.add_row(vec!["Win rate".to_string(), format!("{}%", summary.win_rate_pct)]);
    table.add_row(vec![
        "Net P&L".to_string(),
        fmt_money(summary.total_net_pl, config),
    ]);
    table.add_row(vec![
        "Gross profit".to_string(),
        fmt_money(summary.gross_profit, config),
    ]);
    table.add_row(vec![
        "Gross loss".to_string(),
        fmt_money(summary.gross_loss, config),
    ]);
    table.add_row(vec![
        "Profit factor".to_string(),
        summary.profit_factor.to_string(),
    ]);
    table.add_row(vec![
        "Average win".to_string(),
        fmt_money(summary.average_win, config),
    ]);
    // Loss figures are stored as magnitudes; negate them for display.
    table.add_row(vec![
        "Average loss".to_string(),
        fmt_money(-summary.average_loss, config),
    ]);
    table.add_row(vec![
        "Largest win".to_string(),
        fmt_money(summary.largest_win, config),
    ]);
    table.add_row(vec![
        "Largest loss".to_string(),
        fmt_money(-summary.largest_loss, config),
    ]);
    println!("{table}");
}

/// Shared rendering for every grouped view: one row per bucket, in the
/// order the caller provides.
fn render_buckets(key_header: &str, rows: Vec<(String, AggregationBucket)>, config: &Config) {
    let mut table = Table::new();
    table.set_header(vec![
        key_header,
        "Trades",
        "Wins",
        "Losses",
        "Gross Profit",
        "Gross Loss",
        "Net P&L",
    ]);
    for (key, bucket) in rows {
        table.add_row(vec![
            key,
            bucket.trade_count.to_string(),
            bucket.win_count.to_string(),
            bucket.loss_count.to_string(),
            fmt_money(bucket.gross_profit, config),
            fmt_money(bucket.gross_loss, config),
            fmt_money(bucket.net_pl, config),
        ]);
    }
    println!("{table}");
}

fn handle_sessions(trades: &[Trade], config: &Config) {
    let mut buckets = aggregate::aggregate_by(trades, aggregate::session_key);
    let order = [
        MarketSession::Asia,
        MarketSession::London,
        MarketSession::NewYork,
        MarketSession::LondonClose,
        MarketSession::Overlap,
        MarketSession::Other,
    ];
    let rows = order
        .into_iter()
        .filter_map(|session| buckets.remove(&session).map(|b| (session.to_string(), b)))
        .collect();
    render_buckets("Session", rows, config);
}

fn handle_symbols(trades: &[Trade], config: &Config) {
    let mut rows: Vec<_> = aggregate::aggregate_by(trades, aggregate::symbol_key)
        .into_iter()
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    render_buckets("Symbol", rows, config);
}

fn handle_weekdays(trades: &[Trade], config: &Config) {
    let mut buckets = aggregate::aggregate_by(trades, aggregate::weekday_key);
    let order = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    let rows = order
        .into_iter()
        .filter_map(|day| buckets.remove(&day).map(|b| (day.to_string(), b)))
        .collect();
    render_buckets("Weekday", rows, config);
}

fn handle_tags(trades: &[Trade], config: &Config) {
    let mut rows: Vec<_> = aggregate::aggregate_by_tag(trades).into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    render_buckets("Tag", rows, config);
}

fn handle_daily(engine: &StatsEngine, trades: &[Trade], range: DateRange, config: &Config) {
    let today = Utc::now().date_naive();
    let series = engine.cumulative_series(trades, range, today);

    let mut table = Table::new();
    table.set_header(vec!["Date", "Daily P&L", "Cumulative P&L"]);
    for point in series {
        table.add_row(vec![
            point.date.to_string(),
            fmt_money(point.daily_pl, config),
            fmt_money(point.cumulative_pl, config),
        ]);
    }
    println!("{table}");
}

fn handle_recompute(
    mut trades: Vec<Trade>,
    balance: Decimal,
    output: &Path,
) -> anyhow::Result<()> {
    for trade in &mut trades {
        metrics::refresh_derived(trade, balance);
    }
    let json = serde_json::to_string_pretty(&trades)?;
    fs::write(output, json)
        .with_context(|| format!("failed to write journal to {}", output.display()))?;
    println!("Refreshed derived fields on {} trades.", trades.len());
    Ok(())
}
