//! Shared fixtures for the unit tests in this crate.

use core_types::{MarketSession, Trade, TradeDirection};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use uuid::Uuid;

/// A minimal closed (or open, when `exit` is `None`) trade with zero fees
/// and no stop. Tests override the fields they care about.
pub(crate) fn sample_trade(
    symbol: &str,
    direction: TradeDirection,
    entry: Decimal,
    exit: Option<Decimal>,
    quantity: Decimal,
) -> Trade {
    Trade {
        id: Uuid::new_v4(),
        symbol: symbol.to_string(),
        direction,
        entry_price: entry,
        exit_price: exit,
        quantity,
        entry_date: "2024-03-04T09:30:00Z".parse().unwrap(),
        exit_date: exit.map(|_| "2024-03-04T15:00:00Z".parse().unwrap()),
        fees: Decimal::ZERO,
        stop_loss: None,
        take_profit: None,
        tags: BTreeSet::new(),
        instrument_type: None,
        market_session: Some(MarketSession::London),
        profit_loss: None,
        return_percentage: None,
        risk_percentage: None,
    }
}

/// A closed stock trade whose net P&L is exactly `pl`, entered on `day`
/// (an ISO date). Handy for aggregation and series tests where only the
/// realized figure and the date matter.
pub(crate) fn trade_with_pl(day: &str, pl: Decimal) -> Trade {
    let mut trade = sample_trade(
        "AAPL",
        TradeDirection::Long,
        Decimal::from(100),
        Some(Decimal::from(100) + pl),
        Decimal::ONE,
    );
    trade.entry_date = format!("{day}T10:00:00Z").parse().unwrap();
    trade.exit_date = Some(format!("{day}T16:00:00Z").parse().unwrap());
    trade
}
