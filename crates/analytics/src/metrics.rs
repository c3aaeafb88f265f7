use crate::instrument;
use crate::pnl::{self, round_money};
use core_types::Trade;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Net return on the account, in percent. `None` while the position is
/// open. A zero or negative balance yields 0 rather than an error — the
/// ratio is simply not meaningful for such an account.
pub fn return_percentage(trade: &Trade, account_balance: Decimal) -> Option<Decimal> {
    let net = pnl::net_profit_loss(trade)?;
    if account_balance <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    Some(round_money(net / account_balance * dec!(100)))
}

/// The amount put at risk by the stop-loss, in account currency:
/// distance from entry to stop × quantity × contract size.
///
/// `None` when no stop-loss is recorded — risk is unquantified, which is
/// distinct from risking zero.
pub fn risked_amount(trade: &Trade) -> Option<Decimal> {
    let stop = trade.stop_loss?;
    let spec = instrument::spec_for(&trade.symbol, trade.instrument_type);
    let distance = (trade.entry_price - stop).abs();
    Some(round_money(distance * trade.quantity * spec.contract_size))
}

/// Initial risk relative to the account, in percent. Zero when no
/// stop-loss is recorded or the balance is not positive.
pub fn risk_percentage(trade: &Trade, account_balance: Decimal) -> Decimal {
    let Some(risked) = risked_amount(trade) else {
        return Decimal::ZERO;
    };
    if account_balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(risked / account_balance * dec!(100))
}

/// The trade's net P&L expressed as a multiple of its initial risked
/// amount. `None` while open, when no stop-loss is recorded, or when the
/// risked amount is zero.
pub fn r_multiple(trade: &Trade) -> Option<Decimal> {
    let net = pnl::net_profit_loss(trade)?;
    let risked = risked_amount(trade)?;
    if risked.is_zero() {
        return None;
    }
    Some(round_money(net / risked))
}

/// Recomputes the cached derived columns on a trade from its current
/// source fields. The storage layer calls this on every create/update;
/// it is the single source of truth for `profit_loss`,
/// `return_percentage` and `risk_percentage`.
pub fn refresh_derived(trade: &mut Trade, account_balance: Decimal) {
    trade.profit_loss = pnl::net_profit_loss(trade);
    trade.return_percentage = return_percentage(trade, account_balance);
    trade.risk_percentage = Some(risk_percentage(trade, account_balance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_trade;
    use core_types::TradeDirection;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn return_percentage_is_net_over_balance() {
        // 500.00 net on a 10000 account = 5%.
        let trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            Some(dec!(1.1050)),
            dec!(1.0),
        );
        assert_eq!(return_percentage(&trade, dec!(10000)), Some(dec!(5.00)));
    }

    #[test]
    fn return_percentage_undefined_while_open() {
        let trade = sample_trade("EUR/USD", TradeDirection::Long, dec!(1.1000), None, dec!(1.0));
        assert_eq!(return_percentage(&trade, dec!(10000)), None);
    }

    #[test]
    fn zero_balance_yields_zero_not_an_error() {
        let trade = sample_trade(
            "AAPL",
            TradeDirection::Long,
            dec!(100),
            Some(dec!(110)),
            dec!(10),
        );
        assert_eq!(return_percentage(&trade, Decimal::ZERO), Some(Decimal::ZERO));
        assert_eq!(risk_percentage(&trade, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn missing_stop_means_zero_risk() {
        let trade = sample_trade(
            "AAPL",
            TradeDirection::Long,
            dec!(100),
            Some(dec!(110)),
            dec!(10),
        );
        assert_eq!(risked_amount(&trade), None);
        assert_eq!(risk_percentage(&trade, dec!(10000)), Decimal::ZERO);
        assert_eq!(r_multiple(&trade), None);
    }

    #[test]
    fn risk_percentage_scales_by_contract_size() {
        // 50-pip stop on one lot risks 0.0050 * 1.0 * 100000 = 500, which
        // is 5% of a 10000 account.
        let mut trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            Some(dec!(1.1050)),
            dec!(1.0),
        );
        trade.stop_loss = Some(dec!(1.0950));
        assert_eq!(risked_amount(&trade), Some(dec!(500.00)));
        assert_eq!(risk_percentage(&trade, dec!(10000)), dec!(5.00));
    }

    #[test]
    fn r_multiple_relates_net_to_risked() {
        let mut trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            Some(dec!(1.1050)),
            dec!(1.0),
        );
        trade.stop_loss = Some(dec!(1.0950));
        // Won 500 while risking 500: a 1R trade.
        assert_eq!(r_multiple(&trade), Some(dec!(1.00)));

        trade.exit_price = Some(dec!(1.0950));
        assert_eq!(r_multiple(&trade), Some(dec!(-1.00)));
    }

    #[test]
    fn refresh_overwrites_stale_cached_values() {
        let mut trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            Some(dec!(1.1050)),
            dec!(1.0),
        );
        trade.stop_loss = Some(dec!(1.0950));
        // A hand-edited cache must not survive recomputation.
        trade.profit_loss = Some(dec!(999999));
        refresh_derived(&mut trade, dec!(10000));
        assert_eq!(trade.profit_loss, Some(dec!(500.00)));
        assert_eq!(trade.return_percentage, Some(dec!(5.00)));
        assert_eq!(trade.risk_percentage, Some(dec!(5.00)));
    }

    #[test]
    fn refresh_clears_cache_for_open_positions() {
        let mut trade = sample_trade("EUR/USD", TradeDirection::Long, dec!(1.1000), None, dec!(1.0));
        trade.profit_loss = Some(dec!(123));
        refresh_derived(&mut trade, dec!(10000));
        assert_eq!(trade.profit_loss, None);
        assert_eq!(trade.return_percentage, None);
        assert_eq!(trade.risk_percentage, Some(Decimal::ZERO));
    }
}
