use crate::instrument::{self, InstrumentSpec};
use core_types::{Trade, TradeDirection};
use rust_decimal::{Decimal, RoundingStrategy};

/// Money values are reported in cents; midpoints round away from zero
/// (half-up), applied once here so every caller sees the same figure.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Gross realized P&L in account currency for a closed position.
///
/// `price_diff × quantity × contract_size`, with the price difference
/// signed by direction. A zero quantity yields exactly zero. The pip
/// size never multiplies into the result; it already did its work
/// selecting the JPY forex branch when the sizing constants were
/// resolved.
pub fn compute_profit_loss(
    entry: Decimal,
    exit: Decimal,
    quantity: Decimal,
    direction: TradeDirection,
    spec: &InstrumentSpec,
) -> Decimal {
    let price_diff = match direction {
        TradeDirection::Long => exit - entry,
        TradeDirection::Short => entry - exit,
    };
    round_money(price_diff * quantity * spec.contract_size)
}

/// Gross P&L for a trade record, or `None` while the position is open.
///
/// Open positions have undefined P&L — never zero — so dashboards render
/// them as "—" rather than "$0.00".
pub fn gross_profit_loss(trade: &Trade) -> Option<Decimal> {
    let exit = trade.exit_price?;
    let spec = instrument::spec_for(&trade.symbol, trade.instrument_type);
    Some(compute_profit_loss(
        trade.entry_price,
        exit,
        trade.quantity,
        trade.direction,
        &spec,
    ))
}

/// Net realized P&L: gross minus fees. This is the figure every
/// aggregation and summary consumes, recomputed from source fields rather
/// than read from the cached `profit_loss` column.
pub fn net_profit_loss(trade: &Trade) -> Option<Decimal> {
    gross_profit_loss(trade).map(|gross| gross - trade.fees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::spec_for;
    use crate::testutil::sample_trade;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn one_lot_of_eurusd_long() {
        // 50 pips on a standard lot: 0.0050 * 1.0 * 100000 = 500.00.
        let spec = spec_for("EUR/USD", None);
        let pl = compute_profit_loss(
            dec!(1.1000),
            dec!(1.1050),
            dec!(1.0),
            TradeDirection::Long,
            &spec,
        );
        assert_eq!(pl, dec!(500.00));
    }

    #[test]
    fn same_trade_short_negates() {
        let spec = spec_for("EUR/USD", None);
        let pl = compute_profit_loss(
            dec!(1.1000),
            dec!(1.1050),
            dec!(1.0),
            TradeDirection::Short,
            &spec,
        );
        assert_eq!(pl, dec!(-500.00));
    }

    #[test]
    fn direction_flip_with_swapped_prices_is_antisymmetric() {
        let spec = spec_for("XAUUSD", None);
        let long = compute_profit_loss(
            dec!(2315.40),
            dec!(2320.15),
            dec!(0.5),
            TradeDirection::Long,
            &spec,
        );
        let short = compute_profit_loss(
            dec!(2320.15),
            dec!(2315.40),
            dec!(0.5),
            TradeDirection::Short,
            &spec,
        );
        assert_eq!(long, -short);
    }

    #[test]
    fn zero_quantity_is_zero_not_an_error() {
        let spec = spec_for("AAPL", None);
        let pl = compute_profit_loss(
            dec!(180),
            dec!(200),
            Decimal::ZERO,
            TradeDirection::Long,
            &spec,
        );
        assert_eq!(pl, Decimal::ZERO);
    }

    #[test]
    fn open_position_has_no_profit_loss() {
        let trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            None,
            dec!(1.0),
        );
        assert_eq!(gross_profit_loss(&trade), None);
        assert_eq!(net_profit_loss(&trade), None);
    }

    #[test]
    fn net_is_gross_minus_fees_exactly() {
        let mut trade = sample_trade(
            "EUR/USD",
            TradeDirection::Long,
            dec!(1.1000),
            Some(dec!(1.1050)),
            dec!(1.0),
        );
        trade.fees = dec!(7.25);
        assert_eq!(gross_profit_loss(&trade), Some(dec!(500.00)));
        assert_eq!(net_profit_loss(&trade), Some(dec!(492.75)));
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        let spec = spec_for("AAPL", None);
        // 0.005 * 1 * 1 = 0.005 -> 0.01 under half-up.
        let pl = compute_profit_loss(
            dec!(100.000),
            dec!(100.005),
            dec!(1),
            TradeDirection::Long,
            &spec,
        );
        assert_eq!(pl, dec!(0.01));
        let neg = compute_profit_loss(
            dec!(100.005),
            dec!(100.000),
            dec!(1),
            TradeDirection::Long,
            &spec,
        );
        assert_eq!(neg, dec!(-0.01));
    }

    #[test]
    fn jpy_pairs_use_the_standard_contract_size() {
        // Pip size differs for JPY quotes but the P&L formula still runs
        // off the raw price difference and lot size.
        let spec = spec_for("USD/JPY", None);
        let pl = compute_profit_loss(
            dec!(150.00),
            dec!(150.50),
            dec!(0.1),
            TradeDirection::Long,
            &spec,
        );
        assert_eq!(pl, dec!(5000.00));
    }
}
