use core_types::InstrumentClass;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard lot size for a forex pair.
const FOREX_CONTRACT_SIZE: Decimal = dec!(100000);
/// One pip for a non-JPY-quoted pair.
const FOREX_PIP: Decimal = dec!(0.0001);
/// JPY-quoted pairs tick in hundredths.
const FOREX_PIP_JPY: Decimal = dec!(0.01);
/// Gold trades 100 oz per contract, silver 50, everything else 1000 units.
const GOLD_CONTRACT_SIZE: Decimal = dec!(100);
const SILVER_CONTRACT_SIZE: Decimal = dec!(50);
const COMMODITY_CONTRACT_SIZE: Decimal = dec!(1000);
const COMMODITY_PIP: Decimal = dec!(0.01);

const CRYPTO_PREFIXES: [&str; 6] = ["BTC", "ETH", "XRP", "ADA", "DOT", "SOL"];
const INDEX_PREFIXES: [&str; 5] = ["SPX", "NDX", "DJI", "FTSE", "TASI"];
const COMMODITY_PREFIXES: [&str; 4] = ["XAU", "XAG", "CL", "NG"];
const EXCHANGE_SUFFIXES: [&str; 2] = [".SR", ".SA"];

/// The sizing constants one instrument trades with.
///
/// `pip_size` selects the JPY/non-JPY forex branch and feeds pip-value
/// displays; it does not otherwise enter the P&L formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentSpec {
    pub class: InstrumentClass,
    pub contract_size: Decimal,
    pub pip_size: Decimal,
}

/// Maps a raw symbol to its instrument class.
///
/// An explicit class recorded on the trade wins. Otherwise the symbol is
/// matched in a fixed order: forex separator, crypto prefix, regional
/// exchange suffix, index prefix, commodity prefix. Unknown symbols
/// default to stock sizing — a fallback policy, not a failure.
pub fn classify(symbol: &str, explicit: Option<InstrumentClass>) -> InstrumentClass {
    if let Some(class) = explicit {
        return class;
    }

    let upper = symbol.trim().to_ascii_uppercase();

    if upper.contains('/') {
        return InstrumentClass::Forex;
    }
    if CRYPTO_PREFIXES.iter().any(|p| upper.starts_with(p)) {
        return InstrumentClass::Crypto;
    }
    if EXCHANGE_SUFFIXES.iter().any(|s| upper.ends_with(s)) {
        return InstrumentClass::Stock;
    }
    if INDEX_PREFIXES.iter().any(|p| upper.starts_with(p)) {
        return InstrumentClass::Index;
    }
    if COMMODITY_PREFIXES.iter().any(|p| upper.starts_with(p)) {
        return InstrumentClass::Commodity;
    }

    tracing::debug!(symbol, "unrecognized symbol, defaulting to stock sizing");
    InstrumentClass::Stock
}

/// Resolves the sizing constants for a symbol, classifying it first.
pub fn spec_for(symbol: &str, explicit: Option<InstrumentClass>) -> InstrumentSpec {
    let class = classify(symbol, explicit);
    let upper = symbol.trim().to_ascii_uppercase();

    let (contract_size, pip_size) = match class {
        InstrumentClass::Forex => {
            let pip = if upper.contains("JPY") {
                FOREX_PIP_JPY
            } else {
                FOREX_PIP
            };
            (FOREX_CONTRACT_SIZE, pip)
        }
        InstrumentClass::Commodity => {
            let contract = if upper.starts_with("XAU") {
                GOLD_CONTRACT_SIZE
            } else if upper.starts_with("XAG") {
                SILVER_CONTRACT_SIZE
            } else {
                COMMODITY_CONTRACT_SIZE
            };
            (contract, COMMODITY_PIP)
        }
        // Price-unit instruments: one unit of quantity is one share/coin/
        // point, so the multiplier is 1.
        InstrumentClass::Crypto | InstrumentClass::Stock | InstrumentClass::Index => {
            (Decimal::ONE, Decimal::ONE)
        }
    };

    InstrumentSpec {
        class,
        contract_size,
        pip_size,
    }
}
