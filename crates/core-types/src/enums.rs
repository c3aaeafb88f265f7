use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a trade. The journal import layer maps the legacy
/// Buy/Sell labels onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(alias = "Buy")]
    Long,
    #[serde(alias = "Sell")]
    Short,
}

impl TradeDirection {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            TradeDirection::Long => TradeDirection::Short,
            TradeDirection::Short => TradeDirection::Long,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "Long"),
            TradeDirection::Short => write!(f, "Short"),
        }
    }
}

/// A labeled time-of-day trading window, used as a grouping dimension.
///
/// Records without a session are grouped under `Other`, not excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketSession {
    Asia,
    London,
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "London Close")]
    LondonClose,
    Overlap,
    #[default]
    Other,
}

impl fmt::Display for MarketSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarketSession::Asia => "Asia",
            MarketSession::London => "London",
            MarketSession::NewYork => "New York",
            MarketSession::LondonClose => "London Close",
            MarketSession::Overlap => "Overlap",
            MarketSession::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// The closed set of instrument classes the sizing rules are keyed on.
///
/// Classification is total: a symbol that matches no known pattern is a
/// `Stock`, by policy rather than by error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentClass {
    Forex,
    Crypto,
    Stock,
    Index,
    Commodity,
}

impl fmt::Display for InstrumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstrumentClass::Forex => "forex",
            InstrumentClass::Crypto => "crypto",
            InstrumentClass::Stock => "stock",
            InstrumentClass::Index => "index",
            InstrumentClass::Commodity => "commodity",
        };
        write!(f, "{}", label)
    }
}
