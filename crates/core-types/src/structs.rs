use crate::enums::{InstrumentClass, MarketSession, TradeDirection};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A single journaled trade, the unit of analysis for the whole engine.
///
/// Field names serialize in camelCase to stay wire-compatible with the
/// journal export format the storage layer produces.
///
/// The trailing `profit_loss` / `return_percentage` / `risk_percentage`
/// fields are a display cache of values derived from the source fields
/// above them. They are overwritten on every create/update and analytics
/// readers recompute them rather than trusting the stored copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: Uuid,
    pub symbol: String,
    pub direction: TradeDirection,
    pub entry_price: Decimal,
    /// Absent while the position is still open.
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    /// Lot size / position size. Always positive.
    pub quantity: Decimal,
    pub entry_date: DateTime<Utc>,
    /// Absent while the position is still open.
    #[serde(default)]
    pub exit_date: Option<DateTime<Utc>>,
    /// Commission and fees, subtracted from gross P&L to obtain net P&L.
    #[serde(default)]
    pub fees: Decimal,
    /// Used for risk-percentage and display only, never for P&L.
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub take_profit: Option<Decimal>,
    /// Free-text labels. Insertion order is irrelevant for analytics.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Explicit instrument class, when the user recorded one. Overrides
    /// symbol-based classification.
    #[serde(default)]
    pub instrument_type: Option<InstrumentClass>,
    #[serde(default)]
    pub market_session: Option<MarketSession>,
    /// Cached net P&L in account currency. `None` while open.
    #[serde(default)]
    pub profit_loss: Option<Decimal>,
    /// Cached net return on the account, in percent. `None` while open.
    #[serde(default)]
    pub return_percentage: Option<Decimal>,
    /// Cached initial risk relative to the account, in percent.
    #[serde(default)]
    pub risk_percentage: Option<Decimal>,
}

impl Trade {
    /// True while the position has not been closed out.
    pub fn is_open(&self) -> bool {
        self.exit_price.is_none()
    }

    /// The session label used for grouping; missing sessions fall into
    /// `Other` rather than being excluded.
    pub fn session(&self) -> MarketSession {
        self.market_session.unwrap_or_default()
    }

    /// Validates the invariants the analytics layer is allowed to assume.
    ///
    /// This runs at the data-layer boundary (import, create, edit); the
    /// computation layer itself never re-checks these.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symbol.trim().is_empty() {
            return Err(CoreError::InvalidField {
                field: "symbol",
                reason: "must not be empty".to_string(),
            });
        }
        if self.quantity.is_sign_negative() {
            return Err(CoreError::InvalidField {
                field: "quantity",
                reason: format!("must not be negative, got {}", self.quantity),
            });
        }
        if self.fees.is_sign_negative() {
            return Err(CoreError::InvalidField {
                field: "fees",
                reason: format!("must not be negative, got {}", self.fees),
            });
        }
        if self.exit_price.is_some() != self.exit_date.is_some() {
            return Err(CoreError::InvalidField {
                field: "exit_date",
                reason: "exit price and exit date must be set together".to_string(),
            });
        }
        Ok(())
    }
}
