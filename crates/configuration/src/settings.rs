use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub account: AccountSettings,
}

/// The account the journal is kept against.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSettings {
    /// Account balance used as the basis for return and risk percentages.
    pub balance: Decimal,
    /// Display currency code (e.g. "USD"). Purely cosmetic.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}
