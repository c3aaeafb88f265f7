use crate::error::ConfigError;
use rust_decimal::Decimal;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AccountSettings, Config};

/// Loads the application configuration from the `config.toml` file.
///
/// Reads the configuration file, deserializes it into the strongly-typed
/// `Config` struct and validates it.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Same as [`load_config`], but from an explicit file path.
pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.account.balance <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(format!(
            "account.balance must be positive, got {}",
            config.account.balance
        )));
    }
    Ok(())
}
