use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}
