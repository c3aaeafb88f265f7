use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Unknown date range '{0}' (expected week, month, quarter, year or all)")]
    InvalidDateRange(String),
}
