use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid repository format. Expected OWNER/REPO")]
    InvalidRepo(String),
}
