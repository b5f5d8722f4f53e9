pub mod create;
pub mod list;
pub mod search;
pub mod view;

use std::io::Write;

use chrono::{DateTime, Utc};
use discussion_infra::github::GithubClient;

use crate::AppError;
use crate::browser::Browser;
use crate::repo_context::CurrentRepo;

/// Everything a subcommand reaches outside itself.
pub struct Session<'a, T, W: Write> {
    pub client: &'a GithubClient<T>,
    pub current: &'a dyn CurrentRepo,
    pub browser: &'a dyn Browser,
    pub host: &'a str,
    pub out: W,
    /// Reference point for relative timestamps in table output.
    pub now: DateTime<Utc>,
}

impl<T, W: Write> Session<'_, T, W> {
    fn open_in_browser(&self, url: &str) -> Result<(), AppError> {
        self.browser.open(url).map_err(AppError::Browser)
    }
}

/// Normalizes the `--answered` spelling into a tri-state filter.
pub fn parse_answered(raw: Option<&str>) -> Result<Option<bool>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(Some(true)),
        "false" | "no" | "0" => Ok(Some(false)),
        _ => Err(AppError::Usage(format!(
            "invalid value for --answered: {raw} (expected true/false)"
        ))),
    }
}

pub fn validate_limit(limit: usize) -> Result<usize, AppError> {
    if limit == 0 {
        return Err(AppError::Usage(format!("invalid limit: {limit}")));
    }
    Ok(limit)
}
