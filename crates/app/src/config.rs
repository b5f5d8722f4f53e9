use std::path::Path;
use std::time::Duration;

use discussion_infra::github::GITHUB_GRAPHQL_ENDPOINT;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "github.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub graphql_url: String,
    pub token: Option<String>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer for {0}: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = read_string("GH_HOST", DEFAULT_HOST).trim().to_string();
        if host.is_empty() || host.contains('/') {
            return Err(ConfigError::InvalidValue("GH_HOST", host));
        }
        let graphql_url = read_optional_string("GH_DISCUSSION_GRAPHQL_URL")
            .unwrap_or_else(|| graphql_url_for_host(&host));
        let token =
            read_optional_string("GH_TOKEN").or_else(|| read_optional_string("GITHUB_TOKEN"));
        let request_timeout_secs = read_u64("GH_DISCUSSION_REQUEST_TIMEOUT_SECS", 30)?;
        if request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "GH_DISCUSSION_REQUEST_TIMEOUT_SECS",
                "0".to_string(),
            ));
        }
        let user_agent = read_string("GH_DISCUSSION_USER_AGENT", "gh-discussion");

        Ok(Self {
            host,
            graphql_url,
            token,
            request_timeout: Duration::from_secs(request_timeout_secs),
            user_agent,
        })
    }
}

/// github.com serves GraphQL from its api subdomain; Enterprise hosts use `/api/graphql`.
pub fn graphql_url_for_host(host: &str) -> String {
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        GITHUB_GRAPHQL_ENDPOINT.to_string()
    } else {
        format!("https://{host}/api/graphql")
    }
}

pub fn load_dotenv() -> Result<(), std::io::Error> {
    let path = Path::new(".env");
    if !path.exists() {
        return Ok(());
    }
    let contents = std::fs::read_to_string(path)?;
    for (key, value) in contents.lines().filter_map(parse_dotenv_line) {
        if std::env::var_os(&key).is_none() {
            // Safety: runs in main before the runtime spawns any task.
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
    Ok(())
}

fn read_string(key: &'static str, default: &'static str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn read_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match read_optional_string(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber(key, raw)),
        None => Ok(default),
    }
}

fn read_optional_string(key: &'static str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_dotenv_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, raw) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), dotenv_value(raw.trim())))
}

fn dotenv_value(raw: &str) -> String {
    if let Some(inner) = raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        let mut value = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                value.push(ch);
                continue;
            }
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(escaped @ ('\\' | '"')) => value.push(escaped),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            }
        }
        return value;
    }
    if let Some(inner) = raw.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
        return inner.to_string();
    }
    // Unquoted values may carry a trailing comment.
    match raw.split_once(" #") {
        Some((value, _)) => value.trim_end().to_string(),
        None => raw.to_string(),
    }
}
