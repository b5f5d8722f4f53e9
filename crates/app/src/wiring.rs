use reqwest::Client;
use thiserror::Error;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::AppConfig;
use discussion_infra::github::{GithubClient, HttpTransport};

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub fn build_client(
    config: &AppConfig,
    token: Option<String>,
    cancel: CancellationToken,
) -> Result<GithubClient<HttpTransport>, WiringError> {
    let http = Client::builder().timeout(config.request_timeout).build()?;
    let transport = HttpTransport::new(
        http,
        config.graphql_url.clone(),
        token,
        config.user_agent.clone(),
        cancel,
    );
    Ok(GithubClient::new(transport))
}

/// The configured token, else the one stored by an authenticated `gh` installation.
pub async fn resolve_token(config: &AppConfig) -> Option<String> {
    if let Some(token) = &config.token {
        return Some(token.clone());
    }
    let output = match Command::new("gh")
        .args(["auth", "token", "--hostname", config.host.as_str()])
        .output()
        .await
    {
        Ok(output) => output,
        Err(err) => {
            debug!(error = %err, "gh executable unavailable");
            return None;
        }
    };
    if !output.status.success() {
        debug!(status = %output.status, "gh auth token failed");
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?;
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(token: Option<&str>) -> AppConfig {
        AppConfig {
            host: "github.com".to_string(),
            graphql_url: "https://api.github.com/graphql".to_string(),
            token: token.map(str::to_string),
            request_timeout: Duration::from_secs(5),
            user_agent: "gh-discussion".to_string(),
        }
    }

    #[tokio::test]
    async fn configured_token_wins() {
        assert_eq!(
            resolve_token(&config(Some("from-env"))).await.as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn client_builds_without_token() {
        assert!(build_client(&config(None), None, CancellationToken::new()).is_ok());
    }
}
