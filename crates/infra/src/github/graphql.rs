use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GraphQL: {0}")]
    Graphql(String),
    #[error("missing data: {0}")]
    MissingData(&'static str),
    #[error("authentication token not found; set GH_TOKEN or run `gh auth login`")]
    MissingToken,
    #[error("request cancelled")]
    Cancelled,
}

/// Performs one GraphQL query and hands back the `data` member of the response.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    user_agent: String,
    cancel: CancellationToken,
}

impl HttpTransport {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        token: Option<String>,
        user_agent: impl Into<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            token,
            user_agent: user_agent.into(),
            cancel,
        }
    }

    async fn post(&self, query: &str, variables: Value) -> Result<Value, TransportError> {
        let token = self.token.as_deref().ok_or(TransportError::MissingToken)?;
        debug!(endpoint = %self.endpoint, "posting graphql query");
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?
            .error_for_status()?;
        let payload: GraphqlResponse = response.json().await?;
        payload.into_data()
    }
}

#[async_trait]
impl GraphTransport for HttpTransport {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, TransportError> {
        // Dropping the request future aborts the in-flight HTTP call.
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(TransportError::Cancelled),
            result = self.post(query, variables) => result,
        }
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

impl GraphqlResponse {
    fn into_data(self) -> Result<Value, TransportError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .map(|err| err.message)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(TransportError::Graphql(message));
        }
        self.data.ok_or(TransportError::MissingData("graphql data"))
    }
}
