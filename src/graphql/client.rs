//! HTTP client for a GraphQL endpoint.
//!
//! Queries are POSTed as the standard `{query, variables}` JSON body and the
//! `{data, errors}` envelope is decoded into a typed payload. Configuration is
//! via environment variables:
//! - `MISSION_BOARD_GRAPHQL_URL` - endpoint (default: `https://api.spacex.land/graphql/`)

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Default upstream endpoint.
const DEFAULT_URL: &str = "https://api.spacex.land/graphql/";

/// GraphQL client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {0}: {1}")]
    Status(StatusCode, String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Response contained no data")]
    MissingData,
}

/// The standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Client for one GraphQL endpoint.
///
/// Cheap to clone; constructed once and passed to whatever needs to query, so
/// there is no process-global instance.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    client: Client,
}

impl GraphQlClient {
    /// Create a client from environment variables.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("MISSION_BOARD_GRAPHQL_URL")
            .unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(endpoint)
    }

    /// Create a client with an explicit endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and decode its `data` payload.
    ///
    /// GraphQL-level errors take precedence over a missing `data` field so the
    /// caller sees the server's message rather than a bare decode failure.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status(status, body));
        }

        let envelope: Envelope<T> = response.json().await?;
        if let Some(err) = envelope.errors.into_iter().next() {
            return Err(ClientError::GraphQl(err.message));
        }
        envelope.data.ok_or(ClientError::MissingData)
    }
}
