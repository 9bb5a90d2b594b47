use crate::config::UpstreamSettings;
use crate::core::{UpstreamRequest, UNKNOWN_ERROR_MESSAGE, UPSTREAM_ERROR_MESSAGE};
use crate::models::{InternalErrorResponse, UpstreamErrorResponse};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when fetching official match data
#[derive(Debug, Error)]
pub enum KingsLeagueError {
    /// The upstream answered with a non-2xx status
    #[error("upstream returned status {0}")]
    Upstream(u16),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidJson(String),

    /// Failure raised by a [`MatchFeed`] other than [`KingsLeagueClient`]; the message may be empty
    #[error("{0}")]
    Transport(String),
}

impl KingsLeagueError {
    /// Message reported to the caller for internal failures
    pub fn internal_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl ResponseError for KingsLeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            KingsLeagueError::Upstream(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            KingsLeagueError::Upstream(status) => builder.json(UpstreamErrorResponse {
                error: UPSTREAM_ERROR_MESSAGE.to_string(),
                status: *status,
            }),
            _ => builder.json(InternalErrorResponse {
                error: self.internal_message(),
            }),
        }
    }
}

/// Source of official match data
///
/// Implementations other than [`KingsLeagueClient`] report their own failures as
/// [`KingsLeagueError::Transport`]; an empty message is answered with the generic
/// unknown-error text. Failures are logged once by the route, not by the feed.
#[async_trait]
pub trait MatchFeed: Send + Sync {
    /// Fetch the raw match document, using the default match when `match_id` is missing or empty
    async fn fetch_match(&self, match_id: Option<&str>) -> Result<Value, KingsLeagueError>;
}

/// Kings League API client
///
/// Issues exactly one GET per call with browser-like headers. reqwest keeps no
/// response cache, so every call goes to the network.
pub struct KingsLeagueClient {
    base_url: String,
    client: Client,
}

impl KingsLeagueClient {
    /// Create a new Kings League client
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, KingsLeagueError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn from_settings(settings: &UpstreamSettings) -> Result<Self, KingsLeagueError> {
        Self::new(
            settings.base_url.clone(),
            Duration::from_secs(settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single match document from the upstream
    pub async fn get_match(&self, match_id: Option<&str>) -> Result<Value, KingsLeagueError> {
        let request = UpstreamRequest::for_match(&self.base_url, match_id);

        tracing::debug!("Fetching match {} from: {}", request.match_id, request.url);

        let response = self
            .client
            .get(&request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KingsLeagueError::Upstream(status.as_u16()));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| KingsLeagueError::InvalidJson(e.to_string()))
    }
}

#[async_trait]
impl MatchFeed for KingsLeagueClient {
    async fn fetch_match(&self, match_id: Option<&str>) -> Result<Value, KingsLeagueError> {
        self.get_match(match_id).await
    }
}
