// GitHub API HTTP client.
// Handles authentication, rate limiting, and request/response processing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FolioError, Result};

use super::types::RateLimit;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Timeout applied to every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API client with rate limit tracking.
///
/// The client is cheap to clone and shared with background fetch tasks;
/// rate limit state lives behind a mutex so every clone sees the latest
/// headers.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    rate_limit: Arc<Mutex<RateLimit>>,
}

impl GitHubClient {
    /// Create a new GitHub client, authenticated when a token is given.
    /// The endpoints used here are public; a token only raises the rate
    /// limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FolioError::Other(e.to_string()))?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            rate_limit: Arc::new(Mutex::new(RateLimit::default())),
        })
    }

    /// Create a client from the GITHUB_TOKEN environment variable, falling
    /// back to unauthenticated requests when it is unset.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(token.as_deref())
    }

    /// Get a snapshot of the current rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|rate| rate.clone())
            .unwrap_or_default()
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self.client.get(&url).send().await.map_err(FolioError::Api)?;

        self.update_rate_limit(&response);
        self.check_response(response).await
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        if let Ok(mut rate) = self.rate_limit.lock() {
            if let Some(limit) = header_value(response, "x-ratelimit-limit") {
                rate.limit = limit;
            }
            if let Some(remaining) = header_value(response, "x-ratelimit-remaining") {
                rate.remaining = remaining;
            }
            if let Some(reset) = header_value(response, "x-ratelimit-reset") {
                rate.reset = reset;
            }
        }
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => Ok(response),
            StatusCode::UNAUTHORIZED => Err(FolioError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(FolioError::NotFound(url))
            }
            StatusCode::FORBIDDEN => {
                // Check if rate limited
                let rate = self.rate_limit();
                if rate.remaining == 0 {
                    let reset_at = chrono::DateTime::from_timestamp(rate.reset as i64, 0)
                        .map(|dt| dt.format("%H:%M:%S").to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    Err(FolioError::RateLimited { reset_at })
                } else {
                    Err(FolioError::Other(format!(
                        "Forbidden: {}",
                        response.text().await.unwrap_or_default()
                    )))
                }
            }
            status => Err(FolioError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}

/// Parse a numeric rate limit header.
fn header_value(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}
