//! Practicum homework status endpoint

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::error::{ClientError, Result};
use crate::redact;

/// Production URL of the status endpoint
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the Practicum status API
///
/// Issues a single authenticated GET per call; retrying is left to the caller.
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the `homework_statuses` endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a client for the production endpoint
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(PRACTICUM_ENDPOINT, token, Client::new())
    }

    /// Create a client with a custom endpoint and HTTP client
    ///
    /// This allows you to point at a mock server or configure timeouts.
    ///
    /// # Example
    /// ```
    /// use homework_client::{PRACTICUM_ENDPOINT, PracticumClient};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client(PRACTICUM_ENDPOINT, "token", http_client);
    /// assert_eq!(client.endpoint(), PRACTICUM_ENDPOINT);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Returns the decoded JSON body untouched; checking its shape is the
    /// caller's job.
    ///
    /// # Errors
    /// - [`ClientError::Connectivity`] if no HTTP response was received
    /// - [`ClientError::HttpStatus`] if the status code is not 200
    /// - [`ClientError::ParseError`] if the body is not JSON
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<JsonValue> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!("Ошибка при запросе к API: {}", e);
                ClientError::Connectivity(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                "API вернул статус код {}",
                status.as_u16()
            );
            return Err(ClientError::http_status(status.as_u16(), body));
        }

        response.json().await.map_err(|e| {
            error!("Не удалось разобрать ответ API: {}", e);
            ClientError::ParseError(format!("Failed to parse JSON response: {}", e))
        })
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &redact(&self.token))
            .finish()
    }
}
