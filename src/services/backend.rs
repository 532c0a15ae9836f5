use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::models::MissingPerson;
use crate::services::registry::located_cases;

/// Errors that can occur when talking to the case backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid or expired access token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the remote missing-persons backend
///
/// Only the case listing is needed here; everything else the backend offers
/// (auth, uploads, reports) belongs to other consumers.
pub struct BackendClient {
    base_url: String,
    access_token: Option<String>,
    client: Client,
}

impl BackendClient {
    pub fn new(
        base_url: String,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            access_token,
            client,
        })
    }

    fn cases_url(&self) -> String {
        format!(
            "{}/missing-persons/missing-persons/",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Fetch every case with a usable last known location
    ///
    /// Accepts a bare JSON array or a paginated `{"results": [...]}` body.
    /// Records that fail to parse or lack coordinates are skipped.
    pub async fn list_cases(&self) -> Result<Vec<MissingPerson>, BackendError> {
        let url = self.cases_url();
        tracing::debug!("Fetching cases from: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(BackendError::Unauthorized);
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Failed to fetch cases: {} - {}", status, body);
                return Err(BackendError::ApiError(format!(
                    "Failed to fetch cases: {}",
                    status
                )));
            }
        }

        let json: Value = response.json().await?;

        let documents = match json {
            Value::Array(items) => items,
            Value::Object(mut page) => match page.remove("results") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(BackendError::InvalidResponse(
                        "Missing results array".into(),
                    ))
                }
            },
            _ => {
                return Err(BackendError::InvalidResponse(
                    "Expected an array of cases".into(),
                ))
            }
        };

        let total = documents.len();
        let cases = located_cases(documents);

        tracing::debug!("Fetched {} located cases (total: {})", cases.len(), total);

        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_client_creation() {
        let client = BackendClient::new(
            "http://backend.test/api/".to_string(),
            Some("token".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.cases_url(),
            "http://backend.test/api/missing-persons/missing-persons/"
        );
        assert_eq!(client.access_token.as_deref(), Some("token"));
    }
}
