//! HTTP client for the buyer API.
//!
//! A synchronous `ureq` client that async code drives through
//! `tokio::task::spawn_blocking` (see [`AsyncBuyerClient`]). The client
//! handles authentication, status mapping and the response envelopes the
//! API uses.

mod async_wrapper;
pub use async_wrapper::{AsyncBuyerClient, AsyncBuyerClientImpl};

use crate::config::Config;
use crate::error::{BuyerApiError, BuyerApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{Buyer, CreateBuyerRequest};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Envelope for the buyer list endpoint.
#[derive(Debug, Deserialize)]
pub struct BuyersResponse {
    pub buyers: Vec<Buyer>,
}

/// Envelope some deployments wrap single buyers in.
#[derive(Debug, Deserialize)]
struct BuyerEnvelope {
    buyer: Buyer,
}

/// HTTP client for the buyer API.
#[derive(Clone)]
pub struct BuyerClient {
    base_url: String,
    api_key: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl BuyerClient {
    /// Create a new BuyerClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.buyer_api_url.clone(),
            api_key: config.buyer_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a BuyerClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Record into an existing metrics collector instead of a private one.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> BuyerApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &self.auth_header())
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::warn!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> BuyerApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &self.auth_header())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a BuyerApiError.
    fn map_error(&self, error: ureq::Error) -> BuyerApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => BuyerApiError::Unauthorized,
                    404 => BuyerApiError::NotFound(message),
                    409 => BuyerApiError::Conflict(message),
                    422 => BuyerApiError::Rejected(message),
                    429 => BuyerApiError::RateLimitExceeded,
                    _ => BuyerApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    BuyerApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    BuyerApiError::Timeout
                } else {
                    BuyerApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Parse a single buyer, bare or wrapped in `{"buyer": ...}`.
    fn parse_buyer(body: &str) -> BuyerApiResult<Buyer> {
        if let Ok(envelope) = serde_json::from_str::<BuyerEnvelope>(body) {
            return Ok(envelope.buyer);
        }
        serde_json::from_str::<Buyer>(body).map_err(BuyerApiError::JsonError)
    }

    /// Create a buyer with its contacts.
    pub fn create_buyer(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer> {
        tracing::info!(
            "Creating buyer: {} ({} contacts)",
            request.legal_name,
            request.contacts.len()
        );

        let body = serde_json::to_value(request).map_err(BuyerApiError::JsonError)?;
        let response = self.post("/buyers", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| BuyerApiError::HttpError(e.to_string()))?;

        let buyer = Self::parse_buyer(&response_body)?;
        self.metrics.record_buyer_created();

        tracing::info!("Buyer created successfully with id: {}", buyer.id);
        Ok(buyer)
    }

    /// List buyers with pagination.
    pub fn list_buyers(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>> {
        let path = format!("/buyers?limit={}&offset={}", limit, offset);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| BuyerApiError::HttpError(e.to_string()))?;

        let buyers = if let Ok(wrapped) = serde_json::from_str::<BuyersResponse>(&body) {
            wrapped.buyers
        } else {
            serde_json::from_str::<Vec<Buyer>>(&body).map_err(BuyerApiError::JsonError)?
        };

        self.metrics.record_buyers_fetched(buyers.len());
        Ok(buyers)
    }

    /// Get a single buyer by ID.
    pub fn get_buyer(&self, buyer_id: &str) -> BuyerApiResult<Buyer> {
        let path = format!("/buyers/{}", urlencoding::encode(buyer_id));
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| BuyerApiError::HttpError(e.to_string()))?;

        Self::parse_buyer(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = BuyerClient::with_base_url(
            "https://api.example.com".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(client.build_url("/buyers"), "https://api.example.com/buyers");
        assert_eq!(client.build_url("buyers"), "https://api.example.com/buyers");

        let client_with_slash = BuyerClient::with_base_url(
            "https://api.example.com/".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("/buyers"),
            "https://api.example.com/buyers"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            buyer_api_url: "https://api.example.com".to_string(),
            buyer_api_key: "test-key-123".to_string(),
            ..Config::default()
        };

        let client = BuyerClient::new(&config);
        assert_eq!(client.base_url, "https://api.example.com");
        assert_eq!(client.auth_header(), "Bearer test-key-123");
    }

    #[test]
    fn test_parse_buyer_bare_and_wrapped() {
        let bare = r#"{"id":"b1","legalName":"Acme"}"#;
        let wrapped = r#"{"buyer":{"id":"b2","legalName":"Acme"}}"#;

        assert_eq!(BuyerClient::parse_buyer(bare).unwrap().id.as_str(), "b1");
        assert_eq!(BuyerClient::parse_buyer(wrapped).unwrap().id.as_str(), "b2");
        assert!(BuyerClient::parse_buyer("{}").is_err());
    }

    #[test]
    fn test_shared_metrics() {
        let metrics = Metrics::new();
        let client = BuyerClient::with_base_url("http://localhost".into(), "k".into())
            .with_metrics(metrics.clone());
        client.metrics().record_buyer_created();
        assert_eq!(metrics.buyers_created_total(), 1);
    }
}
