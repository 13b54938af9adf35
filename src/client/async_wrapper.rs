//! Async wrapper around the synchronous BuyerClient.
//!
//! HTTP calls run on tokio's blocking pool via `spawn_blocking` so the
//! runtime serving MCP requests is never blocked.

use crate::client::BuyerClient;
use crate::error::{BuyerApiError, BuyerApiResult};
use crate::models::{Buyer, CreateBuyerRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Async buyer API operations.
#[async_trait]
pub trait AsyncBuyerClient: Send + Sync {
    async fn create_buyer(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer>;
    async fn list_buyers(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>>;
    async fn get_buyer(&self, id: &str) -> BuyerApiResult<Buyer>;
}

/// [`AsyncBuyerClient`] backed by a shared [`BuyerClient`].
#[derive(Clone)]
pub struct AsyncBuyerClientImpl {
    client: Arc<BuyerClient>,
}

impl AsyncBuyerClientImpl {
    pub fn new(client: BuyerClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncBuyerClient for AsyncBuyerClientImpl {
    async fn create_buyer(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.create_buyer(&request))
            .await
            .map_err(|e| BuyerApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn list_buyers(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_buyers(limit, offset))
            .await
            .map_err(|e| BuyerApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_buyer(&self, id: &str) -> BuyerApiResult<Buyer> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.get_buyer(&id))
            .await
            .map_err(|e| BuyerApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
