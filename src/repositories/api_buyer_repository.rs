use crate::client::AsyncBuyerClient;
use crate::error::BuyerApiResult;
use crate::models::{Buyer, CreateBuyerRequest};
use crate::repositories::traits::BuyerRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Buyer repository backed by the buyer HTTP API.
pub struct ApiBuyerRepository {
    client: Arc<dyn AsyncBuyerClient>,
}

impl ApiBuyerRepository {
    pub fn new(client: Arc<dyn AsyncBuyerClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BuyerRepository for ApiBuyerRepository {
    async fn create(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer> {
        self.client.create_buyer(request).await
    }

    async fn list(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>> {
        self.client.list_buyers(limit, offset).await
    }

    async fn get(&self, id: &str) -> BuyerApiResult<Buyer> {
        self.client.get_buyer(id).await
    }
}
