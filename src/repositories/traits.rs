use crate::error::BuyerApiResult;
use crate::models::{Buyer, CreateBuyerRequest};
use async_trait::async_trait;

/// Repository for buyer records.
///
/// Abstracts the buyer backend so the intake service can run against the
/// HTTP API or an in-memory double.
#[async_trait]
pub trait BuyerRepository: Send + Sync {
    /// Create a buyer and return the stored record.
    async fn create(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer>;

    /// Retrieve buyers with pagination.
    async fn list(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>>;

    /// Retrieve a single buyer by ID.
    async fn get(&self, id: &str) -> BuyerApiResult<Buyer>;
}
