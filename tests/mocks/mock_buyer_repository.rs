use async_trait::async_trait;
use buyer_intake::domain::BuyerId;
use buyer_intake::error::{BuyerApiError, BuyerApiResult};
use buyer_intake::models::{Buyer, CreateBuyerRequest};
use buyer_intake::repositories::BuyerRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory buyer repository for testing.
///
/// Stores buyers newest first, assigns sequential IDs, records every create
/// request and can be told to fail the next create.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBuyerRepository {
    buyers: Arc<Mutex<Vec<Buyer>>>,
    requests: Arc<Mutex<Vec<CreateBuyerRequest>>>,
    next_create_error: Arc<Mutex<Option<BuyerApiError>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBuyerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing buyer (appended, so it sorts as older).
    pub fn add_buyer(&self, id: &str, legal_name: &str) {
        let buyer = Buyer {
            id: BuyerId::new(id).unwrap(),
            legal_name: legal_name.to_string(),
            abn: String::new(),
            address: String::new(),
            contact_channel: String::new(),
            account_number: String::new(),
            contacts: Vec::new(),
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
        };
        self.buyers.lock().unwrap().push(buyer);
    }

    /// Make the next `create` call fail with `error`.
    pub fn fail_next_create(&self, error: BuyerApiError) {
        *self.next_create_error.lock().unwrap() = Some(error);
    }

    /// Every request passed to `create`, in call order.
    pub fn create_requests(&self) -> Vec<CreateBuyerRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn stored_count(&self) -> usize {
        self.buyers.lock().unwrap().len()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl BuyerRepository for MockBuyerRepository {
    async fn create(&self, request: &CreateBuyerRequest) -> BuyerApiResult<Buyer> {
        self.track_call("create");
        self.requests.lock().unwrap().push(request.clone());

        if let Some(error) = self.next_create_error.lock().unwrap().take() {
            return Err(error);
        }

        let mut buyers = self.buyers.lock().unwrap();
        let buyer = Buyer {
            id: BuyerId::new(format!("buyer-{}", buyers.len() + 1)).unwrap(),
            legal_name: request.legal_name.clone(),
            abn: request.abn.as_str().to_string(),
            address: request.address.clone(),
            contact_channel: request.contact_channel.clone(),
            account_number: request.account_number.clone(),
            contacts: request.contacts.clone(),
            created_at: None,
        };
        buyers.insert(0, buyer.clone());
        Ok(buyer)
    }

    async fn list(&self, limit: usize, offset: usize) -> BuyerApiResult<Vec<Buyer>> {
        self.track_call("list");

        let buyers = self.buyers.lock().unwrap();
        Ok(buyers.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn get(&self, id: &str) -> BuyerApiResult<Buyer> {
        self.track_call("get");

        let buyers = self.buyers.lock().unwrap();
        buyers
            .iter()
            .find(|b| b.id.as_str() == id)
            .cloned()
            .ok_or_else(|| BuyerApiError::NotFound(format!("Buyer {} not found", id)))
    }
}
