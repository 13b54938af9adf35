//! Intake service layer.
//!
//! Owns the single buyer draft, applies contact edits, submits the draft and
//! keeps the cached buyer list in step with what was just created.

use crate::cache::TimedCache;
use crate::contacts::ContactList;
use crate::domain::BuyerId;
use crate::draft::BuyerDraft;
use crate::error::{IntakeError, IntakeResult};
use crate::metrics::{Metrics, MetricsSummary};
use crate::models::{Buyer, BuyerFieldsPatch, ContactCandidate};
use crate::repositories::BuyerRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Page size used when callers don't ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

const FIRST_PAGE_KEY: &str = "buyers:first_page";

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short message reporting the result of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub buyer: Buyer,
    pub notice: Notice,
}

/// First page of buyers together with the page size it was fetched with.
#[derive(Debug, Clone)]
struct CachedPage {
    limit: usize,
    buyers: Vec<Buyer>,
}

/// Intake operations exposed to the MCP handlers.
#[async_trait]
pub trait IntakeService: Send + Sync {
    /// Snapshot of the current draft.
    async fn draft(&self) -> BuyerDraft;

    /// Apply a partial update of the buyer's scalar fields.
    async fn update_fields(&self, patch: BuyerFieldsPatch) -> BuyerDraft;

    /// Validate and add a contact, returning the new contact list.
    async fn add_contact(&self, candidate: ContactCandidate) -> IntakeResult<ContactList>;

    /// Remove a contact by exact name.
    async fn remove_contact(&self, name: &str) -> ContactList;

    /// Make the named contact the only primary contact.
    async fn set_primary(&self, name: &str) -> ContactList;

    /// Submit the draft to the buyer API.
    ///
    /// On success the draft is reset and the buyer is prepended to the
    /// cached first page. On failure the draft is kept for correction.
    async fn submit(&self) -> IntakeResult<SubmissionOutcome>;

    /// Discard the draft.
    async fn reset_draft(&self);

    /// List buyers; the first page is served from cache while fresh.
    async fn list_buyers(&self, limit: Option<usize>, offset: usize) -> IntakeResult<Vec<Buyer>>;

    /// Fetch a single buyer.
    async fn get_buyer(&self, id: &str) -> IntakeResult<Buyer>;

    /// Current counters.
    fn metrics(&self) -> MetricsSummary;
}

/// Default implementation of IntakeService.
pub struct IntakeServiceImpl {
    draft: Mutex<BuyerDraft>,
    repository: Arc<dyn BuyerRepository>,
    buyer_cache: TimedCache<&'static str, CachedPage>,
    metrics: Metrics,
}

impl IntakeServiceImpl {
    /// Create a new intake service with an empty draft.
    pub fn new(
        repository: Arc<dyn BuyerRepository>,
        metrics: Metrics,
        buyer_cache_ttl_secs: u64,
    ) -> Self {
        Self {
            draft: Mutex::new(BuyerDraft::new()),
            repository,
            buyer_cache: TimedCache::new(buyer_cache_ttl_secs),
            metrics,
        }
    }

    /// Prepend a freshly created buyer to the cached first page.
    fn apply_optimistic_update(&self, buyer: &Buyer) {
        let mut entry = buyer.clone();
        if entry.created_at.is_none() {
            entry.created_at = Some(chrono::Utc::now().to_rfc3339());
        }

        let updated = self.buyer_cache.update(&FIRST_PAGE_KEY, move |page| {
            page.buyers.retain(|b| b.id != entry.id);
            page.buyers.insert(0, entry);
            page.buyers.truncate(page.limit);
        });

        if updated {
            tracing::debug!("Prepended buyer {} to cached buyer list", buyer.id);
        }
    }
}

#[async_trait]
impl IntakeService for IntakeServiceImpl {
    async fn draft(&self) -> BuyerDraft {
        self.draft.lock().await.clone()
    }

    async fn update_fields(&self, patch: BuyerFieldsPatch) -> BuyerDraft {
        let mut draft = self.draft.lock().await;
        draft.set_fields(patch);
        draft.clone()
    }

    async fn add_contact(&self, candidate: ContactCandidate) -> IntakeResult<ContactList> {
        let mut draft = self.draft.lock().await;

        if let Err(e) = draft.add_contact(&candidate) {
            tracing::debug!("Rejected contact {:?}: {}", candidate.name.trim(), e);
            self.metrics.record_contact_rejected();
            return Err(e.into());
        }

        tracing::debug!(
            "Added contact {:?} ({} in draft)",
            candidate.name.trim(),
            draft.contacts.len()
        );
        Ok(draft.contacts.clone())
    }

    async fn remove_contact(&self, name: &str) -> ContactList {
        let mut draft = self.draft.lock().await;
        draft.remove_contact(name);
        draft.contacts.clone()
    }

    async fn set_primary(&self, name: &str) -> ContactList {
        let mut draft = self.draft.lock().await;
        draft.set_primary(name);
        draft.contacts.clone()
    }

    async fn submit(&self) -> IntakeResult<SubmissionOutcome> {
        // Held across the API call so edits can't interleave with a submission.
        let mut draft = self.draft.lock().await;

        let request = draft.to_request().map_err(|e| {
            tracing::debug!("Draft not ready to submit: {}", e);
            self.metrics.record_submit_failure();
            IntakeError::from(e)
        })?;

        match self.repository.create(&request).await {
            Ok(buyer) => {
                self.apply_optimistic_update(&buyer);
                draft.reset();

                let notice = Notice::success(format!("Buyer {} created", buyer.legal_name));
                tracing::info!("{}", notice.message);
                Ok(SubmissionOutcome { buyer, notice })
            }
            Err(e) => {
                self.metrics.record_submit_failure();
                let notice = Notice::error(format!("Failed to create buyer: {}", e));
                tracing::error!("{}", notice.message);
                Err(e.into())
            }
        }
    }

    async fn reset_draft(&self) {
        self.draft.lock().await.reset();
        tracing::debug!("Buyer draft reset");
    }

    async fn list_buyers(&self, limit: Option<usize>, offset: usize) -> IntakeResult<Vec<Buyer>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

        if offset == 0 {
            if let Some(page) = self.buyer_cache.get(&FIRST_PAGE_KEY) {
                if page.limit == limit {
                    tracing::debug!("Buyer list served from cache");
                    return Ok(page.buyers);
                }
            }
        }

        let buyers = self.repository.list(limit, offset).await?;

        if offset == 0 {
            self.buyer_cache.insert(
                FIRST_PAGE_KEY,
                CachedPage {
                    limit,
                    buyers: buyers.clone(),
                },
            );
        }

        Ok(buyers)
    }

    async fn get_buyer(&self, id: &str) -> IntakeResult<Buyer> {
        let id = BuyerId::new(id.trim())?;
        Ok(self.repository.get(id.as_str()).await?)
    }

    fn metrics(&self) -> MetricsSummary {
        self.metrics.summary()
    }
}
