//! Buyer Intake - an MCP server for drafting and creating buyer records.
//!
//! An assistant fills in a single buyer draft (organization fields plus a
//! list of contact persons), the draft is validated locally, and a single
//! API call creates the buyer.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, ABN, buyer ID)
//! - **models**: Buyer and contact records
//! - **contacts**: The contact list and its single-primary invariant
//! - **draft**: The buyer draft and its submit rules
//! - **client**: HTTP client for the buyer API
//! - **repositories**: Buyer storage abstraction
//! - **cache**: TTL cache for buyer list pages
//! - **services**: Draft editing, submission and notices
//! - **server**: MCP protocol server

pub mod cache;
pub mod client;
pub mod config;
pub mod contacts;
pub mod domain;
pub mod draft;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use cache::TimedCache;
pub use client::BuyerClient;
pub use config::Config;
pub use contacts::ContactList;
pub use draft::BuyerDraft;
pub use error::{BuyerApiError, ConfigError, IntakeError, SubmitError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Buyer, BuyerFields, BuyerFieldsPatch, Contact, ContactCandidate, CreateBuyerRequest};
pub use server::BuyerIntakeServer;
pub use services::{IntakeService, IntakeServiceImpl, Notice, NoticeLevel, SubmissionOutcome};
