//! Application service layer.
//!
//! Services hold the business rules between the MCP handlers and the
//! repositories.

mod intake_service;

pub use intake_service::{
    IntakeService, IntakeServiceImpl, Notice, NoticeLevel, SubmissionOutcome, DEFAULT_PAGE_SIZE,
};
