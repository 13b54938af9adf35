//! Error types for the buyer intake server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when interacting with the buyer API.
#[derive(Error, Debug)]
pub enum BuyerApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// A buyer with the same identity already exists
    #[error("Buyer already exists: {0}")]
    Conflict(String),

    /// The backend refused the payload
    #[error("Buyer rejected by API: {0}")]
    Rejected(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Reasons a draft cannot be turned into a creation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// At least one contact is required
    #[error("At least one contact is required")]
    NoContacts,

    /// A required buyer field is blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The ABN is not an 11 digit number
    #[error("Invalid ABN: {0}")]
    InvalidAbn(String),
}

/// Errors surfaced by the intake service.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// A contact failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The draft is not ready to submit
    #[error("{0}")]
    Submit(#[from] SubmitError),

    /// The buyer API call failed
    #[error(transparent)]
    Api(#[from] BuyerApiError),
}

impl IntakeError {
    /// Whether the user can fix this by editing the draft.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Submit(_) => true,
            Self::Api(BuyerApiError::Conflict(_)) | Self::Api(BuyerApiError::Rejected(_)) => true,
            Self::Api(_) => false,
        }
    }
}

/// Convenience type alias for Results with BuyerApiError
pub type BuyerApiResult<T> = Result<T, BuyerApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuyerApiError::NotFound("buyer".to_string());
        assert_eq!(err.to_string(), "Resource not found: buyer");

        let err = ConfigError::MissingVar("BUYER_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: BUYER_API_KEY"
        );

        let err = SubmitError::MissingField("legalName");
        assert_eq!(err.to_string(), "Missing required field: legalName");
    }

    #[test]
    fn test_api_error_variants() {
        let err = BuyerApiError::ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_intake_error_passes_validation_message_through() {
        let err = IntakeError::from(ValidationError::DuplicateEmail);
        assert_eq!(err.to_string(), "duplicate email");
        assert!(err.is_user_correctable());
    }

    #[test]
    fn test_intake_error_correctability() {
        assert!(IntakeError::from(SubmitError::NoContacts).is_user_correctable());
        assert!(IntakeError::from(BuyerApiError::Rejected("abn".into())).is_user_correctable());
        assert!(!IntakeError::from(BuyerApiError::Timeout).is_user_correctable());
    }
}
