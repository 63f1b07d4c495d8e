// models/src/errors.rs
use anyhow::Error as AnyhowError;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
pub use thiserror::Error;

use crate::claims::ContactRole;

#[derive(Debug, Serialize, Deserialize, Error, Clone, PartialEq)]
pub enum ClaimError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<ValidationIssue>),
    #[error("File rejected: {0}")]
    FileRejected(FileRejection),
    #[error("Submission failed: {0}")]
    Submission(String),
    #[error("A submission is already in flight")]
    SubmissionInFlight,
    #[error("Contact store error: {0}")]
    ContactStore(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data provided: {0}")]
    InvalidData(String),
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("An internal error occurred: {0}")]
    InternalError(String),
}

pub type ClaimResult<T> = Result<T, ClaimError>;

// Implement the From trait for &str
impl From<&str> for ClaimError {
    fn from(error: &str) -> Self {
        ClaimError::InvalidData(error.to_string())
    }
}

// Implement From for serde_json::Error
impl From<SerdeJsonError> for ClaimError {
    fn from(err: SerdeJsonError) -> Self {
        ClaimError::Serialization(format!("JSON serialization error: {}", err))
    }
}

// Implement From for anyhow::Error
impl From<AnyhowError> for ClaimError {
    fn from(err: AnyhowError) -> Self {
        ClaimError::InternalError(format!("Underlying operation failed: {}", err))
    }
}

impl From<Vec<ValidationIssue>> for ClaimError {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        ClaimError::Validation(issues)
    }
}

/// One violation found while validating a claim draft before submission.
/// Submission reports every issue at once rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// Affected contact is missing its name or email.
    AffectedContactIncomplete,
    /// A populated whatsapp number does not start with a "+" country code.
    PhoneFormat(ContactRole),
    /// A required claim field is empty (policy_number, insurer, claim_type, description).
    RequiredField(String),
    /// Reimbursement claims need an account-holder contact.
    MissingAccountHolder,
    /// Complement reimbursements need the previous claim number.
    MissingPreviousClaimNumber,
}

impl ValidationIssue {
    /// User-facing message category, matching how the portal groups alerts.
    pub fn category(&self) -> &'static str {
        match self {
            ValidationIssue::AffectedContactIncomplete => "contact",
            ValidationIssue::PhoneFormat(_) => "phone_format",
            ValidationIssue::RequiredField(_) => "required_field",
            ValidationIssue::MissingAccountHolder
            | ValidationIssue::MissingPreviousClaimNumber => "reimbursement",
        }
    }
}

/// Per-file rejection from the attachment registry. Rejections never abort
/// the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{filename}: {reason}")]
pub struct FileRejection {
    pub filename: String,
    pub reason: FileRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum FileRejectionReason {
    #[error("unsupported file type '{0}' (accepted: pdf, png, jpeg)")]
    UnsupportedType(String),
    #[error("file is {byte_size} bytes, limit is {limit}")]
    TooLarge { byte_size: u64, limit: u64 },
    #[error("field already holds the maximum of {limit} files")]
    FieldFull { limit: usize },
}
