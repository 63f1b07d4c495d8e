// models/src/lib.rs

// Declare all top-level modules within the 'models' crate
pub mod errors;

// Declare the 'claims' sub-module
pub mod claims;

// Re-export common core types for convenience when other crates use 'models::*'
pub use claims::{
    AttachmentEntry, AuthenticatedUser, ClaimDraft, ClaimType, ContactRecord, ContactRole,
    FileHandle, FileUpload, InitialType, Insurer, MimeType, PreviewHandle, SavedContact, Section,
    ServiceType, SignatureType, UserRole,
};
pub use errors::{ClaimError, ClaimResult, FileRejection, FileRejectionReason, ValidationIssue};
