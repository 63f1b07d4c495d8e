// claim_form/src/lib.rs
//! Claim intake form engine: the document-requirement rule table, the
//! contact resolution overlay, the attachment registry and draft validation,
//! tied together by [`form::ClaimForm`].

pub mod attachments;
pub mod contacts;
pub mod form;
pub mod requirements;
pub mod validation;

pub use attachments::{AttachmentRegistry, FileOutcome, LocalPreviewStore, PreviewStore};
pub use contacts::{ContactField, ContactOverlay};
pub use form::ClaimForm;
pub use requirements::{derive_requirements, DocumentRequirement, RequirementSections, SectionOne};
pub use validation::validate;
