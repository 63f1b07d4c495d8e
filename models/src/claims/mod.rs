// models/src/claims/mod.rs

pub mod attachment;
pub mod claim_draft;
pub mod contact;
pub mod enums;
pub mod saved_contact;
pub mod user;

pub use attachment::{AttachmentEntry, FileHandle, FileUpload, PreviewHandle};
pub use claim_draft::ClaimDraft;
pub use contact::ContactRecord;
pub use enums::{
    ClaimType, ContactRole, InitialType, Insurer, MimeType, Section, ServiceType, SignatureType,
};
pub use saved_contact::SavedContact;
pub use user::{AuthenticatedUser, UserRole};
