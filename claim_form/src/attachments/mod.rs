// claim_form/src/attachments/mod.rs

pub mod registry;

pub use registry::{AttachmentRegistry, FileOutcome, LocalPreviewStore, PreviewStore};
