// models/src/claims/attachment.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::claims::enums::MimeType;

/// Opaque reference to an uploaded blob. The intake core never reads file
/// contents; it tracks the handle the hosting environment gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileHandle(pub Uuid);

impl FileHandle {
    pub fn new() -> Self {
        FileHandle(Uuid::new_v4())
    }
}

impl Default for FileHandle {
    fn default() -> Self {
        FileHandle::new()
    }
}

/// A locally created preview resource (object URL) for a stored file.
/// Ownership: whoever holds the entry must release the preview through the
/// store that created it — exactly once, on removal, overwrite or teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewHandle {
    pub id: Uuid,
    pub url: String,
}

/// A file as offered by the user, before the registry has accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    pub filename: String,
    pub byte_size: u64,
    /// Raw MIME string from the environment; parsed against [`MimeType`].
    pub mime_type: String,
    pub handle: FileHandle,
}

impl FileUpload {
    pub fn new(filename: &str, byte_size: u64, mime_type: &str) -> Self {
        Self {
            filename: filename.to_string(),
            byte_size,
            mime_type: mime_type.to_string(),
            handle: FileHandle::new(),
        }
    }
}

/// An accepted file stored under a (section, field-label) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentEntry {
    pub id: Uuid,
    pub filename: String,
    pub byte_size: u64,
    pub mime_type: MimeType,
    pub file_handle: FileHandle,
    pub preview: PreviewHandle,
}
