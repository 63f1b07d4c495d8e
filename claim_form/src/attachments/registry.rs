// claim_form/src/attachments/registry.rs
//! Uploaded-file registry keyed by (section, field label).
//!
//! Every accepted file owns a preview resource created through the injected
//! [`PreviewStore`]. There is no reference counting: the registry releases
//! each preview exactly once — on explicit removal, on overwrite, or when the
//! registry itself is dropped.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use uuid::Uuid;

use models::{
    AttachmentEntry, FileHandle, FileRejection, FileRejectionReason, FileUpload, MimeType,
    PreviewHandle, Section,
};

/// 10 MiB per claim document.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;
/// 2 MiB for avatar images.
pub const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;
/// At most five files per upload field.
pub const MAX_FILES_PER_FIELD: usize = 5;

/// Creates and releases locally owned preview resources (object URLs in the
/// original environment).
pub trait PreviewStore: Send + Sync {
    fn create_preview(&self, handle: FileHandle) -> PreviewHandle;
    fn release_preview(&self, preview: &PreviewHandle);
}

/// In-memory preview store. Tracks live previews so releases are observable
/// and a double release can be detected in tests.
#[derive(Default)]
pub struct LocalPreviewStore {
    live: Mutex<HashMap<Uuid, FileHandle>>,
    released: Mutex<Vec<Uuid>>,
}

impl LocalPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().map(|live| live.len()).unwrap_or(0)
    }

    /// How many times a given preview has been released. Anything above one
    /// is a caller bug.
    pub fn release_count(&self, preview_id: Uuid) -> usize {
        self.released
            .lock()
            .map(|r| r.iter().filter(|id| **id == preview_id).count())
            .unwrap_or(0)
    }
}

impl PreviewStore for LocalPreviewStore {
    fn create_preview(&self, handle: FileHandle) -> PreviewHandle {
        let id = Uuid::new_v4();
        if let Ok(mut live) = self.live.lock() {
            live.insert(id, handle);
        }
        PreviewHandle {
            id,
            url: format!("preview://{}", id),
        }
    }

    fn release_preview(&self, preview: &PreviewHandle) {
        if let Ok(mut live) = self.live.lock() {
            if live.remove(&preview.id).is_none() {
                warn!("preview {} released more than once", preview.id);
            }
        }
        if let Ok(mut released) = self.released.lock() {
            released.push(preview.id);
        }
    }
}

/// Result of offering one file to [`AttachmentRegistry::add_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Accepted(Uuid),
    Rejected(FileRejection),
}

pub struct AttachmentRegistry {
    entries: HashMap<(Section, String), Vec<AttachmentEntry>>,
    previews: Arc<dyn PreviewStore>,
}

impl AttachmentRegistry {
    pub fn new(previews: Arc<dyn PreviewStore>) -> Self {
        Self {
            entries: HashMap::new(),
            previews,
        }
    }

    pub fn files(&self, section: Section, field_label: &str) -> &[AttachmentEntry] {
        self.entries
            .get(&(section, field_label.to_string()))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_files(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    fn screen(upload: &FileUpload, limit: u64) -> Result<MimeType, FileRejectionReason> {
        let mime = MimeType::parse(&upload.mime_type)
            .ok_or_else(|| FileRejectionReason::UnsupportedType(upload.mime_type.clone()))?;
        if upload.byte_size > limit {
            return Err(FileRejectionReason::TooLarge {
                byte_size: upload.byte_size,
                limit,
            });
        }
        Ok(mime)
    }

    /// Offers a batch of files to one field. Each file is screened on its
    /// own; a rejection never aborts the rest of the batch. Once the field
    /// holds [`MAX_FILES_PER_FIELD`] files the tail of the batch is rejected
    /// in the order offered.
    pub fn add_files(
        &mut self,
        section: Section,
        field_label: &str,
        uploads: Vec<FileUpload>,
    ) -> Vec<FileOutcome> {
        let mut outcomes = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let stored = self
                .entries
                .entry((section, field_label.to_string()))
                .or_default();
            if stored.len() >= MAX_FILES_PER_FIELD {
                outcomes.push(FileOutcome::Rejected(FileRejection {
                    filename: upload.filename,
                    reason: FileRejectionReason::FieldFull {
                        limit: MAX_FILES_PER_FIELD,
                    },
                }));
                continue;
            }
            match Self::screen(&upload, MAX_DOCUMENT_BYTES) {
                Ok(mime) => {
                    let preview = self.previews.create_preview(upload.handle);
                    let entry = AttachmentEntry {
                        id: Uuid::new_v4(),
                        filename: upload.filename,
                        byte_size: upload.byte_size,
                        mime_type: mime,
                        file_handle: upload.handle,
                        preview,
                    };
                    debug!(
                        "stored {} under {:?}/{} ({} bytes)",
                        entry.filename, section, field_label, entry.byte_size
                    );
                    let id = entry.id;
                    stored.push(entry);
                    outcomes.push(FileOutcome::Accepted(id));
                }
                Err(reason) => outcomes.push(FileOutcome::Rejected(FileRejection {
                    filename: upload.filename,
                    reason,
                })),
            }
        }
        outcomes
    }

    /// Screens an avatar image against the tighter 2 MiB limit and hands
    /// back an owned preview. The caller releases the previous avatar
    /// preview, if any, through [`AttachmentRegistry::release_preview`].
    pub fn accept_avatar(&self, upload: &FileUpload) -> Result<PreviewHandle, FileRejection> {
        match Self::screen(upload, MAX_AVATAR_BYTES) {
            Ok(MimeType::Pdf) => Err(FileRejection {
                filename: upload.filename.clone(),
                reason: FileRejectionReason::UnsupportedType(upload.mime_type.clone()),
            }),
            Ok(_) => Ok(self.previews.create_preview(upload.handle)),
            Err(reason) => Err(FileRejection {
                filename: upload.filename.clone(),
                reason,
            }),
        }
    }

    /// Releases a preview the registry handed out but does not track itself
    /// (avatar previews live on the contact record).
    pub fn release_preview(&self, preview: &PreviewHandle) {
        self.previews.release_preview(preview);
    }

    /// Everything currently stored, ordered by section then field label.
    /// This is what the submission sink receives.
    pub fn manifest(&self) -> Vec<(Section, String, AttachmentEntry)> {
        let mut out = Vec::with_capacity(self.total_files());
        for ((section, field_label), stored) in &self.entries {
            for entry in stored {
                out.push((*section, field_label.clone(), entry.clone()));
            }
        }
        out.sort_by(|a, b| (a.0.number(), &a.1).cmp(&(b.0.number(), &b.1)));
        out
    }

    /// Removes one entry and releases its preview. Removing an id that is no
    /// longer present (a stale reference after a repeated click) is a no-op,
    /// so the preview is never released twice.
    pub fn remove_file(&mut self, section: Section, id: Uuid) {
        for ((entry_section, _), stored) in self.entries.iter_mut() {
            if *entry_section != section {
                continue;
            }
            if let Some(pos) = stored.iter().position(|e| e.id == id) {
                let entry = stored.remove(pos);
                self.previews.release_preview(&entry.preview);
                debug!("removed {} from {:?}", entry.filename, section);
                return;
            }
        }
    }

    /// Drops every file in one field, releasing each preview. Used when a
    /// field is re-uploaded wholesale.
    pub fn clear_field(&mut self, section: Section, field_label: &str) {
        if let Some(stored) = self.entries.remove(&(section, field_label.to_string())) {
            for entry in &stored {
                self.previews.release_preview(&entry.preview);
            }
        }
    }
}

impl Drop for AttachmentRegistry {
    // Teardown path: every outstanding preview is released exactly once.
    fn drop(&mut self) {
        for stored in self.entries.values() {
            for entry in stored {
                self.previews.release_preview(&entry.preview);
            }
        }
        self.entries.clear();
    }
}
