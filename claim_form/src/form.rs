// claim_form/src/form.rs
//! The form-state container: one claim draft, the contact overlay and the
//! attachment registry, mutated only through discrete operations.
use std::sync::Arc;

use models::{
    AuthenticatedUser, ClaimDraft, ClaimResult, ClaimType, ContactRole, FileRejection, FileUpload,
    SavedContact, ValidationIssue,
};

use crate::attachments::{AttachmentRegistry, PreviewStore};
use crate::contacts::ContactOverlay;
use crate::requirements::{derive_requirements, RequirementSections};
use crate::validation;

pub struct ClaimForm {
    pub draft: ClaimDraft,
    pub contacts: ContactOverlay,
    pub attachments: AttachmentRegistry,
    /// When set, submission persists the three contacts for reuse.
    pub save_contacts: bool,
}

impl ClaimForm {
    pub fn new(previews: Arc<dyn PreviewStore>) -> Self {
        Self {
            draft: ClaimDraft::new(),
            contacts: ContactOverlay::new(),
            attachments: AttachmentRegistry::new(previews),
            save_contacts: false,
        }
    }

    pub fn set_claim_type(&mut self, claim_type: Option<ClaimType>) {
        self.draft.set_claim_type(claim_type);
    }

    /// Attaches an avatar to one contact. The previous avatar preview, if
    /// any, is released before the new one takes its place.
    pub fn set_avatar(
        &mut self,
        role: ContactRole,
        upload: &FileUpload,
    ) -> Result<(), FileRejection> {
        let preview = self.attachments.accept_avatar(upload)?;
        let replaced = self.contacts.record_mut(role).avatar.replace(preview);
        if let Some(old) = replaced {
            self.attachments.release_preview(&old);
        }
        Ok(())
    }

    /// Drops one contact's avatar and releases its preview. Calling this
    /// again for an already-cleared role is a no-op.
    pub fn clear_avatar(&mut self, role: ContactRole) {
        if let Some(old) = self.contacts.record_mut(role).avatar.take() {
            self.attachments.release_preview(&old);
        }
    }

    /// [`ContactOverlay::set_same_as_affected`], releasing the avatar of the
    /// record the copy overwrites.
    pub fn set_same_as_affected(&mut self, role: ContactRole, active: bool) -> ClaimResult<()> {
        if active {
            self.clear_avatar(role);
        }
        self.contacts.set_same_as_affected(role, active)
    }

    /// [`ContactOverlay::set_is_current_user`], releasing the avatar of the
    /// record the copy overwrites.
    pub fn set_is_current_user(
        &mut self,
        role: ContactRole,
        active: bool,
        user: &AuthenticatedUser,
    ) -> ClaimResult<()> {
        if active {
            self.clear_avatar(role);
        }
        self.contacts.set_is_current_user(role, active, user)
    }

    /// [`ContactOverlay::apply_saved_contact`], releasing the avatar of the
    /// record the pick overwrites.
    pub fn apply_saved_contact(&mut self, role: ContactRole, saved: &SavedContact) {
        self.clear_avatar(role);
        self.contacts.apply_saved_contact(role, saved);
    }

    /// Current document checklist for the draft as it stands.
    pub fn requirements(&self) -> RequirementSections {
        derive_requirements(&self.draft, self.contacts.account_holder.is_same_as_affected)
    }

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::validate(self)
    }
}

impl Drop for ClaimForm {
    // Teardown path for contact avatars; document previews are handled by
    // the registry's own drop.
    fn drop(&mut self) {
        for role in [
            ContactRole::Affected,
            ContactRole::Policyholder,
            ContactRole::AccountHolder,
        ] {
            self.clear_avatar(role);
        }
    }
}
