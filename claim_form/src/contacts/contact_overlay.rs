// claim_form/src/contacts/contact_overlay.rs
//! Contact resolution for the three claim roles.
//!
//! The policyholder and account-holder slots can be filled from one of three
//! mutually exclusive sources: manual entry, a snapshot of the affected
//! contact, or a snapshot of the authenticated user. Activating a derived
//! source copies the record wholesale at that instant — later edits to the
//! source do not propagate until the flag is toggled again.
use log::debug;
use serde::{Deserialize, Serialize};

use models::{
    AuthenticatedUser, ClaimError, ClaimResult, ContactRecord, ContactRole, SavedContact,
};

/// Editable contact fields exposed to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

/// One derived contact slot (policyholder or account holder): the record plus
/// its source flags. At most one flag is true at any time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSlot {
    pub record: ContactRecord,
    pub is_same_as_affected: bool,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactOverlay {
    pub affected: ContactRecord,
    pub policyholder: RoleSlot,
    pub account_holder: RoleSlot,
}

impl ContactOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, role: ContactRole) -> &ContactRecord {
        match role {
            ContactRole::Affected => &self.affected,
            ContactRole::Policyholder => &self.policyholder.record,
            ContactRole::AccountHolder => &self.account_holder.record,
        }
    }

    /// Mutable record access for avatar wiring. Does not touch source flags.
    pub(crate) fn record_mut(&mut self, role: ContactRole) -> &mut ContactRecord {
        match role {
            ContactRole::Affected => &mut self.affected,
            ContactRole::Policyholder => &mut self.policyholder.record,
            ContactRole::AccountHolder => &mut self.account_holder.record,
        }
    }

    fn slot_mut(&mut self, role: ContactRole) -> ClaimResult<&mut RoleSlot> {
        match role {
            ContactRole::Affected => Err(ClaimError::InvalidData(
                "the affected contact has no derived source".to_string(),
            )),
            ContactRole::Policyholder => Ok(&mut self.policyholder),
            ContactRole::AccountHolder => Ok(&mut self.account_holder),
        }
    }

    /// Manual edit of one field. For derived roles this drops back to manual
    /// sourcing and clears both flags.
    pub fn set_manual(&mut self, role: ContactRole, field: ContactField, value: &str) {
        let record = match role {
            ContactRole::Affected => &mut self.affected,
            ContactRole::Policyholder => {
                self.policyholder.is_same_as_affected = false;
                self.policyholder.is_current_user = false;
                &mut self.policyholder.record
            }
            ContactRole::AccountHolder => {
                self.account_holder.is_same_as_affected = false;
                self.account_holder.is_current_user = false;
                &mut self.account_holder.record
            }
        };
        match field {
            ContactField::Name => record.name = value.to_string(),
            ContactField::Email => record.email = value.to_string(),
            ContactField::Whatsapp => record.whatsapp = value.to_string(),
        }
    }

    /// Copies the affected contact into the role when activated. Clearing the
    /// flag keeps the copied values but returns the slot to manual sourcing.
    pub fn set_same_as_affected(&mut self, role: ContactRole, active: bool) -> ClaimResult<()> {
        let snapshot = self.affected.clone();
        let slot = self.slot_mut(role)?;
        slot.is_same_as_affected = active;
        if active {
            slot.is_current_user = false;
            slot.record = snapshot;
            // Preview resources are single-owner: the copy never takes the
            // affected contact's avatar handle.
            slot.record.avatar = None;
            debug!("contact slot {} copied from affected", role);
        }
        Ok(())
    }

    /// Copies the authenticated user into the role when activated.
    pub fn set_is_current_user(
        &mut self,
        role: ContactRole,
        active: bool,
        user: &AuthenticatedUser,
    ) -> ClaimResult<()> {
        let slot = self.slot_mut(role)?;
        slot.is_current_user = active;
        if active {
            slot.is_same_as_affected = false;
            slot.record = ContactRecord::from_user(user);
            debug!("contact slot {} seeded from user {}", role, user.id);
        }
        Ok(())
    }

    /// Picking from the saved-contact overlay is equivalent to a manual set.
    pub fn apply_saved_contact(&mut self, role: ContactRole, saved: &SavedContact) {
        match role {
            ContactRole::Affected => self.affected = ContactRecord::from_saved(saved),
            ContactRole::Policyholder | ContactRole::AccountHolder => {
                // slot_mut only fails for Affected, handled above
                if let Ok(slot) = self.slot_mut(role) {
                    slot.is_same_as_affected = false;
                    slot.is_current_user = false;
                    slot.record = ContactRecord::from_saved(saved);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::UserRole;
    use uuid::Uuid;

    fn user() -> AuthenticatedUser {
        let mut user = AuthenticatedUser::new("Ana Torres", "ana@example.com", UserRole::Client);
        user.whatsapp = Some("+521112223334".to_string());
        user
    }

    #[test]
    fn should_copy_a_snapshot_not_a_live_binding() {
        let mut overlay = ContactOverlay::new();
        overlay.set_manual(ContactRole::Affected, ContactField::Name, "Maria Lopez");
        overlay.set_manual(ContactRole::Affected, ContactField::Email, "maria@example.com");

        overlay
            .set_same_as_affected(ContactRole::Policyholder, true)
            .unwrap();
        assert_eq!(overlay.policyholder.record.name, "Maria Lopez");

        // Later edits to the affected contact must not propagate.
        overlay.set_manual(ContactRole::Affected, ContactField::Name, "Maria Garcia");
        assert_eq!(overlay.policyholder.record.name, "Maria Lopez");

        // Re-toggling refreshes the copy.
        overlay
            .set_same_as_affected(ContactRole::Policyholder, true)
            .unwrap();
        assert_eq!(overlay.policyholder.record.name, "Maria Garcia");
    }

    #[test]
    fn should_keep_source_flags_mutually_exclusive() {
        let mut overlay = ContactOverlay::new();
        overlay
            .set_same_as_affected(ContactRole::AccountHolder, true)
            .unwrap();
        overlay
            .set_is_current_user(ContactRole::AccountHolder, true, &user())
            .unwrap();
        assert!(overlay.account_holder.is_current_user);
        assert!(!overlay.account_holder.is_same_as_affected);

        overlay
            .set_same_as_affected(ContactRole::AccountHolder, true)
            .unwrap();
        assert!(overlay.account_holder.is_same_as_affected);
        assert!(!overlay.account_holder.is_current_user);
    }

    #[test]
    fn should_seed_record_from_current_user() {
        let mut overlay = ContactOverlay::new();
        overlay
            .set_is_current_user(ContactRole::Policyholder, true, &user())
            .unwrap();
        assert_eq!(overlay.policyholder.record.name, "Ana Torres");
        assert_eq!(overlay.policyholder.record.whatsapp, "+521112223334");
    }

    #[test]
    fn should_clear_flags_on_manual_edit() {
        let mut overlay = ContactOverlay::new();
        overlay
            .set_is_current_user(ContactRole::Policyholder, true, &user())
            .unwrap();
        overlay.set_manual(ContactRole::Policyholder, ContactField::Email, "other@example.com");
        assert!(!overlay.policyholder.is_current_user);
        assert!(!overlay.policyholder.is_same_as_affected);
        // The other fields keep their copied values.
        assert_eq!(overlay.policyholder.record.name, "Ana Torres");
    }

    #[test]
    fn should_clear_flags_when_saved_contact_is_picked() {
        let mut overlay = ContactOverlay::new();
        overlay
            .set_same_as_affected(ContactRole::Policyholder, true)
            .unwrap();

        let saved = SavedContact::new(
            Uuid::new_v4(),
            "Pedro Ruiz",
            "pedro@example.com",
            "+525512345678",
            ContactRole::Policyholder,
        );
        overlay.apply_saved_contact(ContactRole::Policyholder, &saved);
        assert_eq!(overlay.policyholder.record.name, "Pedro Ruiz");
        assert!(!overlay.policyholder.is_same_as_affected);
        assert!(!overlay.policyholder.is_current_user);
    }

    #[test]
    fn should_reject_source_flags_on_affected() {
        let mut overlay = ContactOverlay::new();
        assert!(overlay.set_same_as_affected(ContactRole::Affected, true).is_err());
        assert!(overlay
            .set_is_current_user(ContactRole::Affected, true, &user())
            .is_err());
    }
}
