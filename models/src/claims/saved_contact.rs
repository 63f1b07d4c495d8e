// models/src/claims/saved_contact.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::claims::enums::ContactRole;

/// A contact retained from an earlier claim, scoped to the user who filed it.
/// `roles_held` accumulates every role this contact has been used in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedContact {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub roles_held: Vec<ContactRole>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}

impl SavedContact {
    pub fn new(owner_user_id: Uuid, name: &str, email: &str, whatsapp: &str, role: ContactRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_user_id,
            name: name.to_string(),
            email: email.to_string(),
            whatsapp: whatsapp.to_string(),
            roles_held: vec![role],
            created_at: now,
            last_used_at: now,
        }
    }

    /// Records another use of this contact. Roles are kept unique.
    pub fn touch_role(&mut self, role: ContactRole) {
        if !self.roles_held.contains(&role) {
            self.roles_held.push(role);
        }
        self.last_used_at = Utc::now();
    }

    /// Case-insensitive substring match across name, email and whatsapp.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
            || self.whatsapp.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_substring_case_insensitively() {
        let contact = SavedContact::new(
            Uuid::new_v4(),
            "Maria Lopez",
            "maria@example.com",
            "+525512345678",
            ContactRole::Affected,
        );
        assert!(contact.matches("MARIA"));
        assert!(contact.matches("example.com"));
        assert!(contact.matches("5512"));
        assert!(!contact.matches("garcia"));
    }

    #[test]
    fn should_accumulate_roles_without_duplicates() {
        let mut contact = SavedContact::new(
            Uuid::new_v4(),
            "Maria Lopez",
            "maria@example.com",
            "",
            ContactRole::Affected,
        );
        contact.touch_role(ContactRole::Policyholder);
        contact.touch_role(ContactRole::Affected);
        assert_eq!(
            contact.roles_held,
            vec![ContactRole::Affected, ContactRole::Policyholder]
        );
    }
}
