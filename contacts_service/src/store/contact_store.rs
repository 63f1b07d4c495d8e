// contacts_service/src/store/contact_store.rs
//! Saved-contact store — keeps contacts a user has filed claims with so the
//! picker overlay can offer them again. Owner-scoped: a user only ever sees
//! contacts they saved themselves.
use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::{OnceCell, RwLock};
use uuid::Uuid;

use models::errors::{ClaimError, ClaimResult};
use models::{ContactRecord, ContactRole, SavedContact};

// Global singleton
pub static CONTACT_SERVICE: OnceCell<Arc<SavedContactService>> = OnceCell::const_new();

#[derive(Clone, Default)]
pub struct SavedContactService {
    contacts: Arc<RwLock<HashMap<Uuid, SavedContact>>>,
}

impl SavedContactService {
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Factory method for the global singleton.
    ///
    /// Usage: `SavedContactService::global_init().await?`
    pub async fn global_init() -> Result<(), &'static str> {
        let service = Arc::new(Self::new());
        CONTACT_SERVICE
            .set(service)
            .map_err(|_| "contact service already initialized")?;
        info!("SavedContactService initialized");
        Ok(())
    }

    pub fn global() -> Option<Arc<SavedContactService>> {
        CONTACT_SERVICE.get().cloned()
    }

    /// Persists one contact from a submitted claim. If the owner already
    /// saved a contact with the same email, the existing record absorbs the
    /// new role and its last-used timestamp moves forward; otherwise a new
    /// record is created.
    pub async fn save_from_submission(
        &self,
        owner_user_id: Uuid,
        contact: &ContactRecord,
        role: ContactRole,
    ) -> ClaimResult<Uuid> {
        if contact.name.is_empty() && contact.email.is_empty() {
            return Err(ClaimError::ContactStore(
                "refusing to save an empty contact".to_string(),
            ));
        }
        let mut contacts = self.contacts.write().await;
        if let Some(existing) = contacts.values_mut().find(|c| {
            c.owner_user_id == owner_user_id && !c.email.is_empty() && c.email == contact.email
        }) {
            existing.touch_role(role);
            existing.name = contact.name.clone();
            existing.whatsapp = contact.whatsapp.clone();
            debug!("updated saved contact {} for owner {}", existing.id, owner_user_id);
            return Ok(existing.id);
        }
        let saved = SavedContact::new(
            owner_user_id,
            &contact.name,
            &contact.email,
            &contact.whatsapp,
            role,
        );
        let id = saved.id;
        contacts.insert(id, saved);
        info!("saved new contact {} for owner {}", id, owner_user_id);
        Ok(id)
    }

    /// Every contact the owner has saved, most recently used first.
    pub async fn list_for_owner(&self, owner_user_id: Uuid) -> Vec<SavedContact> {
        let contacts = self.contacts.read().await;
        let mut owned: Vec<SavedContact> = contacts
            .values()
            .filter(|c| c.owner_user_id == owner_user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.last_used_at.cmp(&a.last_used_at));
        owned
    }

    /// Case-insensitive substring search over name, email and whatsapp,
    /// still scoped to the owner. An empty query lists everything.
    pub async fn search(&self, owner_user_id: Uuid, query: &str) -> Vec<SavedContact> {
        let all = self.list_for_owner(owner_user_id).await;
        if query.is_empty() {
            return all;
        }
        all.into_iter().filter(|c| c.matches(query)).collect()
    }

    pub async fn get(&self, id: Uuid) -> ClaimResult<SavedContact> {
        let contacts = self.contacts.read().await;
        contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| ClaimError::NotFound(format!("saved contact {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, whatsapp: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            email: email.to_string(),
            whatsapp: whatsapp.to_string(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn should_scope_listing_to_the_owner() {
        let service = SavedContactService::new();
        let owner_a = Uuid::new_v4();
        let owner_b = Uuid::new_v4();
        service
            .save_from_submission(owner_a, &contact("Maria", "maria@example.com", ""), ContactRole::Affected)
            .await
            .unwrap();
        service
            .save_from_submission(owner_b, &contact("Pedro", "pedro@example.com", ""), ContactRole::Affected)
            .await
            .unwrap();

        let listed = service.list_for_owner(owner_a).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Maria");
    }

    #[tokio::test]
    async fn should_merge_roles_on_repeat_save_of_same_email() {
        let service = SavedContactService::new();
        let owner = Uuid::new_v4();
        let id_first = service
            .save_from_submission(owner, &contact("Maria", "maria@example.com", ""), ContactRole::Affected)
            .await
            .unwrap();
        let id_second = service
            .save_from_submission(
                owner,
                &contact("Maria Lopez", "maria@example.com", "+5255"),
                ContactRole::Policyholder,
            )
            .await
            .unwrap();

        assert_eq!(id_first, id_second);
        let saved = service.get(id_first).await.unwrap();
        assert_eq!(saved.roles_held, vec![ContactRole::Affected, ContactRole::Policyholder]);
        assert_eq!(saved.name, "Maria Lopez");
    }

    #[tokio::test]
    async fn should_search_case_insensitively_within_owner() {
        let service = SavedContactService::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        service
            .save_from_submission(owner, &contact("Maria Lopez", "maria@example.com", "+525512345678"), ContactRole::Affected)
            .await
            .unwrap();
        service
            .save_from_submission(stranger, &contact("Maria Garcia", "mgarcia@example.com", ""), ContactRole::Affected)
            .await
            .unwrap();

        let hits = service.search(owner, "MARIA").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "maria@example.com");

        let by_phone = service.search(owner, "5512").await;
        assert_eq!(by_phone.len(), 1);

        assert!(service.search(owner, "garcia").await.is_empty());
    }

    #[tokio::test]
    async fn should_refuse_empty_contacts() {
        let service = SavedContactService::new();
        let result = service
            .save_from_submission(Uuid::new_v4(), &contact("", "", ""), ContactRole::Affected)
            .await;
        assert!(matches!(result, Err(ClaimError::ContactStore(_))));
    }
}
