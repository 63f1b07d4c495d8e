// models/src/claims/contact.rs
use serde::{Deserialize, Serialize};

use crate::claims::attachment::PreviewHandle;
use crate::claims::saved_contact::SavedContact;
use crate::claims::user::AuthenticatedUser;

/// One contact slot on the claim form. The same record shape is used for the
/// affected party, the policyholder and the bank-account holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    /// Must start with a "+" country code when non-empty.
    pub whatsapp: String,
    /// Locally owned avatar preview; released when replaced or on teardown.
    pub avatar: Option<PreviewHandle>,
}

impl ContactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.whatsapp.is_empty()
    }

    /// Whatsapp numbers carry an explicit country code. Empty is fine — the
    /// field is optional — but a populated value has to start with "+".
    pub fn whatsapp_format_ok(&self) -> bool {
        self.whatsapp.is_empty() || self.whatsapp.starts_with('+')
    }

    /// Snapshot of the authenticated user, taken at toggle time.
    pub fn from_user(user: &AuthenticatedUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            whatsapp: user.whatsapp.clone().unwrap_or_default(),
            avatar: None,
        }
    }

    /// Snapshot of a previously saved contact.
    pub fn from_saved(saved: &SavedContact) -> Self {
        Self {
            name: saved.name.clone(),
            email: saved.email.clone(),
            whatsapp: saved.whatsapp.clone(),
            avatar: None,
        }
    }
}
