// models/src/claims/user.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Admin,
    SuperAdmin,
}

/// The signed-in user, as supplied by the authentication collaborator.
/// Read-only here; used to seed the "is current user" contact source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub whatsapp: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn new(name: &str, email: &str, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            whatsapp: None,
            avatar_url: None,
            role,
        }
    }
}
