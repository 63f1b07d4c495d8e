// portal/src/auth.rs
use async_trait::async_trait;

use models::errors::ClaimResult;
use models::AuthenticatedUser;

/// Supplies the signed-in user. Read-only; the intake core uses it to seed
/// the "is current user" contact source.
#[async_trait]
pub trait AuthenticatedUserProvider: Send + Sync {
    async fn current_user(&self) -> ClaimResult<AuthenticatedUser>;
}

/// Fixed-user provider for tests and local development.
pub struct StaticUserProvider {
    user: AuthenticatedUser,
}

impl StaticUserProvider {
    pub fn new(user: AuthenticatedUser) -> Self {
        Self { user }
    }
}

#[async_trait]
impl AuthenticatedUserProvider for StaticUserProvider {
    async fn current_user(&self) -> ClaimResult<AuthenticatedUser> {
        Ok(self.user.clone())
    }
}
