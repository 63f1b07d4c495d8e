// portal/src/context.rs
use std::sync::Arc;

use claim_form::{ClaimForm, LocalPreviewStore, PreviewStore};
use contacts_service::SavedContactService;
use models::errors::ClaimResult;
use models::AuthenticatedUser;

use crate::auth::AuthenticatedUserProvider;
use crate::config::PortalConfig;
use crate::notifications::NotificationQueue;
use crate::submission::{ClaimSubmissionSink, SubmissionService};

/// Wires the intake core together for one portal session. Collaborators are
/// injected once here instead of living as ambient module state.
pub struct PortalContext {
    pub config: PortalConfig,
    user_provider: Arc<dyn AuthenticatedUserProvider>,
    previews: Arc<dyn PreviewStore>,
    pub contacts: Arc<SavedContactService>,
    pub notifications: Arc<NotificationQueue>,
    pub submission: Arc<SubmissionService>,
}

impl PortalContext {
    pub fn new(
        config: PortalConfig,
        user_provider: Arc<dyn AuthenticatedUserProvider>,
        sink: Arc<dyn ClaimSubmissionSink>,
    ) -> Self {
        let contacts = Arc::new(SavedContactService::new());
        let notifications = Arc::new(NotificationQueue::new());
        let submission = Arc::new(SubmissionService::new(
            sink,
            contacts.clone(),
            notifications.clone(),
        ));
        Self {
            config,
            user_provider,
            previews: Arc::new(LocalPreviewStore::new()),
            contacts,
            notifications,
            submission,
        }
    }

    pub async fn current_user(&self) -> ClaimResult<AuthenticatedUser> {
        self.user_provider.current_user().await
    }

    /// A fresh claim form sharing the session's preview store.
    pub fn new_form(&self) -> ClaimForm {
        ClaimForm::new(self.previews.clone())
    }
}
