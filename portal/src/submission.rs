// portal/src/submission.rs
//! Claim submission: validate, optionally persist contacts, hand the claim
//! to the external sink. One submission at a time; a sink failure surfaces
//! as a dismissible message and leaves the form untouched for retry.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info, warn};
use uuid::Uuid;

use claim_form::ClaimForm;
use contacts_service::SavedContactService;
use models::errors::{ClaimError, ClaimResult};
use models::{
    AttachmentEntry, AuthenticatedUser, ClaimDraft, ClaimType, ContactRecord, ContactRole, Section,
};

use crate::notifications::{NotificationQueue, Severity};

/// Everything the sink receives for one claim.
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    pub draft: ClaimDraft,
    pub affected: ContactRecord,
    pub policyholder: ContactRecord,
    /// Present only for reimbursement claims.
    pub account_holder: Option<ContactRecord>,
    pub documents: Vec<(Section, String, AttachmentEntry)>,
}

/// External claim sink. Single attempt per call; there is no retry contract —
/// on failure the user resubmits manually.
#[async_trait]
pub trait ClaimSubmissionSink: Send + Sync {
    async fn submit_claim(&self, submission: ClaimSubmission) -> ClaimResult<Uuid>;
}

pub struct SubmissionService {
    sink: Arc<dyn ClaimSubmissionSink>,
    contacts: Arc<SavedContactService>,
    notifications: Arc<NotificationQueue>,
    in_flight: AtomicBool,
}

impl SubmissionService {
    pub fn new(
        sink: Arc<dyn ClaimSubmissionSink>,
        contacts: Arc<SavedContactService>,
        notifications: Arc<NotificationQueue>,
    ) -> Self {
        Self {
            sink,
            contacts,
            notifications,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submits the form on behalf of `user`.
    ///
    /// While a submission is pending any further attempt returns
    /// [`ClaimError::SubmissionInFlight`]; the portal disables the submit
    /// control off this state, so a duplicate cannot land by construction.
    pub async fn submit(&self, form: &ClaimForm, user: &AuthenticatedUser) -> ClaimResult<Uuid> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!("duplicate submit attempt while a submission is in flight");
            return Err(ClaimError::SubmissionInFlight);
        }
        let result = self.submit_inner(form, user).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self, form: &ClaimForm, user: &AuthenticatedUser) -> ClaimResult<Uuid> {
        let issues = form.validate();
        if !issues.is_empty() {
            return Err(ClaimError::Validation(issues));
        }

        if form.save_contacts {
            self.persist_contacts(form, user).await?;
        }

        let is_reimbursement = form.draft.claim_type == Some(ClaimType::Reimbursement);
        let submission = ClaimSubmission {
            draft: form.draft.clone(),
            affected: form.contacts.affected.clone(),
            policyholder: form.contacts.policyholder.record.clone(),
            account_holder: is_reimbursement
                .then(|| form.contacts.account_holder.record.clone()),
            documents: form.attachments.manifest(),
        };

        match self.sink.submit_claim(submission).await {
            Ok(claim_id) => {
                info!("claim {} submitted for user {}", claim_id, user.id);
                self.notifications
                    .push(Severity::Success, "Claim submitted successfully");
                Ok(claim_id)
            }
            Err(err) => {
                error!("claim submission failed: {}", err);
                let reason = match err {
                    ClaimError::Submission(reason) => reason,
                    other => other.to_string(),
                };
                self.notifications.push(
                    Severity::Error,
                    &format!("Claim submission failed: {}", reason),
                );
                Err(ClaimError::Submission(reason))
            }
        }
    }

    async fn persist_contacts(&self, form: &ClaimForm, user: &AuthenticatedUser) -> ClaimResult<()> {
        self.contacts
            .save_from_submission(user.id, &form.contacts.affected, ContactRole::Affected)
            .await?;
        if !form.contacts.policyholder.record.is_empty() {
            self.contacts
                .save_from_submission(
                    user.id,
                    &form.contacts.policyholder.record,
                    ContactRole::Policyholder,
                )
                .await?;
        }
        if form.draft.claim_type == Some(ClaimType::Reimbursement)
            && !form.contacts.account_holder.record.is_empty()
        {
            self.contacts
                .save_from_submission(
                    user.id,
                    &form.contacts.account_holder.record,
                    ContactRole::AccountHolder,
                )
                .await?;
        }
        Ok(())
    }
}
