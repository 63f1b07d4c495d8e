// claim_form/src/validation.rs
//! Pre-submission validation.
//!
//! Returns every violation at once, in a fixed evaluation order, so the
//! portal can render one combined message per category and tests can assert
//! on the full set.
use models::{ClaimType, ContactRole, InitialType, ValidationIssue};

use crate::form::ClaimForm;

pub fn validate(form: &ClaimForm) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let draft = &form.draft;
    let contacts = &form.contacts;

    // 1. The affected contact anchors the whole claim.
    if contacts.affected.name.is_empty() || contacts.affected.email.is_empty() {
        issues.push(ValidationIssue::AffectedContactIncomplete);
    }

    // 2. Populated phone numbers carry a "+" country code.
    for role in [
        ContactRole::Affected,
        ContactRole::Policyholder,
        ContactRole::AccountHolder,
    ] {
        if !contacts.record(role).whatsapp_format_ok() {
            issues.push(ValidationIssue::PhoneFormat(role));
        }
    }

    // 3. Required claim fields.
    if draft.policy_number.is_empty() {
        issues.push(ValidationIssue::RequiredField("policy_number".to_string()));
    }
    if draft.insurer.is_none() {
        issues.push(ValidationIssue::RequiredField("insurer".to_string()));
    }
    if draft.claim_type.is_none() {
        issues.push(ValidationIssue::RequiredField("claim_type".to_string()));
    }
    if draft.description.is_empty() {
        issues.push(ValidationIssue::RequiredField("description".to_string()));
    }

    // 4. Reimbursement-specific rules.
    if draft.claim_type == Some(ClaimType::Reimbursement) {
        let account_holder = &form.contacts.account_holder;
        let present = !account_holder.record.is_empty()
            || account_holder.is_same_as_affected
            || account_holder.is_current_user;
        if !present {
            issues.push(ValidationIssue::MissingAccountHolder);
        }
        if draft.initial_type == Some(InitialType::Complement)
            && draft.previous_claim_number.is_empty()
        {
            issues.push(ValidationIssue::MissingPreviousClaimNumber);
        }
    }

    issues
}
