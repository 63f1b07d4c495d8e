// models/src/claims/claim_draft.rs
use serde::{Deserialize, Serialize};

use crate::claims::enums::{ClaimType, InitialType, Insurer, ServiceType, SignatureType};
use crate::errors::{ClaimError, ClaimResult};

/// An in-progress claim as captured by the intake form.
///
/// `service_types` keeps set semantics with insertion order preserved, so the
/// derived document checklist is stable for a given sequence of toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub policy_number: String,
    pub insurer: Option<Insurer>,
    pub claim_type: Option<ClaimType>,
    pub initial_type: Option<InitialType>,
    // Required iff initial_type is Complement
    pub previous_claim_number: String,
    pub description: String,
    pub service_types: Vec<ServiceType>,
    // Only meaningful while service_types contains Surgery
    pub is_trauma_orthopedic_surgery: bool,
    #[serde(default)]
    pub signature_type: SignatureType,
}

impl ClaimDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changing the claim type invalidates everything that depends on it:
    /// selected services, the trauma flag, and the reimbursement-only
    /// initial-type / previous-claim fields are all cleared.
    pub fn set_claim_type(&mut self, claim_type: Option<ClaimType>) {
        self.claim_type = claim_type;
        self.service_types.clear();
        self.is_trauma_orthopedic_surgery = false;
        self.initial_type = None;
        self.previous_claim_number.clear();
    }

    /// Adds or removes one service from the selection. The service must be
    /// part of the vocabulary for the current claim type.
    pub fn toggle_service_type(&mut self, service: ServiceType) -> ClaimResult<()> {
        let claim_type = self
            .claim_type
            .ok_or_else(|| ClaimError::InvalidData("claim type not selected".to_string()))?;
        if !ServiceType::allowed_for(claim_type).contains(&service) {
            return Err(ClaimError::InvalidData(format!(
                "service {:?} is not offered for {} claims",
                service, claim_type
            )));
        }
        if let Some(pos) = self.service_types.iter().position(|s| *s == service) {
            self.service_types.remove(pos);
            if service == ServiceType::Surgery {
                self.is_trauma_orthopedic_surgery = false;
            }
        } else {
            self.service_types.push(service);
        }
        Ok(())
    }

    pub fn has_service(&self, service: ServiceType) -> bool {
        self.service_types.contains(&service)
    }
}
