// models/src/claims/enums.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Insurers the portal can file against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Insurer {
    #[serde(rename = "GNP")]
    Gnp,
    #[serde(rename = "AXA")]
    Axa,
    #[serde(rename = "Qualitas")]
    Qualitas,
}

impl fmt::Display for Insurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insurer::Gnp => write!(f, "GNP"),
            Insurer::Axa => write!(f, "AXA"),
            Insurer::Qualitas => write!(f, "Qualitas"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Reimbursement,
    Scheduling,
    Maternity,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimType::Reimbursement => write!(f, "Reimbursement"),
            ClaimType::Scheduling => write!(f, "Scheduling"),
            ClaimType::Maternity => write!(f, "Maternity"),
        }
    }
}

/// Only meaningful when the claim type is Reimbursement. A Complement claim
/// continues a previously filed one and must carry its claim number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialType {
    Initial,
    Complement,
}

/// Service categories a claim can cover. The vocabulary offered to the user
/// depends on the claim type; see [`ServiceType::allowed_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Surgery,
    Medications,
    TherapyRehab,
    Hospital,
    MedicalFees,
    LabImagingStudies,
}

impl ServiceType {
    /// Service vocabulary for a claim type. Maternity claims carry no
    /// selectable services.
    pub fn allowed_for(claim_type: ClaimType) -> &'static [ServiceType] {
        match claim_type {
            ClaimType::Scheduling => &[
                ServiceType::Surgery,
                ServiceType::Medications,
                ServiceType::TherapyRehab,
            ],
            ClaimType::Reimbursement => &[
                ServiceType::Hospital,
                ServiceType::MedicalFees,
                ServiceType::Medications,
                ServiceType::LabImagingStudies,
                ServiceType::TherapyRehab,
            ],
            ClaimType::Maternity => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureType {
    Electronic,
    Physical,
}

impl Default for SignatureType {
    fn default() -> Self {
        SignatureType::Electronic
    }
}

/// The three contact slots on a claim. AccountHolder is only rendered and
/// validated for reimbursement claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactRole {
    Affected,
    Policyholder,
    AccountHolder,
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactRole::Affected => write!(f, "affected"),
            ContactRole::Policyholder => write!(f, "policyholder"),
            ContactRole::AccountHolder => write!(f, "account_holder"),
        }
    }
}

/// Upload sections of the document checklist: 1 - insurer-form signatures,
/// 2 - claim-event documents, 3 - invoices/prescriptions/studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    One,
    Two,
    Three,
}

impl Section {
    pub fn number(&self) -> u8 {
        match self {
            Section::One => 1,
            Section::Two => 2,
            Section::Three => 3,
        }
    }
}

/// Accepted upload formats. Everything else is rejected at the registry
/// boundary with the offending MIME string echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MimeType {
    Pdf,
    Png,
    Jpeg,
}

impl MimeType {
    pub fn parse(mime: &str) -> Option<MimeType> {
        match mime {
            "application/pdf" => Some(MimeType::Pdf),
            "image/png" => Some(MimeType::Png),
            "image/jpeg" | "image/jpg" => Some(MimeType::Jpeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Pdf => "application/pdf",
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_accepted_mime_types() {
        assert_eq!(MimeType::parse("application/pdf"), Some(MimeType::Pdf));
        assert_eq!(MimeType::parse("image/png"), Some(MimeType::Png));
        assert_eq!(MimeType::parse("image/jpeg"), Some(MimeType::Jpeg));
        assert_eq!(MimeType::parse("image/gif"), None);
        assert_eq!(MimeType::parse("text/plain"), None);
    }

    #[test]
    fn should_scope_service_vocabulary_by_claim_type() {
        let scheduling = ServiceType::allowed_for(ClaimType::Scheduling);
        assert!(scheduling.contains(&ServiceType::Surgery));
        assert!(!scheduling.contains(&ServiceType::Hospital));

        let reimbursement = ServiceType::allowed_for(ClaimType::Reimbursement);
        assert!(reimbursement.contains(&ServiceType::Hospital));
        assert!(!reimbursement.contains(&ServiceType::Surgery));

        assert!(ServiceType::allowed_for(ClaimType::Maternity).is_empty());
    }

    #[test]
    fn should_serialize_insurer_with_display_casing() {
        assert_eq!(serde_json::to_string(&Insurer::Gnp).unwrap(), "\"GNP\"");
        assert_eq!(Insurer::Axa.to_string(), "AXA");
    }
}
