// claim_form/src/requirements/requirements.rs
//! Document checklist deriver.
//!
//! Pure mapping from the current draft to the three upload sections:
//! insurer-form signatures (1), claim-event documents (2) and
//! invoices/prescriptions/studies (3). Combinations outside the rule table
//! silently yield empty sections.
use serde::Serialize;

use models::{ClaimDraft, ClaimType, Insurer, ServiceType, SignatureType};

/// One upload field of the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub label: &'static str,
    pub required: bool,
}

impl DocumentRequirement {
    fn required(label: &'static str) -> Self {
        Self { label, required: true }
    }

    fn optional(label: &'static str) -> Self {
        Self { label, required: false }
    }
}

/// Section 1 renders in one of three modes: not shown at all, an
/// informational notice (electronic signature covers the insurer forms), or
/// concrete upload fields for a physical signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SectionOne {
    Hidden,
    ElectronicSignatureNotice,
    Uploads(Vec<DocumentRequirement>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementSections {
    pub section_one: SectionOne,
    pub section_two: Vec<DocumentRequirement>,
    pub section_three: Vec<DocumentRequirement>,
}

/// Order-preserving accumulator; a label is added once, first occurrence
/// wins (including its required/optional tag).
struct RequirementList(Vec<DocumentRequirement>);

impl RequirementList {
    fn new() -> Self {
        RequirementList(Vec::new())
    }

    fn push(&mut self, requirement: DocumentRequirement) {
        if !self.0.iter().any(|r| r.label == requirement.label) {
            self.0.push(requirement);
        }
    }

    fn into_inner(self) -> Vec<DocumentRequirement> {
        self.0
    }
}

/// Signature-form labels keyed by the exact (insurer, claim type) pair.
fn section_one_labels(insurer: Insurer, claim_type: ClaimType) -> &'static [&'static str] {
    match (insurer, claim_type) {
        (Insurer::Gnp, ClaimType::Reimbursement) => &[
            "Accident/Illness Notice",
            "Reimbursement Form",
            "Bank Information Form",
        ],
        (Insurer::Gnp, ClaimType::Scheduling) => &["Accident/Illness Notice"],
        (Insurer::Axa, ClaimType::Reimbursement) => &["Reimbursement Request"],
        (Insurer::Axa, ClaimType::Scheduling) => &["Scheduling Request"],
        _ => &[],
    }
}

/// Derives the full checklist for a draft.
///
/// `account_holder_same_as_affected` comes from the contact overlay and
/// suppresses the separate bank-account-holder ID in section 2.
pub fn derive_requirements(
    draft: &ClaimDraft,
    account_holder_same_as_affected: bool,
) -> RequirementSections {
    let (insurer, claim_type) = match (draft.insurer, draft.claim_type) {
        (Some(i), Some(c)) => (i, c),
        _ => {
            return RequirementSections {
                section_one: SectionOne::Hidden,
                section_two: Vec::new(),
                section_three: Vec::new(),
            }
        }
    };

    let labels = section_one_labels(insurer, claim_type);
    let section_one = if labels.is_empty() {
        SectionOne::Hidden
    } else if draft.signature_type == SignatureType::Electronic {
        SectionOne::ElectronicSignatureNotice
    } else {
        SectionOne::Uploads(
            labels
                .iter()
                .map(|label| DocumentRequirement::required(label))
                .collect(),
        )
    };

    let covered_insurer = matches!(insurer, Insurer::Gnp | Insurer::Axa);
    let covered_claim = matches!(claim_type, ClaimType::Reimbursement | ClaimType::Scheduling);

    let mut section_two = Vec::new();
    if covered_insurer && covered_claim {
        section_two.push(DocumentRequirement::required("Medical Report"));
        section_two.push(DocumentRequirement::required("Official ID of Affected Insured"));
        if claim_type == ClaimType::Reimbursement {
            section_two.push(DocumentRequirement::required("Bank Statement Cover Page"));
            if !account_holder_same_as_affected {
                section_two.push(DocumentRequirement::required(
                    "Official ID of Bank Account Holder",
                ));
            }
        }
    }

    let mut section_three = RequirementList::new();
    if covered_insurer {
        let has = |service| draft.has_service(service);
        if claim_type == ClaimType::Scheduling {
            if has(ServiceType::Surgery) {
                if draft.is_trauma_orthopedic_surgery {
                    section_three.push(DocumentRequirement::required(
                        "Trauma/Ortho/Neuro Surgery Form",
                    ));
                }
                section_three.push(DocumentRequirement::required(
                    "Diagnostic-Supporting Study Interpretation",
                ));
            }
            if has(ServiceType::Medications) {
                section_three.push(DocumentRequirement::required(
                    "Medication Prescriptions (dose & duration)",
                ));
                section_three.push(DocumentRequirement::optional(
                    "Diagnostic-Supporting Study Interpretation",
                ));
            }
            if has(ServiceType::TherapyRehab) {
                section_three.push(DocumentRequirement::required(
                    "Physician Log (therapies, sessions, times)",
                ));
                section_three.push(DocumentRequirement::required(
                    "Diagnostic-Supporting Study Interpretation",
                ));
            }
        }
        if claim_type == ClaimType::Reimbursement {
            if has(ServiceType::Hospital) {
                section_three.push(DocumentRequirement::required("Hospital Invoices"));
            }
            if has(ServiceType::MedicalFees) {
                section_three.push(DocumentRequirement::required("Medical Fee Invoices"));
            }
            if has(ServiceType::Medications) {
                section_three.push(DocumentRequirement::required("Medication Invoices"));
                section_three.push(DocumentRequirement::required(
                    "Medication Prescriptions (dose & duration)",
                ));
            }
            if has(ServiceType::LabImagingStudies) {
                section_three.push(DocumentRequirement::required("Lab/Imaging Invoices"));
                section_three.push(DocumentRequirement::required("Lab/Imaging Studies"));
            }
            if has(ServiceType::TherapyRehab) {
                section_three.push(DocumentRequirement::required("Therapy Invoices"));
                section_three.push(DocumentRequirement::required("Therapy Prescriptions"));
                section_three.push(DocumentRequirement::required("Therapy Attendance Log"));
            }
        }
    }

    RequirementSections {
        section_one,
        section_two,
        section_three: section_three.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::SignatureType;

    fn draft(insurer: Insurer, claim_type: ClaimType) -> ClaimDraft {
        let mut draft = ClaimDraft::new();
        draft.insurer = Some(insurer);
        draft.set_claim_type(Some(claim_type));
        draft.signature_type = SignatureType::Physical;
        draft
    }

    fn labels(list: &[DocumentRequirement]) -> Vec<&'static str> {
        list.iter().map(|r| r.label).collect()
    }

    #[test]
    fn should_yield_empty_sections_for_unlisted_combinations() {
        for (insurer, claim_type) in [
            (Insurer::Qualitas, ClaimType::Reimbursement),
            (Insurer::Qualitas, ClaimType::Scheduling),
            (Insurer::Gnp, ClaimType::Maternity),
            (Insurer::Axa, ClaimType::Maternity),
        ] {
            let sections = derive_requirements(&draft(insurer, claim_type), false);
            assert_eq!(sections.section_one, SectionOne::Hidden);
            assert!(sections.section_two.is_empty());
            assert!(sections.section_three.is_empty());
        }
    }

    #[test]
    fn should_hide_everything_until_insurer_and_claim_type_are_chosen() {
        let sections = derive_requirements(&ClaimDraft::new(), false);
        assert_eq!(sections.section_one, SectionOne::Hidden);
        assert!(sections.section_two.is_empty());
        assert!(sections.section_three.is_empty());
    }

    #[test]
    fn should_emit_gnp_reimbursement_signature_forms() {
        let sections = derive_requirements(&draft(Insurer::Gnp, ClaimType::Reimbursement), false);
        match sections.section_one {
            SectionOne::Uploads(ref fields) => assert_eq!(
                labels(fields),
                vec![
                    "Accident/Illness Notice",
                    "Reimbursement Form",
                    "Bank Information Form"
                ]
            ),
            ref other => panic!("expected uploads, got {:?}", other),
        }
    }

    #[test]
    fn should_swap_uploads_for_notice_under_electronic_signature() {
        let mut d = draft(Insurer::Axa, ClaimType::Scheduling);
        d.signature_type = SignatureType::Electronic;
        let sections = derive_requirements(&d, false);
        assert_eq!(sections.section_one, SectionOne::ElectronicSignatureNotice);
        // Sections 2/3 are unaffected by the signature mode.
        assert_eq!(
            labels(&sections.section_two),
            vec!["Medical Report", "Official ID of Affected Insured"]
        );
    }

    #[test]
    fn should_add_bank_documents_only_for_reimbursement() {
        let sections = derive_requirements(&draft(Insurer::Gnp, ClaimType::Reimbursement), false);
        assert_eq!(
            labels(&sections.section_two),
            vec![
                "Medical Report",
                "Official ID of Affected Insured",
                "Bank Statement Cover Page",
                "Official ID of Bank Account Holder"
            ]
        );

        let sections = derive_requirements(&draft(Insurer::Axa, ClaimType::Scheduling), false);
        assert_eq!(
            labels(&sections.section_two),
            vec!["Medical Report", "Official ID of Affected Insured"]
        );
    }

    #[test]
    fn should_skip_account_holder_id_when_same_as_affected() {
        let sections = derive_requirements(&draft(Insurer::Gnp, ClaimType::Reimbursement), true);
        assert!(!labels(&sections.section_two).contains(&"Official ID of Bank Account Holder"));
        assert!(labels(&sections.section_two).contains(&"Bank Statement Cover Page"));
    }

    #[test]
    fn should_order_trauma_surgery_documents() {
        let mut d = draft(Insurer::Gnp, ClaimType::Scheduling);
        d.toggle_service_type(ServiceType::Surgery).unwrap();
        d.is_trauma_orthopedic_surgery = true;
        let sections = derive_requirements(&d, false);
        assert_eq!(
            labels(&sections.section_three),
            vec![
                "Trauma/Ortho/Neuro Surgery Form",
                "Diagnostic-Supporting Study Interpretation"
            ]
        );

        d.is_trauma_orthopedic_surgery = false;
        let sections = derive_requirements(&d, false);
        assert_eq!(
            labels(&sections.section_three),
            vec!["Diagnostic-Supporting Study Interpretation"]
        );
    }

    #[test]
    fn should_deduplicate_study_interpretation_first_occurrence_wins() {
        let mut d = draft(Insurer::Axa, ClaimType::Scheduling);
        d.toggle_service_type(ServiceType::Surgery).unwrap();
        d.toggle_service_type(ServiceType::Medications).unwrap();
        d.toggle_service_type(ServiceType::TherapyRehab).unwrap();
        let sections = derive_requirements(&d, false);

        let interp: Vec<_> = sections
            .section_three
            .iter()
            .filter(|r| r.label == "Diagnostic-Supporting Study Interpretation")
            .collect();
        assert_eq!(interp.len(), 1);
        // The surgery rule ran first, so the shared label stays required even
        // though the medications rule would have tagged it optional.
        assert!(interp[0].required);
    }

    #[test]
    fn should_keep_optional_tag_when_medications_rule_runs_first() {
        let mut d = draft(Insurer::Axa, ClaimType::Scheduling);
        d.toggle_service_type(ServiceType::Medications).unwrap();
        let sections = derive_requirements(&d, false);
        assert_eq!(
            sections.section_three,
            vec![
                DocumentRequirement::required("Medication Prescriptions (dose & duration)"),
                DocumentRequirement::optional("Diagnostic-Supporting Study Interpretation"),
            ]
        );
    }

    #[test]
    fn should_not_emit_medication_invoices_twice() {
        let mut d = draft(Insurer::Axa, ClaimType::Reimbursement);
        d.toggle_service_type(ServiceType::Medications).unwrap();
        d.toggle_service_type(ServiceType::LabImagingStudies).unwrap();
        let sections = derive_requirements(&d, false);
        let list = labels(&sections.section_three);
        assert_eq!(
            list.iter().filter(|l| **l == "Medication Invoices").count(),
            1
        );
        assert_eq!(
            list,
            vec![
                "Medication Invoices",
                "Medication Prescriptions (dose & duration)",
                "Lab/Imaging Invoices",
                "Lab/Imaging Studies"
            ]
        );
    }

    #[test]
    fn should_emit_full_reimbursement_therapy_set() {
        let mut d = draft(Insurer::Gnp, ClaimType::Reimbursement);
        d.toggle_service_type(ServiceType::Hospital).unwrap();
        d.toggle_service_type(ServiceType::MedicalFees).unwrap();
        d.toggle_service_type(ServiceType::TherapyRehab).unwrap();
        let sections = derive_requirements(&d, false);
        assert_eq!(
            labels(&sections.section_three),
            vec![
                "Hospital Invoices",
                "Medical Fee Invoices",
                "Therapy Invoices",
                "Therapy Prescriptions",
                "Therapy Attendance Log"
            ]
        );
    }
}
