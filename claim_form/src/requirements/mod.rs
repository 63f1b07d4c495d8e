// claim_form/src/requirements/mod.rs

pub mod requirements;

pub use requirements::{derive_requirements, DocumentRequirement, RequirementSections, SectionOne};
