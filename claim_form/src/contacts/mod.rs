// claim_form/src/contacts/mod.rs

pub mod contact_overlay;

pub use contact_overlay::{ContactField, ContactOverlay, RoleSlot};
