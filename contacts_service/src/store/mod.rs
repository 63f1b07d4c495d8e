// contacts_service/src/store/mod.rs

pub mod contact_store;

pub use contact_store::{SavedContactService, CONTACT_SERVICE};
