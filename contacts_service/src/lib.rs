// contacts_service/src/lib.rs

pub mod store;

pub use store::{SavedContactService, CONTACT_SERVICE};
