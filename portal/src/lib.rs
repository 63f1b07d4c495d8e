// portal/src/lib.rs
//! Portal-side glue for the claim intake core: the submission service and
//! its sink contract, the authenticated-user provider, injected portal
//! configuration and the non-blocking notification queue.

pub mod auth;
pub mod config;
pub mod context;
pub mod notifications;
pub mod submission;

pub use auth::{AuthenticatedUserProvider, StaticUserProvider};
pub use config::PortalConfig;
pub use context::PortalContext;
pub use notifications::{Notification, NotificationQueue, Severity};
pub use submission::{ClaimSubmission, ClaimSubmissionSink, SubmissionService};
