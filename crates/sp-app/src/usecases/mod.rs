//! Business logic use cases
//!
//! [Login] → [CheckScholarshipOpen] → [WizardOrchestrator]
//!                                         ├─ ResolveFilePreview   (attachment changes)
//!                                         └─ SubmitApplication    (review step)

pub mod auth;
pub mod check_scholarship_open;
pub mod resolve_file_preview;
pub mod submit_application;
pub mod wizard;

pub use auth::{GetAuthSession, Login, LoginError, Logout};
pub use check_scholarship_open::{CheckScholarshipOpen, ScholarshipAvailability};
pub use resolve_file_preview::ResolveFilePreview;
pub use submit_application::SubmitApplication;
