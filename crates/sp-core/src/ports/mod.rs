//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the board's HTTP API, the credential store and the user interface.

pub mod auth;
pub mod preview_handle;
pub mod scholarship_session;
pub mod session_store;
pub mod submission;
pub mod wizard_event;

pub use auth::{AuthError, AuthPort};
pub use preview_handle::PreviewHandlePort;
pub use scholarship_session::ScholarshipSessionPort;
pub use session_store::SessionStorePort;
pub use submission::{ApplicationSubmissionPort, SubmissionError};
pub use wizard_event::WizardEventPort;
