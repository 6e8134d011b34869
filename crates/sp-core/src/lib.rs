//! # sp-core
//!
//! Core domain models and business logic for the Scholarship Portal.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod application;
pub mod config;
pub mod ports;
pub mod session;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use application::{
    ApplicationDraft, AttachedFile, AttachmentSlot, DraftField, DraftUpdate, FilePreview, Lga,
    MissingField, MultipartPayload, StepState, StepValidator, SubmissionAssembler, TextField,
    WizardStep,
};
pub use config::AppConfig;
pub use session::{AccessToken, AuthSession, LoginCredentials, ScholarshipSession, UserProfile};
pub use wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
