//! Scholarship Portal Application Orchestration Layer
//!
//! This crate contains business logic use cases and the application wizard
//! orchestrator. It depends on `sp-core` ports only.

pub mod usecases;

pub use usecases::wizard::{WizardError, WizardOrchestrator};
