//! Application wizard domain module.
//!
//! This module defines the wizard state machine types.

pub mod action;
pub mod event;
pub mod state;
pub mod state_machine;

pub use action::{NoticeLevel, Route, WizardAction, WizardNotice};
pub use event::WizardEvent;
pub use state::WizardState;
pub use state_machine::{WizardStateMachine, SUCCESS_REDIRECT_DELAY};
