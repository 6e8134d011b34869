//! Wizard state machine.
//!
//! Defines a pure state transition function for the application wizard.

use std::time::Duration;

use tracing::warn;

use crate::application::{ApplicationDraft, StepValidator, WizardStep};
use crate::wizard::action::{Route, WizardAction, WizardNotice};
use crate::wizard::event::WizardEvent;
use crate::wizard::state::WizardState;

/// Pause between the success notice and the redirect.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

const SUBMITTED_MESSAGE: &str = "Application submitted successfully!";
const NO_SCHOLARSHIP_MESSAGE: &str = "No ongoing scholarship!";

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        draft: &ApplicationDraft,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Closed, event) => {
                warn!(?event, "wizard event after close ignored");
                (WizardState::Closed, Vec::new())
            }
            (_, WizardEvent::Close) => (WizardState::Closed, Vec::new()),

            (WizardState::Editing { .. }, WizardEvent::ScholarshipUnavailable) => (
                WizardState::Closed,
                vec![
                    WizardAction::Notify(WizardNotice::error(NO_SCHOLARSHIP_MESSAGE)),
                    WizardAction::Navigate {
                        route: Route::Dashboard,
                        delay: Duration::ZERO,
                    },
                ],
            ),

            (WizardState::Editing { step, .. }, WizardEvent::Continue) => {
                if step.is_review() {
                    return (WizardState::Submitting, vec![WizardAction::SubmitApplication]);
                }
                let missing = StepValidator::validate(step, draft);
                if !missing.is_empty() {
                    let notices = missing
                        .iter()
                        .map(|field| WizardAction::Notify(WizardNotice::error(field.message())))
                        .collect();
                    return (
                        WizardState::Editing {
                            step,
                            errors: missing,
                        },
                        notices,
                    );
                }
                match step.next() {
                    Some(next) => (WizardState::editing(next), Vec::new()),
                    None => (WizardState::editing(step), Vec::new()),
                }
            }
            (WizardState::Failed { .. }, WizardEvent::Continue) => {
                (WizardState::Submitting, vec![WizardAction::SubmitApplication])
            }

            (WizardState::Editing { step, errors }, WizardEvent::Back) => match step.previous() {
                Some(previous) => (WizardState::editing(previous), Vec::new()),
                None => (WizardState::Editing { step, errors }, Vec::new()),
            },
            (WizardState::Failed { .. }, WizardEvent::Back) => (
                WizardState::editing(WizardStep::Identification),
                Vec::new(),
            ),

            (WizardState::Submitting, WizardEvent::SubmissionSucceeded) => (
                WizardState::Succeeded,
                vec![
                    WizardAction::ResetDraft,
                    WizardAction::Notify(WizardNotice::success(SUBMITTED_MESSAGE)),
                    WizardAction::Navigate {
                        route: Route::Dashboard,
                        delay: SUCCESS_REDIRECT_DELAY,
                    },
                ],
            ),
            (WizardState::Submitting, WizardEvent::SubmissionFailed { message }) => (
                WizardState::Failed {
                    message: message.clone(),
                },
                vec![WizardAction::Notify(WizardNotice::error(message))],
            ),

            (state, event) => {
                warn!(?state, ?event, "invalid wizard transition");
                (state, Vec::new())
            }
        }
    }
}
