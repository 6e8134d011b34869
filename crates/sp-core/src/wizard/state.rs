use crate::application::{MissingField, WizardStep};

/// Wizard flow state.
///
/// 向导流程状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Filling in a step.
    ///
    /// `errors` holds the missing fields reported by the last `Continue`.
    Editing {
        step: WizardStep,
        errors: Vec<MissingField>,
    },
    /// Create-application request in flight.
    Submitting,
    /// Remote submission confirmed.
    Succeeded,
    /// Remote submission rejected; logically still on the review step.
    Failed { message: String },
    /// Flow left: no open scholarship, or the wizard was closed.
    Closed,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::editing(WizardStep::BasicInformation)
    }
}

impl WizardState {
    pub fn editing(step: WizardStep) -> Self {
        WizardState::Editing {
            step,
            errors: Vec::new(),
        }
    }

    /// The step shown to the user, if any.
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            WizardState::Editing { step, .. } => Some(*step),
            WizardState::Submitting | WizardState::Failed { .. } => {
                Some(WizardStep::ReviewAndSubmit)
            }
            WizardState::Succeeded | WizardState::Closed => None,
        }
    }

    pub fn errors(&self) -> &[MissingField] {
        match self {
            WizardState::Editing { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WizardState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardState::Succeeded | WizardState::Closed)
    }
}
