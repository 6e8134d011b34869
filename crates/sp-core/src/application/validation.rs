//! Per-step validation.

use serde::Serialize;

use super::draft::{ApplicationDraft, DraftField};
use super::step::WizardStep;

/// A required field that is not filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub field: DraftField,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    /// User-facing message, one per missing field.
    pub fn message(&self) -> String {
        format!("{} is required.", self.label())
    }
}

/// Pure step validator. Never mutates the draft.
pub struct StepValidator;

impl StepValidator {
    /// Every missing required field of `step`, in declaration order.
    pub fn validate(step: WizardStep, draft: &ApplicationDraft) -> Vec<MissingField> {
        step.required_fields()
            .iter()
            .filter(|field| field.is_missing(draft))
            .map(|field| MissingField { field: *field })
            .collect()
    }
}
