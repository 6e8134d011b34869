use super::draft::{ApplicationDraft, DraftUpdate};
use super::step::WizardStep;

/// Single source of truth for the current step and the draft.
///
/// Setters are unconditional; gating forward moves on validation is the
/// orchestrator's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepState {
    step: WizardStep,
    draft: ApplicationDraft,
}

impl StepState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn set_field(&mut self, update: DraftUpdate) {
        self.draft.apply(update);
    }

    /// Back to the first step with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
