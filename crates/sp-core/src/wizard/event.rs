/// Events that drive the wizard.
///
/// 驱动向导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// "Continue" on steps 0-2, "Submit" on the review step.
    Continue,
    /// Previous step, no validation.
    Back,
    /// Entered without an open scholarship session.
    ScholarshipUnavailable,
    /// The API accepted the application.
    SubmissionSucceeded,
    /// The API rejected the application or could not be reached.
    SubmissionFailed { message: String },
    /// The wizard is being torn down.
    Close,
}
