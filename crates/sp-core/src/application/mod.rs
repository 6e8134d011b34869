//! Scholarship application domain.
//!
//! The draft an applicant composes, the four wizard steps, per-step validation,
//! attachment previews and the multipart payload expected by the board's API.

pub mod attachment;
pub mod draft;
pub mod lga;
pub mod payload;
pub mod preview;
pub mod step;
pub mod step_state;
pub mod validation;

pub use attachment::{AttachedFile, AttachmentSlot};
pub use draft::{ApplicationDraft, DraftField, DraftUpdate, TextField};
pub use lga::{Lga, LgaParseError};
pub use payload::{MultipartPart, MultipartPayload, PartBody, SubmissionAssembler};
pub use preview::{FilePreview, PreviewHandle, PreviewKind};
pub use step::WizardStep;
pub use step_state::StepState;
pub use validation::{MissingField, StepValidator};
