use serde::{Deserialize, Serialize};

use super::attachment::AttachmentSlot;
use super::draft::{DraftField, TextField};

/// The four ordered stages of the application wizard.
///
/// 申请向导的四个步骤。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    BasicInformation,
    AcademicInformation,
    Identification,
    ReviewAndSubmit,
}

const BASIC_INFORMATION_FIELDS: &[DraftField] = &[
    DraftField::Text(TextField::FullName),
    DraftField::Text(TextField::ContactAddress),
    DraftField::Lga,
];

const ACADEMIC_INFORMATION_FIELDS: &[DraftField] = &[
    DraftField::Text(TextField::CourseOfStudy),
    DraftField::Text(TextField::PresentQualification),
    DraftField::Text(TextField::QualificationDesired),
];

const ACADEMIC_INFORMATION_FORM: &[DraftField] = &[
    DraftField::Text(TextField::CourseOfStudy),
    DraftField::Text(TextField::PresentQualification),
    DraftField::Text(TextField::QualificationDesired),
    DraftField::Text(TextField::InstitutionOfAward),
];

const IDENTIFICATION_FIELDS: &[DraftField] = &[
    DraftField::Text(TextField::NextOfKinName),
    DraftField::Text(TextField::NextOfKinPhone),
    DraftField::Text(TextField::NextOfKinRelationship),
    DraftField::Text(TextField::PhoneNumber),
    DraftField::Attachment(AttachmentSlot::PassportPhoto),
    DraftField::Attachment(AttachmentSlot::Transcript),
    DraftField::Attachment(AttachmentSlot::LgaLetter),
];

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInformation,
        WizardStep::AcademicInformation,
        WizardStep::Identification,
        WizardStep::ReviewAndSubmit,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInformation => 0,
            WizardStep::AcademicInformation => 1,
            WizardStep::Identification => 2,
            WizardStep::ReviewAndSubmit => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Basic Information",
            WizardStep::AcademicInformation => "Academic Information",
            WizardStep::Identification => "Identification",
            WizardStep::ReviewAndSubmit => "Review & Submit",
        }
    }

    /// `None` on the review step; submission replaces advancing.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_review(&self) -> bool {
        *self == WizardStep::ReviewAndSubmit
    }

    /// Fields that must be filled in before leaving this step forward.
    pub fn required_fields(&self) -> &'static [DraftField] {
        match self {
            WizardStep::BasicInformation => BASIC_INFORMATION_FIELDS,
            WizardStep::AcademicInformation => ACADEMIC_INFORMATION_FIELDS,
            WizardStep::Identification => IDENTIFICATION_FIELDS,
            WizardStep::ReviewAndSubmit => &[],
        }
    }

    /// Every field shown on this step, optional ones included.
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            WizardStep::AcademicInformation => ACADEMIC_INFORMATION_FORM,
            other => other.required_fields(),
        }
    }
}
