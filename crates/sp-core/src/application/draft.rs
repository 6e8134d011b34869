//! Application draft.
//!
//! The in-memory, unsaved application composed by the wizard. Fields are
//! addressed through [`DraftField`] so validation and assembly match
//! exhaustively instead of probing a loose key/value bag.

use serde::{Deserialize, Serialize};

use super::attachment::{AttachedFile, AttachmentSlot};
use super::lga::Lga;

/// Free-text fields of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    FullName,
    ContactAddress,
    PhoneNumber,
    CourseOfStudy,
    PresentQualification,
    QualificationDesired,
    InstitutionOfAward,
    NextOfKinName,
    NextOfKinPhone,
    NextOfKinRelationship,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            TextField::FullName => "Full Name",
            TextField::ContactAddress => "Contact Address",
            TextField::PhoneNumber => "Phone Number",
            TextField::CourseOfStudy => "Course of Study",
            TextField::PresentQualification => "Present Qualification",
            TextField::QualificationDesired => "Qualification Desired",
            TextField::InstitutionOfAward => "Institution of Award",
            TextField::NextOfKinName => "Next of Kin Name",
            TextField::NextOfKinPhone => "Next of Kin Phone Number",
            TextField::NextOfKinRelationship => "Next of Kin Relationship",
        }
    }
}

/// Any addressable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum DraftField {
    Text(TextField),
    Lga,
    Attachment(AttachmentSlot),
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Text(field) => field.label(),
            DraftField::Lga => "LGA",
            DraftField::Attachment(slot) => slot.label(),
        }
    }

    /// Whether the field counts as not filled in.
    ///
    /// Whitespace-only text is missing.
    pub fn is_missing(&self, draft: &ApplicationDraft) -> bool {
        match self {
            DraftField::Text(field) => draft.text(*field).trim().is_empty(),
            DraftField::Lga => draft.lga.is_none(),
            DraftField::Attachment(slot) => draft.attachment(*slot).is_none(),
        }
    }
}

/// A single-field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Text { field: TextField, value: String },
    Lga(Option<Lga>),
    Attachment {
        slot: AttachmentSlot,
        file: Option<AttachedFile>,
    },
}

impl DraftUpdate {
    pub fn text(field: TextField, value: impl Into<String>) -> Self {
        DraftUpdate::Text {
            field,
            value: value.into(),
        }
    }

    pub fn attach(slot: AttachmentSlot, file: AttachedFile) -> Self {
        DraftUpdate::Attachment {
            slot,
            file: Some(file),
        }
    }

    pub fn detach(slot: AttachmentSlot) -> Self {
        DraftUpdate::Attachment { slot, file: None }
    }

    /// The field this update replaces.
    pub fn field(&self) -> DraftField {
        match self {
            DraftUpdate::Text { field, .. } => DraftField::Text(*field),
            DraftUpdate::Lga(_) => DraftField::Lga,
            DraftUpdate::Attachment { slot, .. } => DraftField::Attachment(*slot),
        }
    }
}

/// Application draft.
///
/// 申请草稿：仅存在于内存中，提交成功后重置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub contact_address: String,
    pub lga: Option<Lga>,
    pub phone_number: String,

    pub course_of_study: String,
    pub present_qualification: String,
    pub qualification_desired: String,
    pub institution_of_award: String,

    pub next_of_kin_name: String,
    pub next_of_kin_phone: String,
    pub next_of_kin_relationship: String,

    pub transcript: Option<AttachedFile>,
    pub lga_letter: Option<AttachedFile>,
    pub passport_photo: Option<AttachedFile>,
}

impl ApplicationDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::ContactAddress => &self.contact_address,
            TextField::PhoneNumber => &self.phone_number,
            TextField::CourseOfStudy => &self.course_of_study,
            TextField::PresentQualification => &self.present_qualification,
            TextField::QualificationDesired => &self.qualification_desired,
            TextField::InstitutionOfAward => &self.institution_of_award,
            TextField::NextOfKinName => &self.next_of_kin_name,
            TextField::NextOfKinPhone => &self.next_of_kin_phone,
            TextField::NextOfKinRelationship => &self.next_of_kin_relationship,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::ContactAddress => &mut self.contact_address,
            TextField::PhoneNumber => &mut self.phone_number,
            TextField::CourseOfStudy => &mut self.course_of_study,
            TextField::PresentQualification => &mut self.present_qualification,
            TextField::QualificationDesired => &mut self.qualification_desired,
            TextField::InstitutionOfAward => &mut self.institution_of_award,
            TextField::NextOfKinName => &mut self.next_of_kin_name,
            TextField::NextOfKinPhone => &mut self.next_of_kin_phone,
            TextField::NextOfKinRelationship => &mut self.next_of_kin_relationship,
        }
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&AttachedFile> {
        match slot {
            AttachmentSlot::Transcript => self.transcript.as_ref(),
            AttachmentSlot::LgaLetter => self.lga_letter.as_ref(),
            AttachmentSlot::PassportPhoto => self.passport_photo.as_ref(),
        }
    }

    fn attachment_mut(&mut self, slot: AttachmentSlot) -> &mut Option<AttachedFile> {
        match slot {
            AttachmentSlot::Transcript => &mut self.transcript,
            AttachmentSlot::LgaLetter => &mut self.lga_letter,
            AttachmentSlot::PassportPhoto => &mut self.passport_photo,
        }
    }

    /// Replace one field, leaving every other field untouched.
    pub fn apply(&mut self, update: DraftUpdate) {
        match update {
            DraftUpdate::Text { field, value } => *self.text_mut(field) = value,
            DraftUpdate::Lga(lga) => self.lga = lga,
            DraftUpdate::Attachment { slot, file } => *self.attachment_mut(slot) = file,
        }
    }
}
