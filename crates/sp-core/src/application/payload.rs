//! Multipart payload assembly.
//!
//! Maps draft fields onto the flat multipart keys the board's API expects.
//! Next-of-kin fields are flattened with dotted keys rather than nested.

use super::attachment::AttachedFile;
use super::draft::ApplicationDraft;

/// Wire keys of the create-application request.
pub mod wire {
    pub const FULL_NAME: &str = "fullname";
    pub const CONTACT_ADDRESS: &str = "contact_address";
    pub const LGA: &str = "lga";
    pub const COURSE_OF_STUDY: &str = "course_of_study";
    pub const PRESENT_QUALIFICATION: &str = "present_qualification";
    /// Spelled as the API spells it.
    pub const QUALIFICATION_DESIRED: &str = "qualiciation_desired";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const TRANSCRIPT: &str = "transcript";
    pub const LGA_MEANS_OF_ID: &str = "lga_means_of_id";
    pub const PASSPORT_PHOTO: &str = "passport_photo";
    /// Always sent empty; nothing in the wizard collects it.
    pub const STATEMENT_OF_RESULT: &str = "statement_of_result";
    pub const NEXT_OF_KIN_NAME: &str = "next_of_kin.name";
    pub const NEXT_OF_KIN_PHONE: &str = "next_of_kin.phone";
    pub const NEXT_OF_KIN_RELATIONSHIP: &str = "next_of_kin.relationship";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File(AttachedFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    pub name: &'static str,
    pub body: PartBody,
}

/// Ordered multipart parts, text and binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<MultipartPart>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.parts.push(MultipartPart {
            name,
            body: PartBody::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: &'static str, file: AttachedFile) {
        self.parts.push(MultipartPart {
            name,
            body: PartBody::File(file),
        });
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<MultipartPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().map(|part| part.name)
    }

    pub fn get(&self, name: &str) -> Option<&PartBody> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.body)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PartBody::Text(value) => Some(value),
            PartBody::File(_) => None,
        }
    }

    pub fn file(&self, name: &str) -> Option<&AttachedFile> {
        match self.get(name)? {
            PartBody::File(file) => Some(file),
            PartBody::Text(_) => None,
        }
    }
}

pub struct SubmissionAssembler;

impl SubmissionAssembler {
    /// Build the create-application payload from a draft.
    ///
    /// Absent attachments are skipped; `institution_of_award` has no wire key
    /// and is not sent.
    pub fn assemble(draft: &ApplicationDraft) -> MultipartPayload {
        let mut payload = MultipartPayload::new();

        payload.push_text(wire::FULL_NAME, draft.full_name.as_str());
        payload.push_text(wire::CONTACT_ADDRESS, draft.contact_address.as_str());
        payload.push_text(
            wire::LGA,
            draft.lga.map(|lga| lga.as_str()).unwrap_or_default(),
        );
        payload.push_text(wire::COURSE_OF_STUDY, draft.course_of_study.as_str());
        payload.push_text(
            wire::PRESENT_QUALIFICATION,
            draft.present_qualification.as_str(),
        );
        payload.push_text(
            wire::QUALIFICATION_DESIRED,
            draft.qualification_desired.as_str(),
        );
        payload.push_text(wire::PHONE_NUMBER, draft.phone_number.as_str());

        if let Some(file) = &draft.transcript {
            payload.push_file(wire::TRANSCRIPT, file.clone());
        }
        if let Some(file) = &draft.lga_letter {
            payload.push_file(wire::LGA_MEANS_OF_ID, file.clone());
        }
        if let Some(file) = &draft.passport_photo {
            payload.push_file(wire::PASSPORT_PHOTO, file.clone());
        }

        payload.push_text(wire::STATEMENT_OF_RESULT, "");

        payload.push_text(wire::NEXT_OF_KIN_NAME, draft.next_of_kin_name.as_str());
        payload.push_text(wire::NEXT_OF_KIN_PHONE, draft.next_of_kin_phone.as_str());
        payload.push_text(
            wire::NEXT_OF_KIN_RELATIONSHIP,
            draft.next_of_kin_relationship.as_str(),
        );

        payload
    }
}
