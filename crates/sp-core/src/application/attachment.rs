use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file picked by the applicant.
///
/// The content is opaque to the domain. Only the declared media type is ever
/// inspected (see [`PreviewKind::classify`](super::PreviewKind::classify)).
#[derive(Clone, PartialEq, Eq)]
pub struct AttachedFile {
    file_name: String,
    media_type: String,
    bytes: Bytes,
}

impl AttachedFile {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Content is never printed; drafts end up in tracing fields.
impl fmt::Debug for AttachedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedFile")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// File slots of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentSlot {
    Transcript,
    LgaLetter,
    PassportPhoto,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::Transcript,
        AttachmentSlot::LgaLetter,
        AttachmentSlot::PassportPhoto,
    ];

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentSlot::Transcript => "Transcript",
            AttachmentSlot::LgaLetter => "LGA Identification Letter",
            AttachmentSlot::PassportPhoto => "Passport Photo",
        }
    }
}
