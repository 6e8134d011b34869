//! Attachment previews.
//!
//! Classification is by declared media type only:
//! - `image/*`          → inline data URL
//! - `application/pdf`  → link through a transient handle
//! - anything else      → unsupported, no preview

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::attachment::AttachedFile;

const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Pdf,
    Unsupported,
}

impl PreviewKind {
    pub fn classify(media_type: &str) -> Self {
        let media_type = media_type.trim().to_ascii_lowercase();
        if media_type.starts_with("image/") {
            PreviewKind::Image
        } else if media_type == PDF_MEDIA_TYPE {
            PreviewKind::Pdf
        } else {
            PreviewKind::Unsupported
        }
    }
}

/// A transient URL standing in for a browser object URL.
///
/// Handles are scoped: acquired when a file is selected, released when the
/// file is replaced or the wizard closes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renderable preview of an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePreview {
    Image { data_url: String },
    PdfLink { handle: PreviewHandle },
    Unsupported,
}

impl FilePreview {
    /// The transient handle backing this preview, if any.
    pub fn handle(&self) -> Option<&PreviewHandle> {
        match self {
            FilePreview::PdfLink { handle } => Some(handle),
            FilePreview::Image { .. } | FilePreview::Unsupported => None,
        }
    }
}

/// `data:<media type>;base64,<content>`
pub fn image_data_url(file: &AttachedFile) -> String {
    format!(
        "data:{};base64,{}",
        file.media_type(),
        BASE64.encode(file.bytes())
    )
}
