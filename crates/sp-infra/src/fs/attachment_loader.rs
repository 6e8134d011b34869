//! Reads attachments from disk for the CLI wizard.

use std::path::Path;

use anyhow::Context;
use tokio::fs;
use tracing::debug;

use sp_core::AttachedFile;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Media type guessed from the file extension, case-insensitively.
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => FALLBACK_MEDIA_TYPE,
    }
}

/// Load a file into an [`AttachedFile`] named after its final path component.
pub async fn load_attachment(path: &Path) -> anyhow::Result<AttachedFile> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read attachment {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Attachment path has no file name: {}", path.display()))?
        .to_string();
    let media_type = media_type_for(path);

    debug!(file = %file_name, media_type, size = bytes.len(), "attachment loaded");
    Ok(AttachedFile::new(file_name, media_type, bytes))
}
