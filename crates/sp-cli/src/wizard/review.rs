use std::collections::BTreeMap;
use std::fmt::Write;

use sp_core::{ApplicationDraft, AttachmentSlot, DraftField, FilePreview, WizardStep};

const NOT_PROVIDED: &str = "-";

fn describe_preview(preview: Option<&FilePreview>) -> String {
    match preview {
        Some(FilePreview::Image { data_url }) => format!("image preview, {} chars", data_url.len()),
        Some(FilePreview::PdfLink { handle }) => format!("open {handle}"),
        Some(FilePreview::Unsupported) | None => "no preview".to_string(),
    }
}

/// Read-only summary shown on the review step.
pub fn render_review(
    draft: &ApplicationDraft,
    previews: &BTreeMap<AttachmentSlot, FilePreview>,
) -> String {
    let mut out = String::new();
    for step in WizardStep::ALL.iter().filter(|step| !step.is_review()) {
        let _ = writeln!(out, "== {} ==", step.label());
        for field in step.fields() {
            let value = match field {
                DraftField::Text(text) => {
                    let value = draft.text(*text).trim();
                    if value.is_empty() {
                        NOT_PROVIDED.to_string()
                    } else {
                        value.to_string()
                    }
                }
                DraftField::Lga => draft
                    .lga
                    .map(|lga| lga.to_string())
                    .unwrap_or_else(|| NOT_PROVIDED.to_string()),
                DraftField::Attachment(slot) => match draft.attachment(*slot) {
                    Some(file) => format!(
                        "{} ({})",
                        file.file_name(),
                        describe_preview(previews.get(slot))
                    ),
                    None => NOT_PROVIDED.to_string(),
                },
            };
            let _ = writeln!(out, "  {}: {}", field.label(), value);
        }
    }
    out
}
