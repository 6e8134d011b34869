use std::sync::Arc;

use tracing::debug;

use sp_core::application::preview::image_data_url;
use sp_core::application::{FilePreview, PreviewKind};
use sp_core::ports::PreviewHandlePort;
use sp_core::AttachedFile;

/// Use case for turning an attachment into a renderable preview.
///
/// Images are inlined as data URLs, PDFs get a transient handle from the
/// [`PreviewHandlePort`], everything else is unsupported. Callers must
/// [`release`](Self::release) a preview once it is superseded.
pub struct ResolveFilePreview {
    handles: Arc<dyn PreviewHandlePort>,
}

impl ResolveFilePreview {
    pub fn new(handles: Arc<dyn PreviewHandlePort>) -> Self {
        Self { handles }
    }

    pub async fn execute(&self, file: &AttachedFile) -> anyhow::Result<FilePreview> {
        let kind = PreviewKind::classify(file.media_type());
        debug!(file_name = file.file_name(), media_type = file.media_type(), ?kind, "resolving preview");
        let preview = match kind {
            PreviewKind::Image => FilePreview::Image {
                data_url: image_data_url(file),
            },
            PreviewKind::Pdf => FilePreview::PdfLink {
                handle: self.handles.acquire(file).await?,
            },
            PreviewKind::Unsupported => FilePreview::Unsupported,
        };
        Ok(preview)
    }

    pub async fn release(&self, preview: &FilePreview) {
        if let Some(handle) = preview.handle() {
            self.handles.release(handle).await;
        }
    }
}
