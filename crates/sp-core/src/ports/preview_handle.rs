use async_trait::async_trait;

use crate::application::{AttachedFile, PreviewHandle};

/// Issues transient URLs for previews that cannot be inlined (PDF links).
#[async_trait]
pub trait PreviewHandlePort: Send + Sync {
    async fn acquire(&self, file: &AttachedFile) -> anyhow::Result<PreviewHandle>;

    /// Releasing an unknown handle is a no-op.
    async fn release(&self, handle: &PreviewHandle);
}
