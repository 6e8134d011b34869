//! In-process registry of transient preview URLs.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use sp_core::application::PreviewHandle;
use sp_core::ports::PreviewHandlePort;
use sp_core::AttachedFile;

const HANDLE_SCHEME: &str = "blob:scholarship-portal/";

/// Issues `blob:scholarship-portal/<uuid>` handles and tracks which are live.
#[derive(Default)]
pub struct InMemoryPreviewHandles {
    live: Mutex<HashSet<String>>,
}

impl InMemoryPreviewHandles {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn live_count(&self) -> usize {
        self.live.lock().await.len()
    }

    pub async fn is_live(&self, handle: &PreviewHandle) -> bool {
        self.live.lock().await.contains(handle.url())
    }
}

#[async_trait]
impl PreviewHandlePort for InMemoryPreviewHandles {
    async fn acquire(&self, file: &AttachedFile) -> anyhow::Result<PreviewHandle> {
        let url = format!("{HANDLE_SCHEME}{}", Uuid::new_v4());
        self.live.lock().await.insert(url.clone());
        debug!(handle = %url, file = file.file_name(), "preview handle acquired");
        Ok(PreviewHandle::new(url))
    }

    async fn release(&self, handle: &PreviewHandle) {
        if self.live.lock().await.remove(handle.url()) {
            debug!(handle = %handle, "preview handle released");
        }
    }
}
