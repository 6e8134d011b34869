use std::sync::Arc;

use tracing::info;

use sp_core::ports::SessionStorePort;

/// Use case for forgetting the stored login.
pub struct Logout {
    store: Arc<dyn SessionStorePort>,
}

impl Logout {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.store.clear().await?;
        info!("logged out");
        Ok(())
    }
}
