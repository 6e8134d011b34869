use std::sync::Arc;

use sp_core::ports::SessionStorePort;
use sp_core::AuthSession;

/// Use case for reading the stored login, if it still carries a token.
pub struct GetAuthSession {
    store: Arc<dyn SessionStorePort>,
}

impl GetAuthSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> anyhow::Result<Option<AuthSession>> {
        Ok(self
            .store
            .load()
            .await?
            .filter(|session| !session.token.is_empty()))
    }
}
