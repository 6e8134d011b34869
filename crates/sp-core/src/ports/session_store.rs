//! Credential store port
//!
//! Persists the login between runs. Implementations are provided by the
//! infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::session::{AccessToken, AuthSession};

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<AuthSession>>;

    async fn save(&self, session: &AuthSession) -> anyhow::Result<()>;

    async fn clear(&self) -> anyhow::Result<()>;

    /// Token of the stored session; empty tokens count as logged out.
    async fn token(&self) -> anyhow::Result<Option<AccessToken>> {
        Ok(self
            .load()
            .await?
            .map(|session| session.token)
            .filter(|token| !token.is_empty()))
    }
}

#[cfg(test)]
mockall::mock! {
    pub SessionStore {}

    #[async_trait]
    impl SessionStorePort for SessionStore {
        async fn load(&self) -> anyhow::Result<Option<AuthSession>>;
        async fn save(&self, session: &AuthSession) -> anyhow::Result<()>;
        async fn clear(&self) -> anyhow::Result<()>;
    }
}
