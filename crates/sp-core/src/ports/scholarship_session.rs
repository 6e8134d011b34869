use async_trait::async_trait;

use crate::session::{AccessToken, ScholarshipSession};

#[async_trait]
pub trait ScholarshipSessionPort: Send + Sync {
    /// The open application window, `None` when nothing is open.
    async fn current_session(
        &self,
        token: &AccessToken,
    ) -> anyhow::Result<Option<ScholarshipSession>>;
}
