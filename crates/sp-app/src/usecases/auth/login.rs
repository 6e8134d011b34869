use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sp_core::ports::{AuthError, AuthPort, SessionStorePort};
use sp_core::{AuthSession, LoginCredentials};

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("failed to persist login: {0}")]
    Persist(#[source] anyhow::Error),
}

/// Use case for logging in and persisting the returned session.
pub struct Login {
    auth: Arc<dyn AuthPort>,
    store: Arc<dyn SessionStorePort>,
}

impl Login {
    pub fn new(auth: Arc<dyn AuthPort>, store: Arc<dyn SessionStorePort>) -> Self {
        Self { auth, store }
    }

    pub async fn execute(&self, credentials: LoginCredentials) -> Result<AuthSession, LoginError> {
        let span = info_span!("usecase.login.execute", email = %credentials.email);
        async {
            let session = self.auth.login(&credentials).await?;
            self.store.save(&session).await.map_err(LoginError::Persist)?;
            info!("login successful");
            Ok(session)
        }
        .instrument(span)
        .await
    }
}
