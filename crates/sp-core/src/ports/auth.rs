use async_trait::async_trait;
use thiserror::Error;

use crate::session::{AuthSession, LoginCredentials};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{}", .message.as_deref().unwrap_or(INVALID_CREDENTIALS_MESSAGE))]
    Rejected { status: u16, message: Option<String> },

    #[error("login response had no token")]
    MissingToken,

    #[error("auth transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, AuthError>;
}
