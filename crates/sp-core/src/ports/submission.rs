use async_trait::async_trait;
use thiserror::Error;

use crate::application::MultipartPayload;
use crate::session::AccessToken;

/// Fallback shown when the API gives no reason.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Non-2xx response, with the server's `message` when it sent one.
    #[error("submission rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("submission transport failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Message for the user: the server's text verbatim, otherwise the fallback.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Create-application endpoint.
#[async_trait]
pub trait ApplicationSubmissionPort: Send + Sync {
    /// Any 2xx is success; the response body is not inspected.
    async fn submit_application(
        &self,
        token: &AccessToken,
        payload: MultipartPayload,
    ) -> Result<(), SubmissionError>;
}
