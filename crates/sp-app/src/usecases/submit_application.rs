use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use sp_core::ports::{ApplicationSubmissionPort, SubmissionError};
use sp_core::{AccessToken, ApplicationDraft, SubmissionAssembler};

/// Use case for sending a draft to the create-application endpoint.
///
/// Assembles the multipart payload and hands it to the submission port.
pub struct SubmitApplication {
    submission: Arc<dyn ApplicationSubmissionPort>,
}

impl SubmitApplication {
    pub fn new(submission: Arc<dyn ApplicationSubmissionPort>) -> Self {
        Self { submission }
    }

    pub async fn execute(
        &self,
        token: &AccessToken,
        draft: &ApplicationDraft,
    ) -> Result<(), SubmissionError> {
        let payload = SubmissionAssembler::assemble(draft);
        let span = info_span!("usecase.submit_application.execute", parts = payload.len());
        async {
            match self.submission.submit_application(token, payload).await {
                Ok(()) => {
                    info!("application submitted");
                    Ok(())
                }
                Err(err) => {
                    warn!(error = %err, "application submission failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
