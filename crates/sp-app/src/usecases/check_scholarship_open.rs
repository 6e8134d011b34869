use std::sync::Arc;

use tracing::{info_span, warn, Instrument};

use sp_core::ports::ScholarshipSessionPort;
use sp_core::{AccessToken, ScholarshipSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarshipAvailability {
    pub session: Option<ScholarshipSession>,
}

impl ScholarshipAvailability {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}

/// Use case for deciding whether the wizard may be entered.
///
/// Any failure to reach the API counts as "no open scholarship".
pub struct CheckScholarshipOpen {
    sessions: Arc<dyn ScholarshipSessionPort>,
}

impl CheckScholarshipOpen {
    pub fn new(sessions: Arc<dyn ScholarshipSessionPort>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, token: &AccessToken) -> ScholarshipAvailability {
        let span = info_span!("usecase.check_scholarship_open.execute");
        async {
            let session = match self.sessions.current_session(token).await {
                Ok(session) => session,
                Err(err) => {
                    warn!(error = %err, "no active scholarship session");
                    None
                }
            };
            ScholarshipAvailability { session }
        }
        .instrument(span)
        .await
    }
}
