use std::time::Duration;

use async_trait::async_trait;

use crate::wizard::{Route, WizardNotice, WizardState};

/// Outbound signals of the wizard towards the user interface.
#[async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_state_changed(&self, state: WizardState);

    async fn notify(&self, notice: WizardNotice);

    /// Hand-off only; the caller decides how to honour `delay`.
    async fn navigate(&self, route: Route, delay: Duration);
}
