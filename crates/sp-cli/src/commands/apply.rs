use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use super::require_token;
use crate::adapters::ConsoleWizardEvents;
use crate::bootstrap::AppDeps;
use crate::wizard::{run_wizard, DialoguerPrompter};
use sp_app::WizardError;
use sp_core::wizard::Route;

pub async fn run(deps: &AppDeps) -> anyhow::Result<()> {
    let token = require_token(deps).await?;
    let span = info_span!("cli.command.apply");
    async {
        let availability = deps.check_scholarship_open().execute(&token).await;
        let events = Arc::new(ConsoleWizardEvents::stdout());
        let wizard = deps.wizard(token, events.clone());

        match wizard.start(availability.is_open()).await {
            Ok(_) => {}
            Err(WizardError::NoOpenScholarship) => {
                follow_navigation(&events).await;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        if let Some(session) = &availability.session {
            println!("Applying for {}", session.label());
        }

        let mut prompter = DialoguerPrompter::new();
        let outcome = run_wizard(&wizard, &mut prompter).await;
        if outcome.is_err() {
            wizard.close().await;
        }
        let state = outcome?;
        info!(?state, "wizard finished");

        follow_navigation(&events).await;
        Ok(())
    }
    .instrument(span)
    .await
}

/// Honour a navigation request: wait out its delay, then say where we went.
async fn follow_navigation<W>(events: &ConsoleWizardEvents<W>)
where
    W: std::io::Write + Send,
{
    if let Some((route, delay)) = events.take_navigation() {
        tokio::time::sleep(delay).await;
        match route {
            Route::Dashboard => println!("Returning to dashboard."),
        }
    }
}
