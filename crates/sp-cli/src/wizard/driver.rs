use std::collections::BTreeMap;

use tracing::{debug, info_span, Instrument};

use sp_app::{WizardError, WizardOrchestrator};
use sp_core::wizard::WizardNotice;
use sp_core::{AttachmentSlot, DraftField, DraftUpdate, WizardState, WizardStep};
use sp_infra::fs::load_attachment;

use super::prompter::{StepChoice, WizardPrompter};
use super::review::render_review;

/// Drive the wizard until it succeeds or the applicant cancels.
///
/// Returns the final state, `Succeeded` or `Closed`.
pub async fn run_wizard<P>(
    orchestrator: &WizardOrchestrator,
    prompter: &mut P,
) -> anyhow::Result<WizardState>
where
    P: WizardPrompter + ?Sized,
{
    let span = info_span!("cli.wizard.run");
    async {
        loop {
            let state = orchestrator.get_state().await;
            let Some(step) = state.step() else {
                return Ok(state);
            };

            if step.is_review() {
                show_review(orchestrator, prompter).await;
            } else {
                prompter.show(&format!(
                    "Step {} of {}: {}",
                    step.index() + 1,
                    WizardStep::ALL.len(),
                    step.label()
                ));
                collect_step(orchestrator, prompter, step).await?;
            }

            match prompter.choose(step)? {
                StepChoice::Continue => match orchestrator.continue_step().await {
                    Ok(next) => debug!(?next, "continue handled"),
                    Err(WizardError::SubmissionInFlight) => continue,
                    Err(err) => return Err(err.into()),
                },
                StepChoice::Back => {
                    orchestrator.back().await?;
                }
                StepChoice::Cancel => return Ok(orchestrator.close().await),
            }
        }
    }
    .instrument(span)
    .await
}

async fn show_review<P>(orchestrator: &WizardOrchestrator, prompter: &mut P)
where
    P: WizardPrompter + ?Sized,
{
    let draft = orchestrator.draft().await;
    let mut previews = BTreeMap::new();
    for slot in AttachmentSlot::ALL {
        if let Some(preview) = orchestrator.preview(slot).await {
            previews.insert(slot, preview);
        }
    }
    prompter.show(&render_review(&draft, &previews));
}

async fn collect_step<P>(
    orchestrator: &WizardOrchestrator,
    prompter: &mut P,
    step: WizardStep,
) -> anyhow::Result<()>
where
    P: WizardPrompter + ?Sized,
{
    let draft = orchestrator.draft().await;
    for field in step.fields() {
        let update = match *field {
            DraftField::Text(text) => DraftUpdate::text(text, prompter.text(text, draft.text(text))?),
            DraftField::Lga => DraftUpdate::Lga(prompter.lga(draft.lga)?),
            DraftField::Attachment(slot) => {
                let current = draft.attachment(slot).map(|file| file.file_name());
                let Some(path) = prompter.attachment_path(slot, current)? else {
                    continue;
                };
                match load_attachment(&path).await {
                    Ok(file) => DraftUpdate::attach(slot, file),
                    Err(err) => {
                        orchestrator
                            .notify(WizardNotice::error(format!("{err:#}")))
                            .await;
                        continue;
                    }
                }
            }
        };
        orchestrator.update_field(update).await?;
    }
    Ok(())
}
