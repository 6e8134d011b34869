use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use sp_core::{AttachmentSlot, Lga, TextField, WizardStep};

/// What the applicant wants to do after filling in a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChoice {
    /// "Continue", or "Submit" on the review step
    Continue,
    Back,
    Cancel,
}

/// Interaction surface used by [`run_wizard`](super::run_wizard).
pub trait WizardPrompter {
    fn text(&mut self, field: TextField, current: &str) -> anyhow::Result<String>;

    fn lga(&mut self, current: Option<Lga>) -> anyhow::Result<Option<Lga>>;

    /// `None` keeps whatever is attached.
    fn attachment_path(
        &mut self,
        slot: AttachmentSlot,
        current: Option<&str>,
    ) -> anyhow::Result<Option<PathBuf>>;

    fn choose(&mut self, step: WizardStep) -> anyhow::Result<StepChoice>;

    fn show(&mut self, text: &str);
}

/// Default interactive implementation backed by `dialoguer`.
///
/// Prompts block the current worker via `block_in_place`, so this needs the
/// multi-thread runtime.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn choices_for(step: WizardStep) -> Vec<(&'static str, StepChoice)> {
    let forward = if step.is_review() { "Submit" } else { "Continue" };
    let mut choices = vec![(forward, StepChoice::Continue)];
    if !step.is_first() {
        choices.push(("Back", StepChoice::Back));
    }
    choices.push(("Cancel", StepChoice::Cancel));
    choices
}

impl WizardPrompter for DialoguerPrompter {
    fn text(&mut self, field: TextField, current: &str) -> anyhow::Result<String> {
        let value = tokio::task::block_in_place(|| {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(field.label())
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()
        })?;
        Ok(value)
    }

    fn lga(&mut self, current: Option<Lga>) -> anyhow::Result<Option<Lga>> {
        let items: Vec<&str> = Lga::ALL.iter().map(Lga::as_str).collect();
        let default = current
            .and_then(|lga| Lga::ALL.iter().position(|candidate| *candidate == lga))
            .unwrap_or(0);
        let index = tokio::task::block_in_place(|| {
            Select::with_theme(&self.theme)
                .with_prompt("LGA")
                .items(&items)
                .default(default)
                .interact()
        })?;
        Ok(Lga::ALL.get(index).copied())
    }

    fn attachment_path(
        &mut self,
        slot: AttachmentSlot,
        current: Option<&str>,
    ) -> anyhow::Result<Option<PathBuf>> {
        let prompt = match current {
            Some(name) => format!("{} [{name}] (enter to keep)", slot.label()),
            None => format!("{} (path)", slot.label()),
        };
        let value = tokio::task::block_in_place(|| {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        })?;
        let trimmed = value.trim();
        Ok((!trimmed.is_empty()).then(|| PathBuf::from(trimmed)))
    }

    fn choose(&mut self, step: WizardStep) -> anyhow::Result<StepChoice> {
        let choices = choices_for(step);
        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
        let index = tokio::task::block_in_place(|| {
            Select::with_theme(&self.theme)
                .with_prompt(step.label())
                .items(&labels)
                .default(0)
                .interact()
        })?;
        Ok(choices
            .get(index)
            .map(|(_, choice)| *choice)
            .unwrap_or(StepChoice::Cancel))
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
