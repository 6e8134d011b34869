use std::collections::BTreeMap;

use tokio::sync::Mutex;

use sp_core::application::{FilePreview, StepState};
use sp_core::{ApplicationDraft, AttachmentSlot, DraftUpdate, WizardState};

/// Shared wizard context: flow state, step state and live previews.
///
/// ## Lock Ordering
/// Acquire `dispatch_lock` first, then any of the data locks. Data locks are
/// never held across an await on a port.
pub struct WizardContext {
    state: Mutex<WizardState>,
    step_state: Mutex<StepState>,
    previews: Mutex<BTreeMap<AttachmentSlot, FilePreview>>,
    /// Serializes dispatch calls and draft edits.
    dispatch_lock: Mutex<()>,
}

impl Default for WizardContext {
    fn default() -> Self {
        Self {
            state: Mutex::new(WizardState::default()),
            step_state: Mutex::new(StepState::new()),
            previews: Mutex::new(BTreeMap::new()),
            dispatch_lock: Mutex::new(()),
        }
    }
}

impl WizardContext {
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Store the flow state and mirror its step into the step state.
    pub async fn set_state(&self, state: WizardState) {
        if let Some(step) = state.step() {
            self.step_state.lock().await.set_step(step);
        }
        *self.state.lock().await = state;
    }

    pub async fn step_state(&self) -> StepState {
        self.step_state.lock().await.clone()
    }

    pub async fn draft(&self) -> ApplicationDraft {
        self.step_state.lock().await.draft().clone()
    }

    pub async fn set_field(&self, update: DraftUpdate) {
        self.step_state.lock().await.set_field(update);
    }

    pub async fn reset_step_state(&self) {
        self.step_state.lock().await.reset();
    }

    pub async fn preview(&self, slot: AttachmentSlot) -> Option<FilePreview> {
        self.previews.lock().await.get(&slot).cloned()
    }

    pub async fn set_preview(&self, slot: AttachmentSlot, preview: FilePreview) {
        self.previews.lock().await.insert(slot, preview);
    }

    pub async fn take_preview(&self, slot: AttachmentSlot) -> Option<FilePreview> {
        self.previews.lock().await.remove(&slot)
    }

    pub async fn take_all_previews(&self) -> Vec<FilePreview> {
        std::mem::take(&mut *self.previews.lock().await)
            .into_values()
            .collect()
    }
}
