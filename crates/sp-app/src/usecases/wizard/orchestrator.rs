//! Application wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects:
//! preview handles, the create-application call and user notifications.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use sp_core::application::{FilePreview, StepState};
use sp_core::ports::WizardEventPort;
use sp_core::wizard::WizardNotice;
use sp_core::{
    AccessToken, ApplicationDraft, AttachmentSlot, DraftUpdate, WizardAction, WizardEvent,
    WizardState, WizardStateMachine,
};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::{ResolveFilePreview, SubmitApplication};

/// Errors produced by the wizard orchestrator.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("no ongoing scholarship")]
    NoOpenScholarship,
    #[error("an application submission is already in progress")]
    SubmissionInFlight,
    #[error("the application wizard is closed")]
    Closed,
}

/// Clears the in-flight flag on every exit path of a submission.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    /// Raise the flag and count one more submission attempt.
    fn engage(flag: &'a AtomicBool, attempts: &AtomicU64) -> Self {
        flag.store(true, Ordering::SeqCst);
        attempts.fetch_add(1, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Orchestrator that drives the wizard state and side effects.
///
/// One orchestrator owns one draft for the lifetime of one application session.
pub struct WizardOrchestrator {
    context: WizardContext,
    token: AccessToken,
    submitting: AtomicBool,
    /// Bumped whenever a submission starts; triggers queued behind one are stale.
    submission_attempts: AtomicU64,

    submit_application: Arc<SubmitApplication>,
    resolve_preview: Arc<ResolveFilePreview>,
    event_port: Arc<dyn WizardEventPort>,
}

impl WizardOrchestrator {
    pub fn new(
        token: AccessToken,
        submit_application: Arc<SubmitApplication>,
        resolve_preview: Arc<ResolveFilePreview>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::default(),
            token,
            submitting: AtomicBool::new(false),
            submission_attempts: AtomicU64::new(0),
            submit_application,
            resolve_preview,
            event_port,
        }
    }

    /// Enter the wizard.
    ///
    /// Without an open scholarship the wizard signals an error, redirects to
    /// the dashboard and never shows a step.
    pub async fn start(&self, is_scholarship_open: bool) -> Result<WizardState, WizardError> {
        if !is_scholarship_open {
            self.dispatch(WizardEvent::ScholarshipUnavailable).await?;
            return Err(WizardError::NoOpenScholarship);
        }
        let state = self.context.get_state().await;
        self.event_port.emit_state_changed(state.clone()).await;
        Ok(state)
    }

    /// "Continue" on steps 0-2, "Submit" on the review step.
    pub async fn continue_step(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Continue).await
    }

    pub async fn back(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Back).await
    }

    /// Replace one draft field.
    ///
    /// Attachment changes release the slot's previous preview and resolve a
    /// new one. Edits are refused while a submission is pending.
    pub async fn update_field(&self, update: DraftUpdate) -> Result<(), WizardError> {
        let _dispatch_guard = self.acquire_idle().await?;
        if self.context.get_state().await.is_terminal() {
            return Err(WizardError::Closed);
        }

        if let DraftUpdate::Attachment { slot, file } = &update {
            if let Some(previous) = self.context.take_preview(*slot).await {
                self.resolve_preview.release(&previous).await;
            }
            if let Some(file) = file {
                let preview = match self.resolve_preview.execute(file).await {
                    Ok(preview) => preview,
                    Err(err) => {
                        warn!(error = %err, ?slot, "preview unavailable");
                        FilePreview::Unsupported
                    }
                };
                self.context.set_preview(*slot, preview).await;
            }
        }

        debug!(field = ?update.field(), "draft field updated");
        self.context.set_field(update).await;
        Ok(())
    }

    /// Tear the wizard down, releasing every preview handle.
    pub async fn close(&self) -> WizardState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.release_all_previews().await;
        let current = self.context.get_state().await;
        let (next, _) =
            WizardStateMachine::transition(current, WizardEvent::Close, &ApplicationDraft::empty());
        self.set_state_and_emit(next.clone()).await;
        next
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn step_state(&self) -> StepState {
        self.context.step_state().await
    }

    pub async fn draft(&self) -> ApplicationDraft {
        self.context.draft().await
    }

    pub async fn preview(&self, slot: AttachmentSlot) -> Option<FilePreview> {
        self.context.preview(slot).await
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.is_submitting() {
            warn!("wizard trigger rejected while submission in flight");
            return Err(WizardError::SubmissionInFlight);
        }
        Ok(())
    }

    /// Take the dispatch lock for a user trigger.
    ///
    /// The flag is checked before queueing, since a pending submission holds
    /// the lock. A trigger that queued while a submission started is refused
    /// once it gets the lock, whatever the submission's outcome.
    async fn acquire_idle(&self) -> Result<tokio::sync::MutexGuard<'_, ()>, WizardError> {
        self.ensure_idle()?;
        let attempts_seen = self.submission_attempts.load(Ordering::SeqCst);
        let guard = self.context.acquire_dispatch_lock().await;
        if self.submission_attempts.load(Ordering::SeqCst) != attempts_seen {
            warn!("queued wizard trigger dropped after a submission");
            return Err(WizardError::SubmissionInFlight);
        }
        Ok(guard)
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<WizardState, WizardError> {
        let _dispatch_guard = self.acquire_idle().await?;

        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            if current == WizardState::Closed {
                return Err(WizardError::Closed);
            }
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let draft = self.context.draft().await;
                let (next, actions) = WizardStateMachine::transition(current, event, &draft);
                info!(from = ?from, to = ?next, event = %event_name, "wizard state transition");
                // Raised before `Submitting` is visible to anyone.
                let _busy = actions
                    .contains(&WizardAction::SubmitApplication)
                    .then(|| InFlightGuard::engage(&self.submitting, &self.submission_attempts));
                self.set_state_and_emit(next.clone()).await;
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::SubmitApplication => {
                    follow_up_events.push(self.submit().await);
                }
                WizardAction::ResetDraft => {
                    self.release_all_previews().await;
                    self.context.reset_step_state().await;
                    debug!("wizard draft reset");
                }
                WizardAction::Notify(notice) => {
                    self.event_port.notify(notice).await;
                }
                WizardAction::Navigate { route, delay } => {
                    self.event_port.navigate(route, delay).await;
                }
            }
        }
        follow_up_events
    }

    async fn submit(&self) -> WizardEvent {
        let draft = self.context.draft().await;
        match self.submit_application.execute(&self.token, &draft).await {
            Ok(()) => WizardEvent::SubmissionSucceeded,
            Err(err) => WizardEvent::SubmissionFailed {
                message: err.user_message(),
            },
        }
    }

    async fn release_all_previews(&self) {
        for preview in self.context.take_all_previews().await {
            self.resolve_preview.release(&preview).await;
        }
    }

    async fn set_state_and_emit(&self, state: WizardState) {
        self.context.set_state(state.clone()).await;
        self.event_port.emit_state_changed(state).await;
    }

    /// Notify without a transition, e.g. for delivery-layer input errors.
    pub async fn notify(&self, notice: WizardNotice) {
        self.event_port.notify(notice).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    use sp_core::application::{MultipartPayload, PreviewHandle};
    use sp_core::ports::{ApplicationSubmissionPort, PreviewHandlePort, SubmissionError};
    use sp_core::wizard::{NoticeLevel, Route, SUCCESS_REDIRECT_DELAY};
    use sp_core::{AttachedFile, Lga, TextField, WizardStep};

    enum Reply {
        Created,
        Rejected(u16, Option<&'static str>),
        Unreachable,
    }

    struct FakeSubmission {
        reply: StdMutex<Reply>,
        payloads: StdMutex<Vec<MultipartPayload>>,
        gate: Option<(Arc<Notify>, Arc<Notify>)>,
    }

    impl FakeSubmission {
        fn replying(reply: Reply) -> Self {
            Self {
                reply: StdMutex::new(reply),
                payloads: StdMutex::new(Vec::new()),
                gate: None,
            }
        }

        /// Signals `entered` once called, then waits for `release`.
        fn gated(entered: Arc<Notify>, release: Arc<Notify>) -> Self {
            Self {
                gate: Some((entered, release)),
                ..Self::replying(Reply::Created)
            }
        }

        fn set_reply(&self, reply: Reply) {
            *self.reply.lock().unwrap() = reply;
        }

        fn calls(&self) -> usize {
            self.payloads.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ApplicationSubmissionPort for FakeSubmission {
        async fn submit_application(
            &self,
            token: &AccessToken,
            payload: MultipartPayload,
        ) -> Result<(), SubmissionError> {
            assert_eq!(token.expose(), "test-token");
            self.payloads.lock().unwrap().push(payload);
            if let Some((entered, release)) = &self.gate {
                entered.notify_one();
                release.notified().await;
            }
            match &*self.reply.lock().unwrap() {
                Reply::Created => Ok(()),
                Reply::Rejected(status, message) => Err(SubmissionError::Rejected {
                    status: *status,
                    message: message.map(str::to_string),
                }),
                Reply::Unreachable => Err(SubmissionError::Transport("connection refused".into())),
            }
        }
    }

    #[derive(Default)]
    struct FakeHandles {
        next: StdMutex<usize>,
        live: StdMutex<HashSet<String>>,
    }

    impl FakeHandles {
        fn live(&self) -> usize {
            self.live.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PreviewHandlePort for FakeHandles {
        async fn acquire(&self, _file: &AttachedFile) -> anyhow::Result<PreviewHandle> {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            let url = format!("blob:test/{next}");
            self.live.lock().unwrap().insert(url.clone());
            Ok(PreviewHandle::new(url))
        }

        async fn release(&self, handle: &PreviewHandle) {
            self.live.lock().unwrap().remove(handle.url());
        }
    }

    #[derive(Default)]
    struct RecordingEvents {
        states: StdMutex<Vec<WizardState>>,
        notices: StdMutex<Vec<WizardNotice>>,
        navigations: StdMutex<Vec<(Route, Duration)>>,
        submitting_gate: Option<(Arc<Notify>, Arc<Notify>)>,
    }

    impl RecordingEvents {
        /// Holds the `Submitting` emission until `release` fires.
        fn gated_on_submitting(entered: Arc<Notify>, release: Arc<Notify>) -> Self {
            Self {
                submitting_gate: Some((entered, release)),
                ..Self::default()
            }
        }

        fn errors(&self) -> Vec<String> {
            self.notices
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.level == NoticeLevel::Error)
                .map(|n| n.message.clone())
                .collect()
        }

        fn clear_notices(&self) {
            self.notices.lock().unwrap().clear();
        }
    }

    #[async_trait]
    impl WizardEventPort for RecordingEvents {
        async fn emit_state_changed(&self, state: WizardState) {
            let submitting = state == WizardState::Submitting;
            self.states.lock().unwrap().push(state);
            if let (true, Some((entered, release))) = (submitting, &self.submitting_gate) {
                entered.notify_one();
                release.notified().await;
            }
        }

        async fn notify(&self, notice: WizardNotice) {
            self.notices.lock().unwrap().push(notice);
        }

        async fn navigate(&self, route: Route, delay: Duration) {
            self.navigations.lock().unwrap().push((route, delay));
        }
    }

    struct Harness {
        orchestrator: Arc<WizardOrchestrator>,
        submission: Arc<FakeSubmission>,
        handles: Arc<FakeHandles>,
        events: Arc<RecordingEvents>,
    }

    fn harness(submission: FakeSubmission) -> Harness {
        harness_with_events(submission, RecordingEvents::default())
    }

    fn harness_with_events(submission: FakeSubmission, events: RecordingEvents) -> Harness {
        let submission = Arc::new(submission);
        let handles = Arc::new(FakeHandles::default());
        let events = Arc::new(events);
        let orchestrator = Arc::new(WizardOrchestrator::new(
            AccessToken::new("test-token"),
            Arc::new(SubmitApplication::new(submission.clone())),
            Arc::new(ResolveFilePreview::new(handles.clone())),
            events.clone(),
        ));
        Harness {
            orchestrator,
            submission,
            handles,
            events,
        }
    }

    fn pdf(name: &str) -> AttachedFile {
        AttachedFile::new(name, "application/pdf", b"%PDF-1.4".to_vec())
    }

    fn png(name: &str) -> AttachedFile {
        AttachedFile::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    async fn fill_step0(wizard: &WizardOrchestrator) {
        for update in [
            DraftUpdate::text(TextField::FullName, "Jane Doe"),
            DraftUpdate::text(TextField::ContactAddress, "12 Main St"),
            DraftUpdate::Lga(Some(Lga::Ikwo)),
        ] {
            wizard.update_field(update).await.unwrap();
        }
    }

    async fn fill_step1(wizard: &WizardOrchestrator) {
        for update in [
            DraftUpdate::text(TextField::CourseOfStudy, "Medicine"),
            DraftUpdate::text(TextField::PresentQualification, "WAEC"),
            DraftUpdate::text(TextField::QualificationDesired, "MBBS"),
        ] {
            wizard.update_field(update).await.unwrap();
        }
    }

    async fn fill_step2_without_transcript(wizard: &WizardOrchestrator) {
        for update in [
            DraftUpdate::text(TextField::NextOfKinName, "John Doe"),
            DraftUpdate::text(TextField::NextOfKinPhone, "08030000000"),
            DraftUpdate::text(TextField::NextOfKinRelationship, "Brother"),
            DraftUpdate::text(TextField::PhoneNumber, "08031111111"),
            DraftUpdate::attach(AttachmentSlot::PassportPhoto, png("me.png")),
            DraftUpdate::attach(AttachmentSlot::LgaLetter, pdf("letter.pdf")),
        ] {
            wizard.update_field(update).await.unwrap();
        }
    }

    /// Walks a complete draft to the review step.
    async fn reach_review(wizard: &WizardOrchestrator) {
        wizard.start(true).await.unwrap();
        fill_step0(wizard).await;
        wizard.continue_step().await.unwrap();
        fill_step1(wizard).await;
        wizard.continue_step().await.unwrap();
        fill_step2_without_transcript(wizard).await;
        wizard
            .update_field(DraftUpdate::attach(AttachmentSlot::Transcript, pdf("t.pdf")))
            .await
            .unwrap();
        let state = wizard.continue_step().await.unwrap();
        assert_eq!(state, WizardState::editing(WizardStep::ReviewAndSubmit));
    }

    #[tokio::test]
    async fn closed_scholarship_exits_to_dashboard_without_rendering_a_step() {
        let h = harness(FakeSubmission::replying(Reply::Created));

        let result = h.orchestrator.start(false).await;

        assert_eq!(result, Err(WizardError::NoOpenScholarship));
        assert_eq!(h.orchestrator.get_state().await, WizardState::Closed);
        assert_eq!(h.events.errors(), vec!["No ongoing scholarship!"]);
        assert_eq!(
            *h.events.navigations.lock().unwrap(),
            vec![(Route::Dashboard, Duration::ZERO)]
        );
        assert!(h
            .events
            .states
            .lock()
            .unwrap()
            .iter()
            .all(|state| state.step().is_none()));
        assert_eq!(h.orchestrator.continue_step().await, Err(WizardError::Closed));
    }

    #[tokio::test]
    async fn complete_step0_advances_without_errors() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();
        fill_step0(&h.orchestrator).await;

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(state, WizardState::editing(WizardStep::AcademicInformation));
        assert!(h.events.errors().is_empty());
        assert_eq!(
            h.orchestrator.step_state().await.step(),
            WizardStep::AcademicInformation
        );
    }

    #[tokio::test]
    async fn each_missing_field_is_reported_and_step_is_kept() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();
        h.orchestrator
            .update_field(DraftUpdate::text(TextField::FullName, "Jane Doe"))
            .await
            .unwrap();

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(state.step(), Some(WizardStep::BasicInformation));
        assert_eq!(
            h.events.errors(),
            vec!["Contact Address is required.", "LGA is required."]
        );
    }

    #[tokio::test]
    async fn missing_transcript_blocks_identification_step() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();
        fill_step0(&h.orchestrator).await;
        h.orchestrator.continue_step().await.unwrap();
        fill_step1(&h.orchestrator).await;
        h.orchestrator.continue_step().await.unwrap();
        fill_step2_without_transcript(&h.orchestrator).await;

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(state.step(), Some(WizardStep::Identification));
        let errors = h.events.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Transcript"));
    }

    #[tokio::test]
    async fn back_moves_one_step_without_validation() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();
        fill_step0(&h.orchestrator).await;
        h.orchestrator.continue_step().await.unwrap();

        let state = h.orchestrator.back().await.unwrap();
        assert_eq!(state, WizardState::editing(WizardStep::BasicInformation));

        let state = h.orchestrator.back().await.unwrap();
        assert_eq!(state, WizardState::editing(WizardStep::BasicInformation));
        assert!(h.events.errors().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_resets_draft_and_signals_dashboard() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        reach_review(&h.orchestrator).await;

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(state, WizardState::Succeeded);
        assert!(h.orchestrator.draft().await.is_empty());
        assert!(!h.orchestrator.is_submitting());
        assert_eq!(h.handles.live(), 0);
        assert_eq!(
            *h.events.navigations.lock().unwrap(),
            vec![(Route::Dashboard, SUCCESS_REDIRECT_DELAY)]
        );
        assert!(h
            .events
            .states
            .lock()
            .unwrap()
            .contains(&WizardState::Submitting));

        let payloads = h.submission.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].len(), 14);
        assert_eq!(payloads[0].text("fullname"), Some("Jane Doe"));
        assert_eq!(payloads[0].text("next_of_kin.name"), Some("John Doe"));
    }

    #[tokio::test]
    async fn rejected_submission_keeps_draft_and_shows_server_message() {
        let h = harness(FakeSubmission::replying(Reply::Rejected(
            400,
            Some("Duplicate reference"),
        )));
        reach_review(&h.orchestrator).await;
        let draft_before = h.orchestrator.draft().await;

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(
            state,
            WizardState::Failed {
                message: "Duplicate reference".into()
            }
        );
        assert_eq!(state.step(), Some(WizardStep::ReviewAndSubmit));
        assert_eq!(h.events.errors(), vec!["Duplicate reference"]);
        assert_eq!(h.orchestrator.draft().await, draft_before);
        assert!(!h.orchestrator.is_submitting());
        assert!(h.events.navigations.lock().unwrap().is_empty());

        h.submission.set_reply(Reply::Created);
        let retried = h.orchestrator.continue_step().await.unwrap();
        assert_eq!(retried, WizardState::Succeeded);
        assert_eq!(h.submission.calls(), 2);
    }

    #[tokio::test]
    async fn unreachable_api_uses_generic_message_and_clears_busy_flag() {
        let h = harness(FakeSubmission::replying(Reply::Unreachable));
        reach_review(&h.orchestrator).await;
        h.events.clear_notices();

        let state = h.orchestrator.continue_step().await.unwrap();

        assert_eq!(
            state,
            WizardState::Failed {
                message: "Submission failed.".into()
            }
        );
        assert_eq!(h.events.errors(), vec!["Submission failed."]);
        assert!(!h.orchestrator.is_submitting());
        h.orchestrator
            .update_field(DraftUpdate::text(TextField::InstitutionOfAward, "EBSU"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn second_submit_is_rejected_while_first_is_pending() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let h = harness(FakeSubmission::gated(entered.clone(), release.clone()));
        reach_review(&h.orchestrator).await;

        let first = {
            let orchestrator = h.orchestrator.clone();
            tokio::spawn(async move { orchestrator.continue_step().await })
        };
        entered.notified().await;

        assert!(h.orchestrator.is_submitting());
        assert_eq!(
            h.orchestrator.continue_step().await,
            Err(WizardError::SubmissionInFlight)
        );
        assert_eq!(
            h.orchestrator
                .update_field(DraftUpdate::text(TextField::FullName, "Someone Else"))
                .await,
            Err(WizardError::SubmissionInFlight)
        );

        release.notify_one();
        let outcome = first.await.unwrap().unwrap();

        assert_eq!(outcome, WizardState::Succeeded);
        assert_eq!(h.submission.calls(), 1);
    }

    #[tokio::test]
    async fn submit_trigger_is_rejected_as_soon_as_submitting_is_shown() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let h = harness_with_events(
            FakeSubmission::replying(Reply::Rejected(400, Some("Duplicate reference"))),
            RecordingEvents::gated_on_submitting(entered.clone(), release.clone()),
        );
        reach_review(&h.orchestrator).await;

        let first = {
            let orchestrator = h.orchestrator.clone();
            tokio::spawn(async move { orchestrator.continue_step().await })
        };
        entered.notified().await;

        assert!(h.orchestrator.is_submitting());
        assert_eq!(
            h.orchestrator.continue_step().await,
            Err(WizardError::SubmissionInFlight)
        );

        release.notify_one();
        let outcome = first.await.unwrap().unwrap();

        assert_eq!(
            outcome,
            WizardState::Failed {
                message: "Duplicate reference".into()
            }
        );
        assert_eq!(h.submission.calls(), 1);
    }

    #[tokio::test]
    async fn trigger_queued_behind_a_failed_submission_does_not_resend() {
        let h = harness(FakeSubmission::replying(Reply::Rejected(
            400,
            Some("Duplicate reference"),
        )));
        reach_review(&h.orchestrator).await;

        let held = h.orchestrator.context.acquire_dispatch_lock().await;
        let first = {
            let orchestrator = h.orchestrator.clone();
            tokio::spawn(async move { orchestrator.continue_step().await })
        };
        let second = {
            let orchestrator = h.orchestrator.clone();
            tokio::spawn(async move { orchestrator.continue_step().await })
        };
        // Let both triggers queue on the dispatch lock.
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        drop(held);

        assert!(matches!(
            first.await.unwrap(),
            Ok(WizardState::Failed { .. })
        ));
        assert_eq!(second.await.unwrap(), Err(WizardError::SubmissionInFlight));
        assert_eq!(h.submission.calls(), 1);

        // A fresh trigger after the failure is a deliberate retry.
        h.submission.set_reply(Reply::Created);
        assert_eq!(
            h.orchestrator.continue_step().await,
            Ok(WizardState::Succeeded)
        );
        assert_eq!(h.submission.calls(), 2);
    }

    #[tokio::test]
    async fn replacing_an_attachment_releases_the_previous_preview() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();

        h.orchestrator
            .update_field(DraftUpdate::attach(AttachmentSlot::Transcript, pdf("a.pdf")))
            .await
            .unwrap();
        let first = h.orchestrator.preview(AttachmentSlot::Transcript).await;
        assert_eq!(h.handles.live(), 1);

        h.orchestrator
            .update_field(DraftUpdate::attach(AttachmentSlot::Transcript, pdf("b.pdf")))
            .await
            .unwrap();
        let second = h.orchestrator.preview(AttachmentSlot::Transcript).await;
        assert_eq!(h.handles.live(), 1);
        assert_ne!(first, second);

        h.orchestrator
            .update_field(DraftUpdate::attach(AttachmentSlot::PassportPhoto, png("me.png")))
            .await
            .unwrap();
        assert!(matches!(
            h.orchestrator.preview(AttachmentSlot::PassportPhoto).await,
            Some(FilePreview::Image { .. })
        ));

        h.orchestrator
            .update_field(DraftUpdate::detach(AttachmentSlot::Transcript))
            .await
            .unwrap();
        assert_eq!(h.handles.live(), 0);
        assert_eq!(h.orchestrator.preview(AttachmentSlot::Transcript).await, None);
    }

    #[tokio::test]
    async fn close_releases_every_preview() {
        let h = harness(FakeSubmission::replying(Reply::Created));
        h.orchestrator.start(true).await.unwrap();
        h.orchestrator
            .update_field(DraftUpdate::attach(AttachmentSlot::Transcript, pdf("t.pdf")))
            .await
            .unwrap();
        h.orchestrator
            .update_field(DraftUpdate::attach(AttachmentSlot::LgaLetter, pdf("l.pdf")))
            .await
            .unwrap();
        assert_eq!(h.handles.live(), 2);

        let state = h.orchestrator.close().await;

        assert_eq!(state, WizardState::Closed);
        assert_eq!(h.handles.live(), 0);
        assert_eq!(
            h.orchestrator
                .update_field(DraftUpdate::text(TextField::FullName, "x"))
                .await,
            Err(WizardError::Closed)
        );
    }
}
