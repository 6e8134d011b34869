use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockito::{Matcher, Server, ServerGuard};
use tempfile::TempDir;

use sp_app::WizardError;
use sp_cli::bootstrap::{wire_dependencies, AppDeps};
use sp_core::config::AppConfig;
use sp_core::ports::WizardEventPort;
use sp_core::wizard::{Route, WizardNotice, SUCCESS_REDIRECT_DELAY};
use sp_core::{
    AttachedFile, AttachmentSlot, DraftUpdate, Lga, LoginCredentials, TextField, WizardState,
};
use sp_infra::fs::AppDirs;

#[derive(Default)]
struct RecordingEvents {
    notices: Mutex<Vec<WizardNotice>>,
    navigations: Mutex<Vec<(Route, Duration)>>,
}

#[async_trait]
impl WizardEventPort for RecordingEvents {
    async fn emit_state_changed(&self, _state: WizardState) {}

    async fn notify(&self, notice: WizardNotice) {
        self.notices.lock().unwrap().push(notice);
    }

    async fn navigate(&self, route: Route, delay: Duration) {
        self.navigations.lock().unwrap().push((route, delay));
    }
}

impl RecordingEvents {
    fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }
}

fn wire(server: &ServerGuard, data_dir: &Path) -> AppDeps {
    let config = AppConfig {
        api_base_url: format!("{}/api/v1", server.url()),
        api_timeout_secs: 5,
        data_dir: data_dir.to_path_buf(),
    };
    let app_dirs = AppDirs {
        data_root: data_dir.to_path_buf(),
        config_root: data_dir.to_path_buf(),
    };
    wire_dependencies(&config, &app_dirs).unwrap()
}

async fn mock_login(server: &mut ServerGuard) {
    server
        .mock("POST", "/api/v1/users/login")
        .with_status(200)
        .with_body(r#"{"token":"tok-9","data":{"_id":"u1","email":"jane@example.com"}}"#)
        .create_async()
        .await;
}

async fn mock_open_session(server: &mut ServerGuard, body: &str) {
    server
        .mock("GET", "/api/v1/applications")
        .match_header("authorization", "Bearer tok-9")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
}

async fn log_in(deps: &AppDeps) {
    deps.login()
        .execute(LoginCredentials {
            email: "jane@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
}

fn complete_updates() -> Vec<DraftUpdate> {
    vec![
        DraftUpdate::text(TextField::FullName, "Jane Doe"),
        DraftUpdate::text(TextField::ContactAddress, "12 Main St"),
        DraftUpdate::Lga(Some(Lga::EzzaNorth)),
        DraftUpdate::text(TextField::CourseOfStudy, "Law"),
        DraftUpdate::text(TextField::PresentQualification, "WAEC"),
        DraftUpdate::text(TextField::QualificationDesired, "LLB"),
        DraftUpdate::text(TextField::NextOfKinName, "John Doe"),
        DraftUpdate::text(TextField::NextOfKinPhone, "08030000000"),
        DraftUpdate::text(TextField::NextOfKinRelationship, "Brother"),
        DraftUpdate::text(TextField::PhoneNumber, "08031111111"),
        DraftUpdate::attach(
            AttachmentSlot::PassportPhoto,
            AttachedFile::new("me.png", "image/png", b"png".to_vec()),
        ),
        DraftUpdate::attach(
            AttachmentSlot::Transcript,
            AttachedFile::new("transcript.pdf", "application/pdf", b"%PDF".to_vec()),
        ),
        DraftUpdate::attach(
            AttachmentSlot::LgaLetter,
            AttachedFile::new("letter.pdf", "application/pdf", b"%PDF".to_vec()),
        ),
    ]
}

#[tokio::test]
async fn login_persists_session_across_wiring() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    let data_dir = TempDir::new().unwrap();

    log_in(&wire(&server, data_dir.path())).await;

    let rewired = wire(&server, data_dir.path());
    let session = rewired.get_auth_session().execute().await.unwrap().unwrap();
    assert_eq!(session.token.expose(), "tok-9");

    rewired.logout().execute().await.unwrap();
    assert!(rewired.get_auth_session().execute().await.unwrap().is_none());
}

#[tokio::test]
async fn closed_scholarship_sends_applicant_to_dashboard() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    mock_open_session(&mut server, r#"{"data":null}"#).await;
    let data_dir = TempDir::new().unwrap();
    let deps = wire(&server, data_dir.path());
    log_in(&deps).await;

    let token = deps.get_auth_session().execute().await.unwrap().unwrap().token;
    let availability = deps.check_scholarship_open().execute(&token).await;
    let events = Arc::new(RecordingEvents::default());
    let wizard = deps.wizard(token, events.clone());

    let result = wizard.start(availability.is_open()).await;

    assert_eq!(result, Err(WizardError::NoOpenScholarship));
    assert_eq!(events.messages(), vec!["No ongoing scholarship!"]);
    assert_eq!(
        *events.navigations.lock().unwrap(),
        vec![(Route::Dashboard, Duration::ZERO)]
    );
}

#[tokio::test]
async fn full_application_is_submitted_as_multipart() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    mock_open_session(&mut server, r#"{"data":{"_id":"s1","name":"2026"}}"#).await;
    let submit = server
        .mock("POST", "/api/v1/scholarships")
        .match_header("authorization", "Bearer tok-9")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="lga"\s+Ezza North"#.into()),
            Matcher::Regex(r#"name="next_of_kin\.name"\s+John Doe"#.into()),
            Matcher::Regex(r#"name="statement_of_result""#.into()),
            Matcher::Regex(r#"filename="letter.pdf""#.into()),
        ]))
        .with_status(201)
        .expect(1)
        .create_async()
        .await;
    let data_dir = TempDir::new().unwrap();
    let deps = wire(&server, data_dir.path());
    log_in(&deps).await;

    let token = deps.get_auth_session().execute().await.unwrap().unwrap().token;
    let availability = deps.check_scholarship_open().execute(&token).await;
    assert!(availability.is_open());

    let events = Arc::new(RecordingEvents::default());
    let wizard = deps.wizard(token, events.clone());
    wizard.start(true).await.unwrap();
    for update in complete_updates() {
        wizard.update_field(update).await.unwrap();
    }
    for _ in 0..3 {
        wizard.continue_step().await.unwrap();
    }

    let state = wizard.continue_step().await.unwrap();

    submit.assert_async().await;
    assert_eq!(state, WizardState::Succeeded);
    assert!(wizard.draft().await.is_empty());
    assert_eq!(events.messages(), vec!["Application submitted successfully!"]);
    assert_eq!(
        *events.navigations.lock().unwrap(),
        vec![(Route::Dashboard, SUCCESS_REDIRECT_DELAY)]
    );
}

#[tokio::test]
async fn rejected_application_keeps_the_draft() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    server
        .mock("POST", "/api/v1/scholarships")
        .with_status(400)
        .with_body(r#"{"message":"Duplicate reference"}"#)
        .create_async()
        .await;
    let data_dir = TempDir::new().unwrap();
    let deps = wire(&server, data_dir.path());
    log_in(&deps).await;

    let token = deps.get_auth_session().execute().await.unwrap().unwrap().token;
    let events = Arc::new(RecordingEvents::default());
    let wizard = deps.wizard(token, events.clone());
    wizard.start(true).await.unwrap();
    for update in complete_updates() {
        wizard.update_field(update).await.unwrap();
    }
    for _ in 0..3 {
        wizard.continue_step().await.unwrap();
    }

    let state = wizard.continue_step().await.unwrap();

    assert_eq!(
        state,
        WizardState::Failed {
            message: "Duplicate reference".into()
        }
    );
    assert_eq!(wizard.draft().await.full_name, "Jane Doe");
    assert_eq!(events.messages(), vec!["Duplicate reference"]);
    assert!(events.navigations.lock().unwrap().is_empty());
}
