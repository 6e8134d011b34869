//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP client, credential store, preview handles)
//! - ✅ Fill empty configuration values with defaults
//! - ✅ Hand out use cases built on Port traits
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on sp-infra + sp-app simultaneously.**
//! > **这是唯一允许同时依赖 sp-infra 和 sp-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sp_app::usecases::{
    CheckScholarshipOpen, GetAuthSession, Login, Logout, ResolveFilePreview, SubmitApplication,
};
use sp_app::WizardOrchestrator;
use sp_core::config::{AppConfig, DEFAULT_API_BASE_URL};
use sp_core::ports::{
    ApplicationSubmissionPort, AuthPort, PreviewHandlePort, ScholarshipSessionPort,
    SessionStorePort, WizardEventPort,
};
use sp_core::AccessToken;
use sp_infra::fs::AppDirs;
use sp_infra::{FileSessionRepository, InMemoryPreviewHandles, ScholarshipApiClient};
use tracing::info;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub data_dir: PathBuf,
}

impl EffectiveSettings {
    pub fn from_config(config: &AppConfig, app_dirs: &AppDirs) -> Self {
        let api_base_url = if config.api_base_url.trim().is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            config.api_base_url.trim().to_string()
        };
        let timeout_secs = match config.api_timeout_secs {
            0 => DEFAULT_TIMEOUT_SECS,
            secs => secs,
        };
        let data_dir = if config.data_dir.as_os_str().is_empty() {
            app_dirs.data_root.clone()
        } else {
            config.data_dir.clone()
        };

        Self {
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            data_dir,
        }
    }
}

/// Port implementations shared by every command.
#[derive(Clone)]
pub struct AppDeps {
    pub submission: Arc<dyn ApplicationSubmissionPort>,
    pub auth: Arc<dyn AuthPort>,
    pub scholarship_sessions: Arc<dyn ScholarshipSessionPort>,
    pub session_store: Arc<dyn SessionStorePort>,
    pub preview_handles: Arc<dyn PreviewHandlePort>,
}

impl AppDeps {
    pub fn login(&self) -> Login {
        Login::new(self.auth.clone(), self.session_store.clone())
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.session_store.clone())
    }

    pub fn get_auth_session(&self) -> GetAuthSession {
        GetAuthSession::new(self.session_store.clone())
    }

    pub fn check_scholarship_open(&self) -> CheckScholarshipOpen {
        CheckScholarshipOpen::new(self.scholarship_sessions.clone())
    }

    /// A fresh wizard owning a fresh draft.
    pub fn wizard(
        &self,
        token: AccessToken,
        event_port: Arc<dyn WizardEventPort>,
    ) -> WizardOrchestrator {
        WizardOrchestrator::new(
            token,
            Arc::new(SubmitApplication::new(self.submission.clone())),
            Arc::new(ResolveFilePreview::new(self.preview_handles.clone())),
            event_port,
        )
    }
}

/// Build every adapter from configuration.
pub fn wire_dependencies(config: &AppConfig, app_dirs: &AppDirs) -> anyhow::Result<AppDeps> {
    let settings = EffectiveSettings::from_config(config, app_dirs);
    info!(
        api_base_url = %settings.api_base_url,
        data_dir = %settings.data_dir.display(),
        "wiring dependencies"
    );

    let api = Arc::new(ScholarshipApiClient::new(
        settings.api_base_url.clone(),
        settings.api_timeout,
    )?);

    Ok(AppDeps {
        submission: api.clone(),
        auth: api.clone(),
        scholarship_sessions: api,
        session_store: Arc::new(FileSessionRepository::with_defaults(settings.data_dir)),
        preview_handles: Arc::new(InMemoryPreviewHandles::new()),
    })
}
