use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info_span, warn, Instrument};

use sp_core::application::{MultipartPayload, PartBody};
use sp_core::ports::{
    ApplicationSubmissionPort, AuthError, AuthPort, ScholarshipSessionPort, SubmissionError,
};
use sp_core::{AccessToken, AuthSession, LoginCredentials, ScholarshipSession, UserProfile};

const SCHOLARSHIPS_PATH: &str = "/scholarships";
const LOGIN_PATH: &str = "/users/login";
const APPLICATIONS_PATH: &str = "/applications";

/// Error body shape shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    data: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct CurrentSessionResponse {
    #[serde(default)]
    data: serde_json::Value,
}

/// reqwest-backed client for the scholarship board API.
///
/// 奖学金委员会 API 的 HTTP 客户端。
pub struct ScholarshipApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScholarshipApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build_form(payload: MultipartPayload) -> Result<Form, SubmissionError> {
        let mut form = Form::new();
        for part in payload.into_parts() {
            form = match part.body {
                PartBody::Text(value) => form.text(part.name, value),
                PartBody::File(file) => {
                    let body = Part::bytes(file.bytes().to_vec())
                        .file_name(file.file_name().to_string())
                        .mime_str(file.media_type())
                        .map_err(|e| {
                            SubmissionError::Transport(format!(
                                "invalid media type for {}: {e}",
                                part.name
                            ))
                        })?;
                    form.part(part.name, body)
                }
            };
        }
        Ok(form)
    }
}

/// The server's `message`, if the body carries one.
async fn error_message(response: Response) -> Option<String> {
    let text = response.text().await.ok()?;
    serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

#[async_trait]
impl ApplicationSubmissionPort for ScholarshipApiClient {
    async fn submit_application(
        &self,
        token: &AccessToken,
        payload: MultipartPayload,
    ) -> Result<(), SubmissionError> {
        let url = self.endpoint(SCHOLARSHIPS_PATH);
        let span = info_span!("infra.http.submit_application", url = %url, parts = payload.len());
        async {
            let form = Self::build_form(payload)?;
            let response = self
                .http
                .post(&url)
                .bearer_auth(token.expose())
                .multipart(form)
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                debug!(status = status.as_u16(), "application accepted");
                return Ok(());
            }

            let message = error_message(response).await;
            warn!(status = status.as_u16(), message = ?message, "application rejected");
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl AuthPort for ScholarshipApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, AuthError> {
        let url = self.endpoint(LOGIN_PATH);
        let span = info_span!("infra.http.login", email = %credentials.email);
        async {
            let response = self
                .http
                .post(&url)
                .json(credentials)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let message = error_message(response).await;
                warn!(status = status.as_u16(), "login rejected");
                return Err(AuthError::Rejected {
                    status: status.as_u16(),
                    message,
                });
            }

            let body: LoginResponse = response
                .json()
                .await
                .map_err(|e| AuthError::Transport(format!("invalid login response: {e}")))?;
            let token = body
                .token
                .filter(|token| !token.is_empty())
                .ok_or(AuthError::MissingToken)?;

            Ok(AuthSession::new(AccessToken::new(token), body.data))
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl ScholarshipSessionPort for ScholarshipApiClient {
    async fn current_session(
        &self,
        token: &AccessToken,
    ) -> anyhow::Result<Option<ScholarshipSession>> {
        let url = self.endpoint(APPLICATIONS_PATH);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("Scholarship session lookup failed with status {status}");
        }

        let body: CurrentSessionResponse = response
            .json()
            .await
            .context("Failed to parse scholarship session response")?;
        Ok(ScholarshipSession::from_api_data(&body.data))
    }
}
