use std::time::Duration;

/// Destinations the wizard hands off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl WizardNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Assemble the draft and call the create-application endpoint.
    SubmitApplication,
    /// Discard the draft and every preview.
    ResetDraft,
    /// Show a notice.
    Notify(WizardNotice),
    /// Hand navigation to the caller. The wizard never waits for `delay`.
    Navigate { route: Route, delay: Duration },
}
