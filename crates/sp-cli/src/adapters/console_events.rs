//! Terminal rendering of wizard signals.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use sp_core::ports::WizardEventPort;
use sp_core::wizard::{NoticeLevel, Route, WizardNotice};
use sp_core::WizardState;

/// Prints notices as they arrive and remembers the last navigation request.
pub struct ConsoleWizardEvents<W: Write + Send> {
    out: Mutex<W>,
    navigation: Mutex<Option<(Route, Duration)>>,
}

impl ConsoleWizardEvents<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleWizardEvents<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            navigation: Mutex::new(None),
        }
    }

    /// The pending navigation, cleared on read.
    pub fn take_navigation(&self) -> Option<(Route, Duration)> {
        match self.navigation.lock() {
            Ok(mut navigation) => navigation.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write wizard output");
        }
    }
}

#[cfg(test)]
impl ConsoleWizardEvents<Vec<u8>> {
    pub fn output(&self) -> String {
        let out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        String::from_utf8_lossy(&out).into_owned()
    }
}

pub fn notice_line(notice: &WizardNotice) -> String {
    match notice.level {
        NoticeLevel::Success => format!("✔ {}", notice.message),
        NoticeLevel::Error => format!("✖ {}", notice.message),
    }
}

#[async_trait]
impl<W: Write + Send> WizardEventPort for ConsoleWizardEvents<W> {
    async fn emit_state_changed(&self, state: WizardState) {
        debug!(?state, "wizard state changed");
    }

    async fn notify(&self, notice: WizardNotice) {
        self.write_line(&notice_line(&notice));
    }

    async fn navigate(&self, route: Route, delay: Duration) {
        debug!(?route, ?delay, "navigation requested");
        let mut navigation = match self.navigation.lock() {
            Ok(navigation) => navigation,
            Err(poisoned) => poisoned.into_inner(),
        };
        *navigation = Some((route, delay));
    }
}
