//! Subcommand handlers.

mod apply;
mod login;
mod logout;
mod status;

use anyhow::Context;

use crate::bootstrap::AppDeps;
use crate::cli::Command;
use sp_core::AccessToken;

pub async fn dispatch(command: Command, deps: AppDeps) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => login::run(&deps, email, password).await,
        Command::Logout => logout::run(&deps).await,
        Command::Status => status::run(&deps).await,
        Command::Apply => apply::run(&deps).await,
    }
}

/// Token of the stored login, or an error telling the user to log in.
async fn require_token(deps: &AppDeps) -> anyhow::Result<AccessToken> {
    let session = deps
        .get_auth_session()
        .execute()
        .await
        .context("Failed to read stored session")?;
    match session {
        Some(session) => Ok(session.token),
        None => anyhow::bail!("Not logged in. Run `scholarship-portal login --email <EMAIL>` first."),
    }
}
