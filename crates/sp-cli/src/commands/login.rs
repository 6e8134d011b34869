use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use tracing::info;

use crate::bootstrap::AppDeps;
use sp_core::LoginCredentials;

pub async fn run(deps: &AppDeps, email: String, password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(password) => password,
        None => tokio::task::block_in_place(|| {
            Password::with_theme(&ColorfulTheme::default())
                .with_prompt("Password")
                .interact()
        })?,
    };

    let session = deps
        .login()
        .execute(LoginCredentials { email, password })
        .await?;

    let name = session
        .user
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "applicant".to_string());
    info!("logged in");
    println!("✔ Logged in as {name}");
    Ok(())
}
