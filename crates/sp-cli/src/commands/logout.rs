use crate::bootstrap::AppDeps;

pub async fn run(deps: &AppDeps) -> anyhow::Result<()> {
    deps.logout().execute().await?;
    println!("Logged out.");
    Ok(())
}
