use crate::bootstrap::AppDeps;

pub async fn run(deps: &AppDeps) -> anyhow::Result<()> {
    let Some(session) = deps.get_auth_session().execute().await? else {
        println!("Not logged in.");
        return Ok(());
    };

    match &session.user {
        Some(user) => println!("Logged in as {} <{}>", user.display_name(), user.email),
        None => println!("Logged in."),
    }

    let availability = deps.check_scholarship_open().execute(&session.token).await;
    match availability.session {
        Some(open) => println!(
            "Open scholarship: {}",
            open.label()
        ),
        None => println!("No ongoing scholarship!"),
    }
    Ok(())
}
