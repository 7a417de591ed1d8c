use anyhow::Result;
use colored::Colorize;

use crate::auth::AuthSession;

/// Run the whoami command - validate the stored token and show the profile
pub fn run(json: bool, server: Option<&str>) -> Result<()> {
    let base_url = super::base_url(server)?;
    let mut session = AuthSession::connect(&base_url)?;
    session.restore()?;

    let Some(user) = session.current_user() else {
        println!("Not logged in.");
        std::process::exit(1);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("{} <{}>", user.name.bold(), user.email);
        println!("  id: {}", user.id.dimmed());
    }

    Ok(())
}
