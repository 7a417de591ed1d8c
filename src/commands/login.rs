//! Login command - authenticate and store the session token

use anyhow::Result;
use colored::Colorize;

use crate::auth::AuthSession;

/// Run the login command
pub fn run(email: Option<&str>, password: Option<&str>, server: Option<&str>) -> Result<()> {
    let base_url = super::base_url(server)?;

    let email = match email {
        Some(email) => email.to_string(),
        None => super::prompt("Email")?,
    };
    let password = match password {
        Some(password) => password.to_string(),
        None => super::prompt("Password")?,
    };

    let mut session = AuthSession::connect(&base_url)?;
    let user = session.login(&email, &password)?;

    println!(
        "{} Logged in as {} <{}>",
        "✓".green(),
        user.name.bold(),
        user.email
    );
    Ok(())
}
