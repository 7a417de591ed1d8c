//! Register command - create an account and store the session token

use anyhow::Result;
use colored::Colorize;

use crate::auth::AuthSession;

/// Run the register command
pub fn run(
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    server: Option<&str>,
) -> Result<()> {
    let base_url = super::base_url(server)?;

    let name = match name {
        Some(name) => name.to_string(),
        None => super::prompt("Name")?,
    };
    let email = match email {
        Some(email) => email.to_string(),
        None => super::prompt("Email")?,
    };
    let password = match password {
        Some(password) => password.to_string(),
        None => super::prompt("Password")?,
    };

    let mut session = AuthSession::connect(&base_url)?;
    let user = session.register(&name, &email, &password)?;

    println!(
        "{} Account created for {} <{}>",
        "✓".green(),
        user.name.bold(),
        user.email
    );
    Ok(())
}
