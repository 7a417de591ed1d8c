use anyhow::Result;

use crate::auth::AuthSession;

/// Run the logout command - forget the stored session token
pub fn run(server: Option<&str>) -> Result<()> {
    let base_url = super::base_url(server)?;
    let mut session = AuthSession::connect(&base_url)?;
    session.logout()?;

    println!("Logged out.");
    Ok(())
}
