pub mod add;
pub mod edit;
pub mod genres;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;
pub mod rm;
pub mod show;
pub mod whoami;

use anyhow::{anyhow, Result};
use std::io::{self, Write};

use crate::auth::TokenStore;
use crate::catalog::{BookCatalog, TermNotifier};
use crate::config::Config;
use crate::gateway::HttpGateway;

/// Load the stored session token. Book commands are gated on being logged
/// in; the catalog itself never checks this.
pub(crate) fn require_token() -> Result<String> {
    TokenStore::new()?
        .load()?
        .ok_or_else(|| anyhow!("Not logged in. Run 'bookshelfctl login' first"))
}

/// Resolve the server base URL from config and the --server override
pub(crate) fn base_url(cli_override: Option<&str>) -> Result<String> {
    Ok(Config::load()?.base_url(cli_override))
}

/// Wire a catalog against the configured server with the stored token
pub(crate) fn open_catalog(server: Option<&str>, quiet: bool) -> Result<BookCatalog> {
    let base_url = base_url(server)?;
    let token = require_token()?;
    let gateway = HttpGateway::new(&base_url, Some(token))?;
    let notifier = TermNotifier::new(quiet);
    Ok(BookCatalog::new(Box::new(gateway), Box::new(notifier)))
}

/// Prompt for a single line on stdin
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// y/N confirmation prompt
pub(crate) fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();
    Ok(input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes"))
}
