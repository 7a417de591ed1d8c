//! Rm command - delete a book from the library

use anyhow::{anyhow, Result};
use colored::Colorize;

/// Run the rm command
pub fn run(id: &str, yes: bool, server: Option<&str>, quiet: bool) -> Result<()> {
    let mut catalog = super::open_catalog(server, quiet)?;
    if !catalog.load() {
        std::process::exit(1);
    }

    let book = catalog
        .books()
        .iter()
        .find(|book| book.id == id)
        .cloned()
        .ok_or_else(|| anyhow!("No book with id {} in your library", id))?;

    if !yes {
        let question = format!(
            "Remove {} by {} from your library?",
            book.title.bold(),
            book.author
        );
        if !super::confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    if !catalog.remove(id) {
        std::process::exit(1);
    }
    Ok(())
}
