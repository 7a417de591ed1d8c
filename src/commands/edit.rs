//! Edit command - round-trip a book's fields through $EDITOR

use anyhow::{anyhow, Context, Result};

use crate::editor::{
    book_to_toml, compute_changes, format_diff, open_in_editor, patch_from, toml_to_fields,
    BookFields,
};

/// Run the edit command
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

    let original = BookFields::from_book(&book);
    let toml = book_to_toml(&book);
    let edited = open_in_editor(&toml)?;

    let new_fields = toml_to_fields(&edited).context("Failed to parse edited TOML")?;
    new_fields.validate()?;

    let changes = compute_changes(&original, &new_fields);
    println!("{}", format_diff(&book.title, &changes));

    if changes.is_empty() {
        return Ok(());
    }

    if !yes && !super::confirm(&format!("Apply these changes to {}?", book.title))? {
        println!("Aborted.");
        return Ok(());
    }

    let patch = patch_from(&original, &new_fields);
    if !catalog.update(id, patch)? {
        std::process::exit(1);
    }
    Ok(())
}
