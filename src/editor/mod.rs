//! $EDITOR round-trip for the add/edit flows

mod diff;
mod toml;

pub use diff::{compute_changes, format_diff, patch_from, FieldChange};
pub use toml::{book_to_toml, toml_to_fields, BookFields};

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Write `content` to a temp file, open it in $EDITOR (falling back to
/// $VISUAL, then vi), and return the edited contents.
pub fn open_in_editor(content: &str) -> Result<String> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    let temp_dir = std::env::temp_dir();
    let temp_path = temp_dir.join("bookshelfctl_edit.toml");

    std::fs::write(&temp_path, content).context("Failed to create temp file for editing")?;

    let status = Command::new(&editor)
        .arg(&temp_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;

    if !status.success() {
        bail!("Editor exited with error");
    }

    let edited = std::fs::read_to_string(&temp_path).context("Failed to read edited file")?;

    let _ = std::fs::remove_file(&temp_path);

    Ok(edited)
}
