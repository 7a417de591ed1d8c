use anyhow::Result;

use crate::book::SUGGESTED_GENRES;

/// Run the genres command - list the suggested genre values
pub fn run() -> Result<()> {
    println!("Suggested genres:");
    println!();

    for genre in SUGGESTED_GENRES {
        println!("  {}", genre);
    }

    println!();
    println!("Genre is free text; any other value works too.");
    println!("The list --genre filter matches the stored value exactly.");

    Ok(())
}
