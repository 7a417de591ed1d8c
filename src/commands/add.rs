//! Add command - create a book in the library

use anyhow::Result;

use crate::book::NewBook;
use crate::editor::BookFields;

/// Run the add command
#[allow(clippy::too_many_arguments)]
pub fn run(
    title: &str,
    author: &str,
    genre: &str,
    year: i32,
    isbn: &str,
    cover: Option<&str>,
    description: Option<&str>,
    server: Option<&str>,
    quiet: bool,
) -> Result<()> {
    // Form validation happens here, before anything touches the network
    let fields = BookFields {
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        genre: Some(genre.to_string()),
        publication_year: Some(year),
        isbn: Some(isbn.to_string()),
        cover_image: cover.map(String::from),
        description: description.map(String::from),
    };
    fields.validate()?;

    let mut catalog = super::open_catalog(server, quiet)?;
    let draft = NewBook {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        publication_year: year,
        isbn: isbn.to_string(),
        cover_image: cover.map(String::from),
        description: description.map(String::from),
    };

    if !catalog.create(draft) {
        std::process::exit(1);
    }
    Ok(())
}
