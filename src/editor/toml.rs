use anyhow::{bail, Result};
use chrono::{Datelike, Utc};

use crate::book::Book;

/// Editable fields of a book, as they round-trip through $EDITOR. `None`
/// means the field is empty/cleared; required-field checks happen in
/// [`BookFields::validate`], not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

impl BookFields {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: Some(book.genre.clone()),
            publication_year: Some(book.publication_year),
            isbn: Some(book.isbn.clone()),
            cover_image: book.cover_image.clone(),
            description: book.description.clone(),
        }
    }

    /// Form-level validation: required fields non-empty, publication year
    /// not in the future.
    pub fn validate(&self) -> Result<()> {
        fn require(name: &str, value: &Option<String>) -> Result<()> {
            match value {
                Some(v) if !v.trim().is_empty() => Ok(()),
                _ => bail!("{} is required", name),
            }
        }

        require("title", &self.title)?;
        require("author", &self.author)?;
        require("genre", &self.genre)?;
        require("isbn", &self.isbn)?;

        let current_year = Utc::now().year();
        match self.publication_year {
            None => bail!("publication_year is required"),
            Some(year) if year > current_year => {
                bail!("publication_year cannot be later than {}", current_year)
            }
            Some(_) => Ok(()),
        }
    }
}

/// Render a book as TOML for editing. Empty optional fields are commented
/// out; server-owned fields go in a read-only section.
pub fn book_to_toml(book: &Book) -> String {
    let fields = BookFields::from_book(book);
    let mut lines = Vec::new();

    lines.push("# Book - Edit and save to apply changes".to_string());
    lines.push("# Commented fields are empty - uncomment and fill to add values".to_string());
    lines.push(String::new());

    fn add_field(lines: &mut Vec<String>, name: &str, value: &Option<String>) {
        match value {
            Some(v) => lines.push(format!("{} = \"{}\"", name, escape_toml_string(v))),
            None => lines.push(format!("# {} = \"\"", name)),
        }
    }

    add_field(&mut lines, "title", &fields.title);
    add_field(&mut lines, "author", &fields.author);
    add_field(&mut lines, "genre", &fields.genre);
    match fields.publication_year {
        Some(year) => lines.push(format!("publication_year = {}", year)),
        None => lines.push("# publication_year = 0".to_string()),
    }
    add_field(&mut lines, "isbn", &fields.isbn);
    add_field(&mut lines, "cover_image", &fields.cover_image);
    add_field(&mut lines, "description", &fields.description);

    // Read-only section
    lines.push(String::new());
    lines.push("# Read-only (cannot be edited)".to_string());
    lines.push(format!("# id = \"{}\"", book.id));
    lines.push(format!("# added_at = \"{}\"", book.added_at.to_rfc3339()));

    lines.push(String::new());
    lines.join("\n")
}

/// Parse edited TOML back into book fields
pub fn toml_to_fields(toml_str: &str) -> Result<BookFields> {
    // Filter out comment lines and parse remaining as TOML
    let filtered: String = toml_str
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let value: toml::Value = toml::from_str(&filtered)?;
    let table = value
        .as_table()
        .ok_or_else(|| anyhow::anyhow!("Invalid TOML structure"))?;

    fn get_string(table: &toml::map::Map<String, toml::Value>, key: &str) -> Option<String> {
        table.get(key).and_then(|v| v.as_str()).map(String::from)
    }

    Ok(BookFields {
        title: get_string(table, "title"),
        author: get_string(table, "author"),
        genre: get_string(table, "genre"),
        publication_year: table
            .get("publication_year")
            .and_then(|v| v.as_integer())
            .map(|n| n as i32),
        isbn: get_string(table, "isbn"),
        cover_image: get_string(table, "cover_image"),
        description: get_string(table, "description"),
    })
}

/// Escape special characters in TOML strings
fn escape_toml_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_book() -> Book {
        Book {
            id: "65a1f0".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Science Fiction".to_string(),
            publication_year: 1965,
            isbn: "978-0441013593".to_string(),
            cover_image: None,
            description: Some("The spice must flow".to_string()),
            added_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip() {
        let book = sample_book();
        let toml = book_to_toml(&book);
        let fields = toml_to_fields(&toml).unwrap();

        assert_eq!(fields, BookFields::from_book(&book));
    }

    #[test]
    fn test_empty_optional_fields_are_commented() {
        let toml = book_to_toml(&sample_book());
        assert!(toml.contains("# cover_image = \"\""));
        assert!(toml.contains("description = \"The spice must flow\""));
    }

    #[test]
    fn test_read_only_fields_survive_parse_as_absent() {
        let toml = book_to_toml(&sample_book());
        assert!(toml.contains("# id = \"65a1f0\""));

        // The commented id/added_at lines are stripped before parsing
        let fields = toml_to_fields(&toml).unwrap();
        assert_eq!(fields.title.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_escaping_special_characters() {
        let mut book = sample_book();
        book.title = "A \"quoted\"\ntitle".to_string();

        let toml = book_to_toml(&book);
        let fields = toml_to_fields(&toml).unwrap();
        assert_eq!(fields.title.as_deref(), Some("A \"quoted\"\ntitle"));
    }

    #[test]
    fn test_validate_requires_fields() {
        let mut fields = BookFields::from_book(&sample_book());
        assert!(fields.validate().is_ok());

        fields.title = Some("   ".to_string());
        assert!(fields.validate().is_err());

        fields.title = Some("Dune".to_string());
        fields.publication_year = None;
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_future_year() {
        let mut fields = BookFields::from_book(&sample_book());
        fields.publication_year = Some(Utc::now().year() + 1);
        assert!(fields.validate().is_err());

        fields.publication_year = Some(Utc::now().year());
        assert!(fields.validate().is_ok());
    }
}
