use anyhow::{bail, Result};
use colored::Colorize;

use crate::book::Book;
use crate::gateway::{BookGateway, HttpGateway};

pub fn run(id: &str, json: bool, field: Option<&str>, server: Option<&str>, quiet: bool) -> Result<()> {
    let base_url = super::base_url(server)?;
    let token = super::require_token()?;
    let gateway = HttpGateway::new(&base_url, Some(token))?;

    let book = gateway.fetch(id)?;

    if let Some(field_name) = field {
        print_single_field(&book, field_name)?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_pretty(&book, quiet);
    }

    Ok(())
}

fn print_single_field(book: &Book, field: &str) -> Result<()> {
    let value = match field {
        "id" => Some(book.id.as_str()),
        "title" => Some(book.title.as_str()),
        "author" => Some(book.author.as_str()),
        "genre" => Some(book.genre.as_str()),
        "isbn" => Some(book.isbn.as_str()),
        "cover_image" => book.cover_image.as_deref(),
        "description" => book.description.as_deref(),
        "year" => {
            println!("{}", book.publication_year);
            return Ok(());
        }
        "added_at" => {
            println!("{}", book.added_at.to_rfc3339());
            return Ok(());
        }
        _ => bail!(
            "Unknown field: {}. Valid fields: id, title, author, genre, year, isbn, cover_image, description, added_at",
            field
        ),
    };

    if let Some(v) = value {
        println!("{}", v);
    }
    Ok(())
}

fn print_pretty(book: &Book, quiet: bool) {
    if !quiet {
        println!("{}", book.title.bold());
        println!("{}", "─".repeat(40));
    }

    print_field("Author", Some(&book.author));
    print_field("Genre", Some(&book.genre));
    print_field("Year", Some(&book.publication_year.to_string()));
    print_field("ISBN", Some(&book.isbn));
    print_field("Cover", book.cover_image.as_deref());
    print_field("Added", Some(&book.added_at.format("%Y-%m-%d").to_string()));
    print_field("Id", Some(&book.id));

    if let Some(desc) = &book.description {
        println!();
        println!("{}", "Description:".cyan());
        for line in textwrap_simple(desc, 80) {
            println!("  {}", line);
        }
    }
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("{:>12}: {}", label.cyan(), v);
    }
}

/// Simple text wrapping without external dependency
fn textwrap_simple(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let mut current_line = String::new();

        for word in words {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}
