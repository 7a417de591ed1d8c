//! List command - render the derived view of the library

use anyhow::Result;
use colored::Colorize;

use crate::book::Book;
use crate::catalog::{BookCatalog, SortDirection, SortOption, SortSpec};

/// Run the list command
pub fn run(
    query: Option<&str>,
    genre: Option<&str>,
    sort: SortOption,
    direction: SortDirection,
    json: bool,
    server: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let mut catalog = super::open_catalog(server, quiet)?;
    if !catalog.load() {
        std::process::exit(1);
    }

    if let Some(query) = query {
        catalog.set_search(query);
    }
    catalog.set_genre_filter(genre.map(String::from));
    catalog.set_sort(SortSpec { option: sort, direction });

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.view())?);
        return Ok(());
    }

    if catalog.view().is_empty() {
        println!("No books found.");
        return Ok(());
    }

    print_results(&catalog, quiet);
    Ok(())
}

fn print_results(catalog: &BookCatalog, quiet: bool) {
    let books: &[Book] = catalog.view();

    if !quiet {
        println!();
        let mut heading = format!("Found {} book(s)", books.len());
        if let Some(genre) = catalog.genre_filter() {
            heading.push_str(&format!(" in {}", genre));
        }
        let query = catalog.search_query().trim();
        if !query.is_empty() {
            heading.push_str(&format!(" matching \"{}\"", query));
        }
        println!("{}:", heading);
    }
    println!();

    for book in books {
        println!("{}", book.title.bold());
        println!("  by {}", book.author.cyan());
        println!("  {} · {}", book.genre.yellow(), book.publication_year);
        println!(
            "  added {}  {}",
            book.added_at.format("%Y-%m-%d"),
            book.id.dimmed()
        );
        println!();
    }
}
