//! Pure derivation of the displayed view from the base list and controls

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::book::Book;

/// Field the view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOption {
    Title,
    Author,
    #[value(name = "added")]
    AddedAt,
    #[value(name = "year")]
    PublicationYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    #[value(name = "asc")]
    Ascending,
    #[value(name = "desc")]
    Descending,
}

/// Active sort: which field, and which way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub option: SortOption,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            option: SortOption::AddedAt,
            direction: SortDirection::Descending,
        }
    }
}

/// Compute the view shown to the user: genre filter, then text search, then
/// sort. Pure function of its inputs; equal sort keys keep their relative
/// order from `books`.
pub fn derive_view(
    books: &[Book],
    search: &str,
    genre_filter: Option<&str>,
    sort: SortSpec,
) -> Vec<Book> {
    let query = search.trim().to_lowercase();

    let mut result: Vec<Book> = books
        .iter()
        .filter(|book| match genre_filter {
            // Exact match, case-sensitive
            Some(genre) => book.genre == genre,
            None => true,
        })
        .filter(|book| query.is_empty() || matches_query(book, &query))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = match sort.option {
            SortOption::AddedAt => a.added_at.cmp(&b.added_at),
            SortOption::PublicationYear => a.publication_year.cmp(&b.publication_year),
            SortOption::Title => lexical_cmp(&a.title, &b.title),
            SortOption::Author => lexical_cmp(&a.author, &b.author),
        };
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    result
}

/// Case-insensitive substring match over title, author, and description.
/// `query` must already be trimmed and lowercased.
fn matches_query(book: &Book, query: &str) -> bool {
    book.title.to_lowercase().contains(query)
        || book.author.to_lowercase().contains(query)
        || book
            .description
            .as_ref()
            .map(|d| d.to_lowercase().contains(query))
            .unwrap_or(false)
}

/// Case-insensitive lexical ordering. Keys that differ only by case compare
/// equal, leaving the stable sort to keep their base-list order.
fn lexical_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
