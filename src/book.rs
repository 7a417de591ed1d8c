//! Book record types shared by the catalog, gateway, and commands

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Genres offered by the add/edit forms. The server stores genre as free
/// text, so this list is a suggestion, not an enum.
pub const SUGGESTED_GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Thriller",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Historical Fiction",
    "Horror",
    "Adventure",
];

/// A single book record. The server assigns `id` and `added_at` at creation;
/// everything else is user-entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Fields for a create request. No `id` or `added_at`; the server assigns
/// both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for an existing book. Unset fields are left untouched by
/// the server. `id` and `added_at` are not representable here, so an update
/// can never overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
