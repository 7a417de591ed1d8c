//! reqwest-backed implementation of the gateway contract

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{BookGateway, GatewayError};
use crate::book::{Book, BookPatch, NewBook};

const USER_AGENT: &str = concat!("bookshelfctl/", env!("CARGO_PKG_VERSION"));

/// Gateway against the bookshelf REST service. Wraps the async reqwest
/// client behind the synchronous trait with an owned tokio runtime.
pub struct HttpGateway {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    books_url: String,
    token: Option<String>,
}

impl HttpGateway {
    /// Build a gateway for `base_url` (e.g. "http://localhost:3000"). The
    /// bearer token, when present, is attached to every request.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            books_url: format!("{}/api/books", base_url.trim_end_matches('/')),
            token,
        })
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, url).header("User-Agent", USER_AGENT);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    fn book_url(&self, id: &str) -> String {
        format!("{}/{}", self.books_url, urlencoding::encode(id))
    }
}

impl BookGateway for HttpGateway {
    fn list_all(&self) -> Result<Vec<Book>, GatewayError> {
        debug!("GET {}", self.books_url);
        self.runtime.block_on(async {
            let response = self.request(Method::GET, self.books_url.clone()).send().await?;
            let response = check_status(response).await?;
            let books: Vec<WireBook> = response.json().await?;
            Ok(books.into_iter().map(Book::from).collect())
        })
    }

    fn fetch(&self, id: &str) -> Result<Book, GatewayError> {
        self.runtime.block_on(async {
            let response = self.request(Method::GET, self.book_url(id)).send().await?;
            let response = check_status(response).await?;
            let book: WireBook = response.json().await?;
            Ok(book.into())
        })
    }

    fn create(&self, draft: &NewBook) -> Result<Book, GatewayError> {
        self.runtime.block_on(async {
            let response = self
                .request(Method::POST, self.books_url.clone())
                .json(draft)
                .send()
                .await?;
            let response = check_status(response).await?;
            let book: WireBook = response.json().await?;
            Ok(book.into())
        })
    }

    fn update(&self, id: &str, patch: &BookPatch) -> Result<Book, GatewayError> {
        self.runtime.block_on(async {
            let response = self
                .request(Method::PUT, self.book_url(id))
                .json(patch)
                .send()
                .await?;
            let response = check_status(response).await?;
            let book: WireBook = response.json().await?;
            Ok(book.into())
        })
    }

    fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.runtime.block_on(async {
            let response = self.request(Method::DELETE, self.book_url(id)).send().await?;
            check_status(response).await?;
            Ok(())
        })
    }
}

/// Map any non-2xx response to a status error, pulling the server's
/// `{"error": ...}` body through when it parses.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| parse_error_body(&body));
    warn!("bookshelf request failed with status {}", status);
    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<WireError>(body).ok().and_then(|e| e.error)
}

// ============================================================================
// Wire structs
// ============================================================================

/// Book record as the service sends it: Mongo `_id`, camelCase field names,
/// RFC 3339 `addedAt`. Extra fields like `__v` are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBook {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    title: String,
    author: String,
    genre: String,
    publication_year: i32,
    isbn: String,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    description: Option<String>,
    added_at: DateTime<Utc>,
}

impl From<WireBook> for Book {
    fn from(wire: WireBook) -> Self {
        Book {
            id: wire.id,
            title: wire.title,
            author: wire.author,
            genre: wire.genre,
            publication_year: wire.publication_year,
            isbn: wire.isbn,
            cover_image: wire.cover_image,
            description: wire.description,
            added_at: wire.added_at,
        }
    }
}

/// Failure body shape: `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct WireError {
    error: Option<String>,
}
