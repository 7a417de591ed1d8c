//! Remote collection gateway - all network I/O against the bookshelf service

mod http;

pub use http::HttpGateway;

use thiserror::Error;

use crate::book::{Book, BookPatch, NewBook};

/// Failure talking to the bookshelf service. Transport problems and non-2xx
/// statuses are distinguishable here, but callers handle both the same way.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("could not reach the bookshelf server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
}

/// CRUD contract of the bookshelf service. The catalog only ever talks to
/// this trait, so tests can script a fake in place of the HTTP client.
pub trait BookGateway {
    fn list_all(&self) -> Result<Vec<Book>, GatewayError>;
    fn fetch(&self, id: &str) -> Result<Book, GatewayError>;
    fn create(&self, draft: &NewBook) -> Result<Book, GatewayError>;
    fn update(&self, id: &str, patch: &BookPatch) -> Result<Book, GatewayError>;
    fn remove(&self, id: &str) -> Result<(), GatewayError>;
}
