//! Auth session: token lifecycle and the signed-in user's profile.
//!
//! The catalog never touches this; commands gate the collection on a stored
//! token being present.

mod api;
mod token;

pub use api::User;
pub use token::TokenStore;

use anyhow::{Context, Result};
use tracing::warn;

/// Holds the bearer token and user profile for one CLI invocation, persisting
/// the token through a `TokenStore`.
pub struct AuthSession {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    store: TokenStore,
    token: Option<String>,
    user: Option<User>,
}

impl AuthSession {
    pub fn connect(base_url: &str) -> Result<Self> {
        let store = TokenStore::new()?;
        Self::with_store(base_url, store)
    }

    pub fn with_store(base_url: &str, store: TokenStore) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            client: reqwest::Client::new(),
            runtime,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            token: None,
            user: None,
        })
    }

    /// Validate a previously stored token against the profile endpoint. A
    /// rejected token is deleted, leaving the session signed out.
    pub fn restore(&mut self) -> Result<()> {
        let Some(token) = self.store.load()? else {
            return Ok(());
        };

        match self
            .runtime
            .block_on(api::profile(&self.client, &self.base_url, &token))
        {
            Ok(user) => {
                self.token = Some(token);
                self.user = Some(user);
            }
            Err(err) => {
                warn!("stored token rejected: {}", err);
                self.store.clear()?;
            }
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let (token, user) = self
            .runtime
            .block_on(api::login(&self.client, &self.base_url, email, password))?;
        self.store.save(&token)?;
        self.token = Some(token);
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        let (token, user) = self.runtime.block_on(api::register(
            &self.client,
            &self.base_url,
            name,
            email,
            password,
        ))?;
        self.store.save(&token)?;
        self.token = Some(token);
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        self.token = None;
        self.user = None;
        Ok(())
    }
}
