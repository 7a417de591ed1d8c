//! Bearer-token persistence under the user config directory

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

const TOKEN_FILENAME: &str = "token";

/// Stores at most one token at a fixed path
/// (~/.config/bookshelfctl/token).
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(Self::with_path(
            config_dir.join("bookshelfctl").join(TOKEN_FILENAME),
        ))
    }

    /// Store backed by a specific file path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let token = content.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&self.path, token)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_token() {
        let temp = TempDir::new().unwrap();
        let store = TokenStore::with_path(temp.path().join("token"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_clear_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = TokenStore::with_path(temp.path().join("nested").join("token"));

        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().unwrap(), Some("abc.def.ghi".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_only_file_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("token");
        std::fs::write(&path, "\n  \n").unwrap();

        let store = TokenStore::with_path(path);
        assert_eq!(store.load().unwrap(), None);
    }
}
