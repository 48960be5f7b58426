use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

/// File-backed store for the session token.
///
/// Presence of a token is the only authentication signal the app consults;
/// no expiry or refresh bookkeeping happens client-side.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self> {
        let root = dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("todo-tui");
        Ok(Self { root })
    }

    #[cfg(test)]
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn token_path(&self) -> PathBuf {
        self.root.join("session")
    }

    pub fn load(&self) -> Result<Option<String>> {
        let path = self.token_path();
        if !path.exists() {
            return Ok(None);
        }

        let token = std::fs::read_to_string(&path).context("Failed to read session file")?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token))
    }

    pub fn save(&self, token: &str) -> Result<()> {
        secure_write(&self.token_path(), token)
    }

    pub fn clear(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let root = std::env::temp_dir().join(format!("todo-tui-test-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        SessionStore::at(root)
    }

    #[test]
    fn save_load_clear_round_trip() {
        let store = temp_store("round-trip");
        assert_eq!(store.load().unwrap(), None);

        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok-123".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn blank_token_file_counts_as_logged_out() {
        let store = temp_store("blank");
        store.save("   \n").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
