use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{BrowserError, Result};

/// Outcome of [`FavoritesStore::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    AlreadyPresent,
}

/// Flat text file of favorite titles, one trimmed title per line.
///
/// Append-only and deduplicated by exact (case-sensitive) match on the
/// trimmed title. The file is opened and closed on every call.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current favorites; a missing file is an empty list
    pub fn load(&self) -> Result<Vec<String>> {
        match self.list() {
            Err(BrowserError::FavoritesMissing(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Current favorites in file order; a missing file is an error
    pub fn list(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BrowserError::FavoritesMissing(self.path.clone()),
            _ => BrowserError::Io(e),
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append `title` unless its trimmed form is already stored
    pub fn add(&self, title: &str) -> Result<SaveOutcome> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BrowserError::Other("Cannot save an empty title".to_string()));
        }

        if self.load()?.iter().any(|existing| existing == title) {
            tracing::debug!("{} is already a favorite", title);
            return Ok(SaveOutcome::AlreadyPresent);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", title)?;

        tracing::info!("Added {} to {}", title, self.path.display());
        Ok(SaveOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FavoritesStore {
        FavoritesStore::new(dir.path().join("favorite_games.txt"))
    }

    #[test]
    fn test_missing_file_load_vs_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
        assert!(matches!(store.list(), Err(BrowserError::FavoritesMissing(_))));
    }

    #[test]
    fn test_add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.add("Celeste").unwrap(), SaveOutcome::Added);
        assert_eq!(store.add("  Celeste \n").unwrap(), SaveOutcome::AlreadyPresent);

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Celeste\n");
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add("Hades").unwrap();
        assert_eq!(store.add("hades").unwrap(), SaveOutcome::Added);
        assert_eq!(store.list().unwrap(), vec!["Hades", "hades"]);
    }

    #[test]
    fn test_list_keeps_file_order_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Celeste\n  Hades  \n\n").unwrap();

        assert_eq!(store.list().unwrap(), vec!["Celeste", "Hades"]);
        assert_eq!(store.add("Hades").unwrap(), SaveOutcome::AlreadyPresent);
    }

    #[test]
    fn test_empty_title_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.add("   ").is_err());
        assert!(!store.path().exists());
    }
}
