//! JSON flat-file store backend.
//!
//! The whole collection lives in one JSON array on disk. Every mutation
//! loads the file, edits the collection in memory, and writes the file back
//! wholesale via an atomic replace. There is no locking; two concurrent
//! processes race with last-writer-wins semantics, an accepted limitation of
//! a single-user local tool.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, Result};
use crate::fs::write_atomic;

use super::traits::Store;
use super::types::{BudgetEntry, EntryPatch};

/// Flat-file store holding a JSON array of entries.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store backed by the file at `path`.
    ///
    /// The file is not created or touched here; the first `save` creates it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, treating an absent file as empty.
    fn load(&self) -> Result<Vec<BudgetEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load the collection, treating an absent file as an error.
    ///
    /// Used by update and delete, whose target cannot exist without a store.
    fn load_existing(&self) -> Result<Vec<BudgetEntry>> {
        if !self.path.exists() {
            return Err(BudgetError::NoSavedEntries);
        }
        self.load()
    }

    /// Replace the backing file with the serialized collection.
    fn persist(&self, entries: &[BudgetEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn save(&self, entry: BudgetEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.persist(&entries)
    }

    fn update(&self, title: &str, patch: &EntryPatch) -> Result<()> {
        let mut entries = self.load_existing()?;
        if let Some(entry) = entries.iter_mut().find(|entry| entry.title == title) {
            patch.apply_to(entry);
        }
        // The file is rewritten even when nothing matched.
        self.persist(&entries)
    }

    fn delete(&self, title: &str) -> Result<()> {
        let mut entries = self.load_existing()?;
        entries.retain(|entry| entry.title != title);
        self.persist(&entries)
    }

    fn list(&self) -> Result<Vec<BudgetEntry>> {
        self.load()
    }
}
