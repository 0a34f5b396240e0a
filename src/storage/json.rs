//! JSON file-based item storage.
//!
//! This module provides the default [`ItemStore`] implementation backed by two
//! human-readable JSON files: the item list and the theme flag. Writes are
//! atomic (write-to-temp + rename) to prevent corruption on crashes.
//!
//! # Startup Behavior
//!
//! Opening the store never fails. The item list comes from the first source
//! in this chain that yields valid data:
//!
//! 1. The cached item file, when present and well-formed
//! 2. The starter dataset bundled into the binary
//! 3. The empty list
//!
//! Falling through a level is logged; nothing is written to disk until the
//! first mutation.

use crate::domain::error::{FluxlineError, Result};
use crate::domain::item::{Item, ItemDraft};
use crate::infrastructure::paths::{DATA_FILE_NAME, THEME_FILE_NAME};
use crate::storage::backend::ItemStore;
use crate::ui::theme::ThemeFlag;
use std::path::{Path, PathBuf};

/// Starter dataset compiled into the binary.
const DEFAULT_DATASET: &str = include_str!("../../data/default.json");

/// JSON file storage backend.
///
/// Keeps the full item list in memory and persists it on every mutation.
/// The theme flag lives in its own file beside the item list so either can
/// be inspected or reset independently.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. The engine is single-threaded and
/// event-driven; mutations are serialized by the event model.
pub struct JsonStore {
    /// Path of the item list file.
    data_file: PathBuf,

    /// Path of the theme flag file.
    theme_file: PathBuf,

    /// In-memory item list, most recently added first.
    items: Vec<Item>,

    /// In-memory theme flag.
    theme: ThemeFlag,

    /// Tracks whether memory has diverged from disk since the last save.
    dirty: bool,
}

impl JsonStore {
    /// Opens the store rooted at the given data directory.
    ///
    /// Creates the directory if missing, then loads the cached item list and
    /// theme flag. Corrupt or unreadable files are logged and recovered per
    /// the fallback chain; this constructor never fails and never writes.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fluxline::storage::{ItemStore, JsonStore};
    /// use std::path::Path;
    ///
    /// let store = JsonStore::open(Path::new("/tmp/fluxline"));
    /// println!("{} items", store.items().len());
    /// ```
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        tracing::debug!(dir = ?data_dir, "opening item store");

        if let Err(e) = std::fs::create_dir_all(data_dir) {
            tracing::warn!(error = %e, dir = ?data_dir, "could not create data directory");
        }

        let data_file = data_dir.join(DATA_FILE_NAME);
        let theme_file = data_dir.join(THEME_FILE_NAME);

        let items = if data_file.exists() {
            Self::read_items(&data_file).unwrap_or_else(|e| {
                tracing::error!(error = %e, "discarding cached items");
                Self::fallback_items()
            })
        } else {
            tracing::debug!("no cached items, using bundled defaults");
            Self::fallback_items()
        };

        let theme = if theme_file.exists() {
            Self::read_theme(&theme_file).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "resetting theme flag");
                ThemeFlag::default()
            })
        } else {
            ThemeFlag::default()
        };

        tracing::debug!(
            item_count = items.len(),
            theme = %theme.as_str(),
            "item store opened"
        );

        Self {
            data_file,
            theme_file,
            items,
            theme,
            dirty: false,
        }
    }

    /// Loads the cached item list from disk.
    fn read_items(data_file: &Path) -> Result<Vec<Item>> {
        let contents = std::fs::read_to_string(data_file)?;
        serde_json::from_str(&contents)
            .map_err(|e| FluxlineError::DataFormat(format!("cached item list is corrupt: {e}")))
    }

    /// Parses the bundled starter dataset, falling back to the empty list.
    fn fallback_items() -> Vec<Item> {
        Self::default_items().unwrap_or_else(|e| {
            tracing::error!(error = %e, "starting with an empty item list");
            Vec::new()
        })
    }

    fn default_items() -> Result<Vec<Item>> {
        serde_json::from_str(DEFAULT_DATASET)
            .map_err(|e| FluxlineError::Fetch(format!("bundled default dataset is invalid: {e}")))
    }

    /// Loads the theme flag from disk.
    fn read_theme(theme_file: &Path) -> Result<ThemeFlag> {
        let contents = std::fs::read_to_string(theme_file)?;
        serde_json::from_str(&contents)
            .map_err(|e| FluxlineError::DataFormat(format!("theme flag is corrupt: {e}")))
    }

    /// Saves both files using atomic writes.
    ///
    /// Writes to temporary files first, then atomically renames them into
    /// place. Skipped entirely when nothing changed since the last save.
    fn save_to_disk(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.data_file, "saving item list");

        let items_json = serde_json::to_string_pretty(&self.items)
            .map_err(|e| FluxlineError::Storage(format!("failed to serialize items: {e}")))?;
        Self::write_atomic(&self.data_file, &items_json)?;

        let theme_json = serde_json::to_string(&self.theme)
            .map_err(|e| FluxlineError::Storage(format!("failed to serialize theme: {e}")))?;
        Self::write_atomic(&self.theme_file, &theme_json)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }

    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Saves and downgrades any failure to a log line.
    ///
    /// Mutations call this so a broken disk never loses the in-memory change;
    /// the dirty flag stays set and the save is retried on drop.
    fn save_or_log(&mut self) {
        if let Err(e) = self.save_to_disk() {
            tracing::warn!(error = %e, "save failed, keeping in-memory state");
        }
    }
}

impl ItemStore for JsonStore {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn add(&mut self, draft: ItemDraft) -> &[Item] {
        let _span = tracing::debug_span!("store_add", name = %draft.name).entered();

        let mut item = Item::from_draft(draft);
        while self.items.iter().any(|existing| existing.id == item.id) {
            tracing::warn!(id = %item.id, "identifier collision, regenerating");
            item.id = uuid::Uuid::new_v4().to_string();
        }

        tracing::debug!(id = %item.id, "item added");
        self.items.insert(0, item);
        self.dirty = true;
        self.save_or_log();
        &self.items
    }

    fn remove(&mut self, id: &str) -> &[Item] {
        let _span = tracing::debug_span!("store_remove", id = %id).entered();

        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            tracing::debug!("no item with that identifier, nothing removed");
            return &self.items;
        }

        self.dirty = true;
        self.save_or_log();
        tracing::debug!(remaining = self.items.len(), "item removed");
        &self.items
    }

    fn replace_all(&mut self, items: Vec<Item>) -> &[Item] {
        let _span = tracing::debug_span!("store_replace_all", count = items.len()).entered();

        self.items = items;
        self.dirty = true;
        self.save_or_log();
        tracing::debug!("item list replaced");
        &self.items
    }

    fn persist(&mut self) -> Result<()> {
        self.save_to_disk()
    }

    fn theme(&self) -> ThemeFlag {
        self.theme
    }

    fn set_theme(&mut self, theme: ThemeFlag) {
        tracing::debug!(theme = %theme.as_str(), "theme flag updated");
        self.theme = theme;
        self.dirty = true;
        self.save_or_log();
    }
}

impl Drop for JsonStore {
    /// Retries the save on drop so an earlier failed write gets one more chance.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_disk() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
