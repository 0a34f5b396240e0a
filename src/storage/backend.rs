//! Storage backend abstraction.
//!
//! This module defines the [`ItemStore`] trait that abstracts over item
//! persistence. The engine talks to storage exclusively through this trait,
//! which keeps the event handler testable against in-memory substitutes.
//!
//! # Design Philosophy
//!
//! The trait is minimal and focused on the operations the launcher actually
//! performs. Mutations update the in-memory list first and then persist;
//! a failed write never rolls back the in-memory change, which stays
//! authoritative until a later save succeeds.

use crate::domain::error::Result;
use crate::domain::item::{Item, ItemDraft};
use crate::ui::theme::ThemeFlag;

/// Abstraction over item persistence backends.
///
/// Implementations own the canonical ordered item list and the persisted
/// theme flag. Order is insertion order with the most recently added item
/// first.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON files with atomic writes (default)
pub trait ItemStore: Send {
    /// Returns the canonical ordered item list.
    fn items(&self) -> &[Item];

    /// Creates an item from the draft and inserts it at the front of the list.
    ///
    /// A fresh unique identifier is assigned; a collision with an existing
    /// identifier triggers regeneration, so uniqueness holds even after
    /// imports brought in arbitrary identifiers. The change is persisted and
    /// the updated list is returned.
    fn add(&mut self, draft: ItemDraft) -> &[Item];

    /// Removes the item with the given identifier.
    ///
    /// An identifier with no matching item is a logged no-op. The change is
    /// persisted and the updated list is returned.
    fn remove(&mut self, id: &str) -> &[Item];

    /// Replaces the entire item list, used by bulk import.
    ///
    /// Identifiers in the new list are taken as given. The change is
    /// persisted and the updated list is returned.
    fn replace_all(&mut self, items: Vec<Item>) -> &[Item];

    /// Writes pending changes to the backing files.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails. The
    /// in-memory state is unaffected.
    fn persist(&mut self) -> Result<()>;

    /// Returns the persisted theme flag.
    fn theme(&self) -> ThemeFlag;

    /// Updates and persists the theme flag.
    fn set_theme(&mut self, theme: ThemeFlag);
}
