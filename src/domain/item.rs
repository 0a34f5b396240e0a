//! Item domain model and operations.
//!
//! This module defines the core `Item` type representing one launchable bookmark
//! in the constellation, together with the [`ItemDraft`] form payload used to
//! create new items and the [`IconKind`] classification consumed by renderers.

use serde::{Deserialize, Serialize};

/// Glyph shown for items that carry no icon of their own.
const FALLBACK_GLYPH: &str = "✨";

/// Represents a single launchable entry in the constellation.
///
/// Items are bookmark-like records: a link plus the metadata used for fuzzy
/// search and display. All fields are plain strings; fields that were absent
/// in an imported payload deserialize to the empty string.
///
/// # Fields
///
/// - `id`: Opaque unique identifier, stable for the lifetime of the item
/// - `name`: Display name shown on the node
/// - `tags`: Free-form tag text, searchable
/// - `url`: Link opened on activation
/// - `icon`: Image URL or glyph; empty means the default glyph
/// - `group`: Free-form grouping label, searchable
/// - `description`: Longer caption text, searchable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub description: String,
}

/// Classification of an item's `icon` field.
///
/// Renderers use this to decide between an `<img>`-style node icon and a
/// plain text glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// The icon value is a fetchable image location.
    Image,
    /// The icon value is literal glyph text (possibly the fallback).
    Glyph,
}

/// User-supplied fields for a new item, before an identifier is assigned.
///
/// Drafts carry everything the add form collects. [`Item::from_draft`] turns a
/// draft into a stored item by attaching a freshly generated identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub tags: String,
    pub url: String,
    pub icon: String,
    pub group: String,
    pub description: String,
}

impl Item {
    /// Creates a new item from a draft with a freshly generated identifier.
    ///
    /// The identifier is a random UUID v4, formatted as a hyphenated string.
    /// Draft fields are taken verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluxline::{Item, ItemDraft};
    ///
    /// let draft = ItemDraft {
    ///     name: "Weather".to_string(),
    ///     url: "https://weather.example".to_string(),
    ///     ..ItemDraft::default()
    /// };
    /// let item = Item::from_draft(draft);
    /// assert_eq!(item.name, "Weather");
    /// assert!(!item.id.is_empty());
    /// ```
    #[must_use]
    pub fn from_draft(draft: ItemDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            tags: draft.tags,
            url: draft.url,
            icon: draft.icon,
            group: draft.group,
            description: draft.description,
        }
    }

    /// Classifies the icon field as an image location or glyph text.
    ///
    /// An icon counts as an image when it starts with `http://`, `https://`,
    /// or the protocol-relative `//`. Everything else, including an empty
    /// value, is glyph text.
    #[must_use]
    pub fn icon_kind(&self) -> IconKind {
        if !self.icon.is_empty()
            && (self.icon.starts_with("http://")
                || self.icon.starts_with("https://")
                || self.icon.starts_with("//"))
        {
            IconKind::Image
        } else {
            IconKind::Glyph
        }
    }

    /// Returns the effective icon value to render.
    ///
    /// For glyph icons an empty value falls back to the default glyph; image
    /// icons are returned as-is.
    #[must_use]
    pub fn icon_value(&self) -> &str {
        if self.icon.is_empty() {
            FALLBACK_GLYPH
        } else {
            &self.icon
        }
    }

    /// Returns the caption text shown under the node title.
    ///
    /// The description wins when present; otherwise the group label is used.
    /// May be empty, in which case renderers skip the caption line.
    #[must_use]
    pub fn caption(&self) -> &str {
        if self.description.is_empty() {
            &self.group
        } else {
            &self.description
        }
    }
}
