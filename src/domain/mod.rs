//! Domain layer for the Fluxline engine.
//!
//! This module contains the core domain types and business rules for the
//! launcher, independent of storage details or host integration concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item domain model and display helpers
//!
//! # Examples
//!
//! ```
//! use fluxline::domain::{Item, ItemDraft};
//!
//! let item = Item::from_draft(ItemDraft {
//!     name: "Docs".to_string(),
//!     url: "https://docs.example".to_string(),
//!     ..ItemDraft::default()
//! });
//! assert_eq!(item.name, "Docs");
//! ```

pub mod error;
pub mod item;

pub use error::{FluxlineError, Result};
pub use item::{IconKind, Item, ItemDraft};
