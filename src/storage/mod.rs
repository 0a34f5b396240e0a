//! Storage layer for persisted launcher state.
//!
//! This module owns the canonical item list and the theme flag, persisting
//! both as JSON files, and handles the import/export interchange format.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `interchange`: Import parsing and export payload generation

pub mod backend;
pub mod interchange;
pub mod json;

pub use backend::ItemStore;
pub use interchange::{export_payload, parse_import, write_export, EXPORT_FILE_NAME};
pub use json::JsonStore;
