//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides the platform-facing plumbing the rest of the engine
//! stays agnostic of, currently the resolution of the on-disk storage location.

pub mod paths;

pub use paths::{default_data_dir, DATA_FILE_NAME, LOG_FILE_NAME, THEME_FILE_NAME};
