//! Structured logging with file-based output.
//!
//! This module provides the tracing infrastructure for the engine. Spans and
//! events emitted throughout the crate are filtered, formatted as plain
//! text, and appended to a log file in the data directory for offline
//! debugging.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the host lifecycle:
//!
//! ```no_run
//! use fluxline::observability::init_tracing;
//! use fluxline::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("engine initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
