//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! embedding host and the domain/storage/search layers. It implements the
//! event-driven architecture that powers the interactive constellation.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───────── Filter Ticks ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Deadline bookkeeping for the query quiet window
//! - [`filter`]: Query state machine producing the visible subset
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`navigation`]: Wraparound cursor over the visible subset
//! - [`state`]: Central application state container and scene computation

pub mod actions;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod navigation;
pub mod state;

pub use actions::{open_links, Action, LinkOpener};
pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use filter::{FilterEngine, FilterOutcome};
pub use handler::{handle_event, Event};
pub use navigation::NavigationController;
pub use state::AppState;
