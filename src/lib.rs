//! Fluxline: an engine for a visual bookmark launcher.
//!
//! Fluxline powers a launcher that presents bookmarks as a drifting
//! constellation of nodes and provides:
//! - Fuzzy search across names, tags, links, groups, and descriptions
//! - Debounced live filtering with enter/exit transitions
//! - Keyboard navigation with wraparound and digit hotkeys
//! - Add, remove, import, and export of bookmark items
//! - Persistent state backed by JSON file storage with a light/dark flag

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding Host (timers, input, actual drawing)     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - Scene computation                                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Search Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (search/)     │
//! │ - Scene types │   │ - JSON I/O    │   │ - Fuzzy index │
//! │ - Layout      │   │ - Interchange │   │ - Ranking     │
//! │ - Motion      │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Item model (domain/item)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured tracing                               │
//! │  - File-based log output                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Item, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`search`]: Fuzzy search index over item fields
//! - [`storage`]: JSON file persistence and import/export interchange
//! - [`ui`]: Scene descriptions, layout, motion, and the renderer seam
//! - [`observability`]: Structured tracing with file output
//!
//! # Configuration
//!
//! Hosts hand configuration over as a string map; everything is optional:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use fluxline::Config;
//!
//! let mut map = BTreeMap::new();
//! map.insert("data_dir".to_string(), "/tmp/fluxline".to_string());
//! map.insert("trace_level".to_string(), "debug".to_string());
//!
//! let config = Config::from_map(&map);
//! assert_eq!(config.trace_level.as_deref(), Some("debug"));
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Engine Start** ([`initialize`]):
//!    - Open the JSON store (cache, falling back to the bundled dataset)
//!    - Pick the session's motion style
//!    - Apply the empty query so the full constellation is visible
//!
//! 2. **Event Loop** (host-driven):
//!    - Feed input as [`Event`] values into [`handle_event`]
//!    - Execute returned [`Action`] values (open links, arm filter timers,
//!      save exports)
//!    - On a `true` redraw flag, compute a scene and draw it
//!
//! 3. **Drawing**:
//!    - `AppState::compute_scene()` describes every node
//!    - [`SceneDriver::draw`] diffs against the previous scene and calls
//!      the host's [`Renderer`]
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use fluxline::{handle_event, initialize, Config, Event, SceneDriver};
//!
//! let config = Config {
//!     trace_level: Some("debug".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! let mut driver = SceneDriver::new();
//!
//! // Handle events
//! let events = vec![Event::NextItem, Event::Activate];
//! for event in events {
//!     let (redraw, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions, then redraw when asked to...
//!     if redraw {
//!         let scene = state.compute_scene();
//!         // driver.draw(&scene, &mut my_renderer);
//!     }
//! }
//! # Ok::<(), fluxline::FluxlineError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Debounced Filtering
//!
//! Live query edits never filter directly. Each edit buffers the query and
//! returns a deadline for the host to arm a timer; the tick applies the
//! freshest edit and stale ticks are ignored. Item mutations re-apply the
//! freshest query immediately so the visible subset never lags the data.
//!
//! ## Scene-Diff Rendering
//!
//! The engine describes scenes instead of drawing. The scene driver compares
//! consecutive scenes and emits the minimal renderer calls, so ambient drift
//! survives keystrokes and only restarts when the node membership changes.
//!
//! ## Forgiving Persistence
//!
//! Storage reads fall back (cache, bundled dataset, empty) instead of
//! failing, and writes go through a temp file followed by an atomic rename.
//! A failed save keeps the in-memory state authoritative and retries later.
//!
//! # Performance Characteristics
//!
//! - **Startup**: one JSON file read plus index build, linear in item count
//! - **Filtering**: one fuzzy pass over five fields per item per applied query
//! - **Storage Write**: single atomic file replace per mutation
//! - **Scene Computation**: linear in item count, no allocation between draws
//!   beyond the scene itself

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, open_links, Action, AppState, Event, LinkOpener};
pub use domain::{FluxlineError, IconKind, Item, ItemDraft, Result};
pub use search::SearchIndex;
pub use storage::{ItemStore, JsonStore};
pub use ui::{MotionStyle, Renderer, SceneDriver, ScenePlan, ThemeFlag};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Engine configuration provided by the embedding host.
///
/// Both fields are optional; a default configuration stores data in the
/// platform data directory and logs at `info`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory for the item file, theme file, and session log.
    ///
    /// Defaults to `fluxline/` inside the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Tracing level for the session log.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Hosts pass configuration as a `BTreeMap<String, String>` during
    /// startup. Unknown keys are ignored and missing keys fall back to
    /// defaults, so stale host configurations keep working.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `Option<PathBuf>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fluxline::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/fluxline".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir.as_deref(), Some("/tmp/fluxline".as_ref()));
    /// assert!(config.trace_level.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            data_dir: config.get("data_dir").map(PathBuf::from),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the effective data directory.
    ///
    /// Returns the configured directory when set, otherwise the platform
    /// default from [`infrastructure::default_data_dir`].
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::default_data_dir)
    }
}

/// Initializes the engine with configuration.
///
/// Opens the JSON store under the resolved data directory, picks the motion
/// style for this session, and builds an [`AppState`] with the full
/// constellation visible.
///
/// Tracing is not touched here; hosts that want the session log call
/// [`observability::init_tracing`] first.
///
/// # Example
///
/// ```no_run
/// use fluxline::{initialize, Config};
///
/// let config = Config::default();
/// let state = initialize(&config);
/// assert!(!state.store.items().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let data_dir = config.resolved_data_dir();
    tracing::debug!(data_dir = %data_dir.display(), "initializing fluxline engine");

    let store = JsonStore::open(&data_dir);
    let motion = MotionStyle::random();
    tracing::info!(
        item_count = store.items().len(),
        style = %motion.as_str(),
        "engine initialized"
    );

    AppState::new(Box::new(store), motion)
}
