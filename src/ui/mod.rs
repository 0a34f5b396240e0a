//! User interface layer built around scene descriptions.
//!
//! This module owns everything the renderer seam needs: scene types, the
//! deterministic spiral layout, motion style timing, the theme flag, and the
//! driver that turns scene differences into renderer calls. Actual drawing
//! belongs to the embedding host.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_scene → ScenePlan → SceneDriver::draw → Renderer calls
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Scene types describing renderable UI state
//! - [`renderer`]: Renderer seam and scene difference driver
//! - [`layout`]: Deterministic golden-angle spiral positions
//! - [`motion`]: Transition styles and their timing
//! - [`theme`]: Light/dark appearance flag

pub mod layout;
pub mod motion;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{constellation_positions, Position};
pub use motion::MotionStyle;
pub use renderer::{Renderer, SceneDriver};
pub use theme::ThemeFlag;
pub use viewmodel::{HotkeyBadge, NodeView, ScenePlan};
