//! Scene types describing renderable UI state.
//!
//! This module defines immutable scene descriptions computed from application
//! state. A scene contains pre-computed display information for every stored
//! item, so renderers never touch the store or the filter directly.
//!
//! # Architecture
//!
//! Scenes are created via `AppState::compute_scene()` and consumed by a
//! renderer through the scene driver. They contain no business logic, only
//! display-ready data: positions, visibility flags, icon classification, and
//! hotkey badge numbering.

use crate::domain::item::IconKind;
use crate::ui::layout::Position;
use crate::ui::motion::MotionStyle;
use crate::ui::theme::ThemeFlag;

/// Complete renderable scene.
///
/// Describes every stored item regardless of filter state; hidden nodes stay
/// in the scene with `visible` cleared so the constellation keeps its shape
/// while a search narrows it.
#[derive(Debug, Clone)]
pub struct ScenePlan {
    /// One view per stored item, in store order.
    pub nodes: Vec<NodeView>,

    /// Digit badges for the visible subset, present only when the subset
    /// has one through nine members.
    pub hotkeys: Vec<HotkeyBadge>,

    /// Color scheme to apply to the whole scene.
    pub theme: ThemeFlag,

    /// Transition style for node enters and exits.
    pub motion: MotionStyle,

    /// Whether visible nodes should play their enter transition.
    pub revealing: bool,
}

/// Display information for a single constellation node.
#[derive(Debug, Clone)]
pub struct NodeView {
    /// Stable item identifier, used to correlate scenes across renders.
    pub id: String,

    /// Primary label.
    pub name: String,

    /// Raw tag text, rendered under the label.
    pub tags: String,

    /// Secondary caption (description, falling back to group).
    pub caption: String,

    /// Whether `icon` is an image reference or a glyph.
    pub icon_kind: IconKind,

    /// Icon content: a URL for [`IconKind::Image`], display text otherwise.
    pub icon: String,

    /// Spiral position in viewport percentage coordinates.
    pub position: Position,

    /// Whether the current filter shows this node.
    pub visible: bool,

    /// Whether this node carries the keyboard active marker.
    pub active: bool,

    /// Whether this node should play an enter transition this render.
    pub reveal: bool,
}

/// A numbered activation badge for one visible node.
///
/// # Example
///
/// ```rust
/// use fluxline::ui::viewmodel::HotkeyBadge;
///
/// let badge = HotkeyBadge {
///     digit: 1,
///     item_id: "4c64…".to_string(),
///     label: "Mail".to_string(),
/// };
/// assert_eq!(badge.digit, 1);
/// ```
#[derive(Debug, Clone)]
pub struct HotkeyBadge {
    /// Digit key that activates the item, 1 through 9.
    pub digit: u8,

    /// Identifier of the item the badge points at.
    pub item_id: String,

    /// Item name shown beside the digit.
    pub label: String,
}
