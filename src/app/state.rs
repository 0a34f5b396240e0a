//! Application state container and scene computation.
//!
//! This module defines [`AppState`], the composition root holding the store,
//! the search index, the filter, and the navigation cursor, along with the
//! scene computation that turns all of it into a renderable description.
//!
//! # Architecture
//!
//! `AppState` separates canonical data (the stored item list, owned by the
//! [`ItemStore`]) from derived state (the filtered subset, the active index).
//! Mutations flow through the event handler, which keeps the derived state
//! aligned; the scene is computed on demand from a consistent snapshot.

use crate::app::filter::FilterEngine;
use crate::app::navigation::NavigationController;
use crate::search::SearchIndex;
use crate::storage::ItemStore;
use crate::ui::layout::constellation_positions;
use crate::ui::motion::MotionStyle;
use crate::ui::viewmodel::{HotkeyBadge, NodeView, ScenePlan};
use std::collections::HashSet;

/// Central application state container.
///
/// Holds the storage backend and all transient session state. Mutated by the
/// event handler in response to host events; scenes are computed on demand
/// from state snapshots.
pub struct AppState {
    /// Storage backend owning the canonical item list and theme flag.
    pub store: Box<dyn ItemStore>,

    /// Fuzzy search index, rebuilt after every item mutation.
    pub index: SearchIndex,

    /// Query state machine owning the filtered subset and debounce bookkeeping.
    pub filter: FilterEngine,

    /// Cursor over the filtered subset.
    pub nav: NavigationController,

    /// Motion style chosen at startup, carried in every scene.
    pub motion: MotionStyle,
}

impl AppState {
    /// Creates the application state around a storage backend.
    ///
    /// Builds the search index over the stored items and applies the empty
    /// query once as a reset, so the first computed scene shows the full
    /// constellation with its entrance reveal.
    #[must_use]
    pub fn new(store: Box<dyn ItemStore>, motion: MotionStyle) -> Self {
        let index = SearchIndex::build(store.items());
        let mut filter = FilterEngine::new();
        let mut nav = NavigationController::new();

        let outcome = filter.refresh(store.items(), &index, true);
        if !outcome.visible.is_empty() {
            nav.reset();
        }

        Self {
            store,
            index,
            filter,
            nav,
            motion,
        }
    }

    /// Computes a renderable scene from the current state.
    ///
    /// The scene describes every stored item: its spiral position, whether
    /// the filter shows it, whether it carries the active marker, and whether
    /// it should play an enter transition. Positions are computed over the
    /// full item count, so filtering hides nodes without rearranging the
    /// constellation.
    #[must_use]
    pub fn compute_scene(&self) -> ScenePlan {
        let _span = tracing::debug_span!("compute_scene",
            item_count = self.store.items().len(),
            visible_count = self.filter.visible_count()
        )
        .entered();

        let items = self.store.items();
        let positions = constellation_positions(items.len());
        let revealing = self.filter.is_revealing();

        let visible_ids: HashSet<&str> = self
            .filter
            .visible()
            .iter()
            .map(|item| item.id.as_str())
            .collect();

        let active_id: Option<&str> = self
            .filter
            .visible()
            .get(self.nav.active_index())
            .map(|item| item.id.as_str());

        let nodes = items
            .iter()
            .zip(positions)
            .map(|(item, position)| {
                let visible = visible_ids.contains(item.id.as_str());
                NodeView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    tags: item.tags.clone(),
                    caption: item.caption().to_string(),
                    icon_kind: item.icon_kind(),
                    icon: item.icon_value().to_string(),
                    position,
                    visible,
                    active: active_id == Some(item.id.as_str()),
                    reveal: visible && revealing,
                }
            })
            .collect();

        let hotkeys = self
            .filter
            .hotkey_items()
            .iter()
            .enumerate()
            .map(|(index, item)| HotkeyBadge {
                digit: u8::try_from(index + 1).unwrap_or(0),
                item_id: item.id.clone(),
                label: item.name.clone(),
            })
            .collect();

        ScenePlan {
            nodes,
            hotkeys,
            theme: self.store.theme(),
            motion: self.motion,
            revealing,
        }
    }
}
