//! Query filtering over the item set.
//!
//! This module implements [`FilterEngine`], the state machine between the
//! search box and the constellation. It owns the last applied query, the
//! ordered filtered subset, and the debounce bookkeeping for live edits.
//!
//! # Lanes
//!
//! Query changes reach the engine through two lanes:
//!
//! - **Debounced**: live keystrokes buffer through [`FilterEngine::queue_edit`]
//!   and apply when the matching tick arrives via [`FilterEngine::apply_pending`].
//! - **Immediate**: Escape, add, delete, and import call [`FilterEngine::reset`]
//!   or [`FilterEngine::refresh`], which apply right away using the freshest
//!   query and drop any pending edit.
//!
//! # Revealing
//!
//! Each application reports whether hidden nodes may be re-entering: the
//! trimmed query got strictly shorter than the previous one, or the
//! application was flagged as a reset. Renderers gate enter transitions on
//! this flag so plain query narrowing stays quiet.

use crate::app::debounce::Debouncer;
use crate::domain::item::Item;
use crate::search::SearchIndex;
use std::time::Instant;

/// Result of one filter application.
///
/// `visible` is the ordered filtered subset; `revealing` tells the renderer
/// whether shown nodes should play their enter transition. The outcome is a
/// pure value, free of rendering concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: Vec<Item>,
    pub revealing: bool,
}

/// Query state machine over the item set.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    /// Last applied query, already trimmed.
    last_query: String,

    /// Ordered filtered subset from the last application.
    filtered: Vec<Item>,

    /// Reveal flag from the last application.
    revealing: bool,

    /// Debounce bookkeeping for live edits.
    debouncer: Debouncer,
}

impl FilterEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a query against the item set.
    ///
    /// The query is trimmed first. An empty query passes the full item list
    /// through in store order; a non-empty query asks the index for ranked
    /// matches. The reveal flag is computed against the previously applied
    /// query before that query is replaced.
    pub fn apply(
        &mut self,
        items: &[Item],
        index: &SearchIndex,
        query: &str,
        is_reset: bool,
    ) -> FilterOutcome {
        let _span = tracing::debug_span!("apply_filter",
            query_len = query.len(),
            is_reset = is_reset
        )
        .entered();

        let normalized = query.trim();
        let revealing =
            normalized.chars().count() < self.last_query.chars().count() || is_reset;
        self.last_query = normalized.to_string();

        let visible = if normalized.is_empty() {
            items.to_vec()
        } else {
            index.search(normalized)
        };

        self.filtered = visible.clone();
        self.revealing = revealing;

        tracing::debug!(
            visible_count = visible.len(),
            revealing = revealing,
            "filter applied"
        );

        FilterOutcome { visible, revealing }
    }

    /// Buffers a live query edit and returns the deadline to arm a timer for.
    ///
    /// Nothing is applied yet; the edit waits for its tick or for an
    /// immediate-lane application to pick it up.
    pub fn queue_edit(&mut self, query: String, at: Instant) -> Instant {
        tracing::trace!(query = %query, "query edit buffered");
        self.debouncer.submit(query, at)
    }

    /// Applies the pending edit if the tick reached its deadline.
    ///
    /// Stale ticks (a newer edit moved the deadline) return `None` and leave
    /// all state untouched.
    pub fn apply_pending(
        &mut self,
        items: &[Item],
        index: &SearchIndex,
        at: Instant,
    ) -> Option<FilterOutcome> {
        let query = self.debouncer.fire(at)?;
        Some(self.apply(items, index, &query, false))
    }

    /// Clears the query and re-applies immediately as a reset.
    ///
    /// Any pending edit is dropped; the full item list becomes visible with
    /// enter transitions.
    pub fn reset(&mut self, items: &[Item], index: &SearchIndex) -> FilterOutcome {
        self.debouncer.cancel();
        self.apply(items, index, "", true)
    }

    /// Re-applies the freshest query immediately after an item mutation.
    ///
    /// The freshest query is the pending edit when one exists, otherwise the
    /// last applied query. Additions and imports pass `is_reset = true` so
    /// the changed constellation re-enters; deletions pass `false`.
    pub fn refresh(
        &mut self,
        items: &[Item],
        index: &SearchIndex,
        is_reset: bool,
    ) -> FilterOutcome {
        let query = self
            .debouncer
            .take()
            .unwrap_or_else(|| self.last_query.clone());
        self.apply(items, index, &query, is_reset)
    }

    /// The ordered filtered subset from the last application.
    #[must_use]
    pub fn visible(&self) -> &[Item] {
        &self.filtered
    }

    /// Number of currently visible items.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// The last applied query, trimmed.
    #[must_use]
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Reveal flag from the last application.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    /// Whether a buffered edit is waiting for its tick.
    #[must_use]
    pub fn has_pending_edit(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Items eligible for digit hotkeys.
    ///
    /// Digits map onto the filtered subset only when it has between one and
    /// nine members; otherwise no hotkeys are offered.
    #[must_use]
    pub fn hotkey_items(&self) -> &[Item] {
        if (1..=9).contains(&self.filtered.len()) {
            &self.filtered
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::debounce::DEBOUNCE_WINDOW;

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            tags: String::new(),
            url: format!("https://{id}.example"),
            icon: String::new(),
            group: String::new(),
            description: String::new(),
        }
    }

    fn fixture() -> (Vec<Item>, SearchIndex) {
        let items = vec![
            item("a", "Tide Charts"),
            item("b", "Task Diary"),
            item("c", "Weather"),
        ];
        let index = SearchIndex::build(&items);
        (items, index)
    }

    #[test]
    fn empty_query_passes_items_through_in_store_order() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();

        let outcome = filter.apply(&items, &index, "", false);

        assert_eq!(outcome.visible, items);
    }

    #[test]
    fn whitespace_only_query_counts_as_empty() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();

        let outcome = filter.apply(&items, &index, "   ", false);

        assert_eq!(outcome.visible, items);
        assert_eq!(filter.last_query(), "");
    }

    #[test]
    fn unmatched_query_yields_an_empty_subset() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();

        let outcome = filter.apply(&items, &index, "zzzzqqq", false);

        assert!(outcome.visible.is_empty());
        assert_eq!(filter.visible_count(), 0);
    }

    #[test]
    fn revealing_fires_on_shrinking_queries_and_resets_only() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();

        assert!(!filter.apply(&items, &index, "ti", false).revealing);
        assert!(!filter.apply(&items, &index, "tide", false).revealing);
        assert!(filter.apply(&items, &index, "tid", false).revealing);
        assert!(filter.apply(&items, &index, "tidal", true).revealing);
    }

    #[test]
    fn debounced_edits_collapse_to_one_application_of_the_last_query() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();
        let start = Instant::now();

        let first_deadline = filter.queue_edit("t".to_string(), start);
        filter.queue_edit("ti".to_string(), start + DEBOUNCE_WINDOW / 3);
        let last_deadline = filter.queue_edit("tide".to_string(), start + DEBOUNCE_WINDOW / 2);

        assert!(filter.apply_pending(&items, &index, first_deadline).is_none());

        let outcome = filter.apply_pending(&items, &index, last_deadline).unwrap();
        assert_eq!(filter.last_query(), "tide");
        assert!(outcome.visible.iter().any(|i| i.id == "a"));

        assert!(filter
            .apply_pending(&items, &index, last_deadline + DEBOUNCE_WINDOW)
            .is_none());
    }

    #[test]
    fn reset_clears_the_query_and_drops_pending_edits() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();
        let start = Instant::now();

        filter.apply(&items, &index, "tide", false);
        let deadline = filter.queue_edit("tidal".to_string(), start);

        let outcome = filter.reset(&items, &index);

        assert!(outcome.revealing);
        assert_eq!(outcome.visible, items);
        assert_eq!(filter.last_query(), "");
        assert!(filter.apply_pending(&items, &index, deadline).is_none());
    }

    #[test]
    fn refresh_uses_the_pending_edit_when_one_exists() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();
        let start = Instant::now();

        filter.queue_edit("diary".to_string(), start);
        let outcome = filter.refresh(&items, &index, true);

        assert_eq!(filter.last_query(), "diary");
        assert_eq!(outcome.visible.len(), 1);
        assert_eq!(outcome.visible[0].id, "b");
        assert!(!filter.has_pending_edit());
    }

    #[test]
    fn refresh_falls_back_to_the_last_applied_query() {
        let (items, index) = fixture();
        let mut filter = FilterEngine::new();

        filter.apply(&items, &index, "tide", false);
        let outcome = filter.refresh(&items, &index, false);

        assert_eq!(filter.last_query(), "tide");
        assert!(outcome.visible.iter().any(|i| i.id == "a"));
        assert!(!outcome.revealing);
    }

    #[test]
    fn hotkeys_cover_one_through_nine_visible_items_only() {
        let many: Vec<Item> = (0..10)
            .map(|i| item(&format!("id{i}"), &format!("Item {i}")))
            .collect();
        let index = SearchIndex::build(&many);
        let mut filter = FilterEngine::new();

        filter.apply(&[], &index, "", false);
        assert!(filter.hotkey_items().is_empty());

        filter.apply(&many[..1], &index, "", false);
        assert_eq!(filter.hotkey_items().len(), 1);

        filter.apply(&many[..9], &index, "", false);
        assert_eq!(filter.hotkey_items().len(), 9);

        filter.apply(&many, &index, "", false);
        assert!(filter.hotkey_items().is_empty());
    }
}
