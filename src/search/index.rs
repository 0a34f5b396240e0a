//! Fuzzy search index over the item set.
//!
//! This module implements [`SearchIndex`], the precomputed search structure
//! the filter consults on every query. Building the index is O(n) in the
//! number of items; it happens once per mutation rather than per keystroke,
//! so a query only pays for matching, not for normalization.
//!
//! # Matching
//!
//! Each item exposes five searchable fields: name, tags, url, group, and
//! description. A query matches an item when the Skim fuzzy matcher accepts
//! it against any of those fields; the item's relevance is the best score
//! across the fields. Results are ordered best-first, with store order
//! breaking ties.

use crate::domain::item::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// One indexed item with its pre-lowered haystacks.
#[derive(Debug, Clone)]
struct IndexEntry {
    item: Item,
    haystacks: [String; 5],
}

/// Precomputed fuzzy-search structure, rebuilt on every item mutation.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Builds an index over the given items, replacing any prior contents.
    ///
    /// Haystacks are lowercased here once so queries can be matched
    /// case-insensitively without re-normalizing per keystroke.
    #[must_use]
    pub fn build(items: &[Item]) -> Self {
        let entries = items
            .iter()
            .map(|item| IndexEntry {
                haystacks: [
                    item.name.to_lowercase(),
                    item.tags.to_lowercase(),
                    item.url.to_lowercase(),
                    item.group.to_lowercase(),
                    item.description.to_lowercase(),
                ],
                item: item.clone(),
            })
            .collect();

        Self { entries }
    }

    /// Rebuilds the index in place after the item set changed.
    pub fn rebuild(&mut self, items: &[Item]) {
        *self = Self::build(items);
    }

    /// Returns ranked matches for the query, best first.
    ///
    /// The query is trimmed and lowercased before matching. Ties keep store
    /// order. An empty item set yields an empty result; deciding what an
    /// empty query means is the caller's business.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Item> {
        let _span = tracing::debug_span!("search", query_len = query.len()).entered();

        let needle = query.trim().to_lowercase();
        let matcher = SkimMatcherV2::default();

        let mut scored: Vec<(i64, &Item)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .haystacks
                    .iter()
                    .filter_map(|haystack| matcher.fuzzy_match(haystack, &needle))
                    .max()
                    .map(|score| (score, &entry.item))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!(matched = scored.len(), "search complete");
        scored.into_iter().map(|(_, item)| item.clone()).collect()
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, tags: &str, group: &str, description: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            tags: tags.to_string(),
            url: format!("https://{id}.example"),
            icon: String::new(),
            group: group.to_string(),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item("a", "Tide Charts", "ocean sailing", "outdoors", "Coastal conditions"),
            item("b", "Task Diary", "todo", "work", "Daily planner"),
            item("c", "Weather", "forecast", "daily", "Rain and tide tables"),
        ]
    }

    #[test]
    fn matches_across_all_searchable_fields() {
        let index = SearchIndex::build(&sample());

        assert!(index.search("sailing").iter().any(|i| i.id == "a"));
        assert!(index.search("work").iter().any(|i| i.id == "b"));
        assert!(index.search("planner").iter().any(|i| i.id == "b"));
        assert!(index.search("forecast").iter().any(|i| i.id == "c"));
    }

    #[test]
    fn ranks_tighter_matches_first() {
        let index = SearchIndex::build(&sample());

        let results = index.search("tide");
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "a");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = SearchIndex::build(&sample());

        assert!(!index.search("TIDE").is_empty());
        assert!(!index.search("Tide").is_empty());
    }

    #[test]
    fn unmatched_queries_yield_nothing() {
        let index = SearchIndex::build(&sample());

        assert!(index.search("zzzzqqq").is_empty());
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = SearchIndex::build(&[]);

        assert!(index.search("anything").is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn rebuild_reflects_the_new_item_set() {
        let mut index = SearchIndex::build(&sample());
        assert_eq!(index.len(), 3);

        index.rebuild(&sample()[..1]);
        assert_eq!(index.len(), 1);
        assert!(index.search("diary").is_empty());
    }
}
