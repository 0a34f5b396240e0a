//! Active-item navigation over the filtered subset.
//!
//! This module implements [`NavigationController`], which tracks the active
//! index within the currently visible items and resolves which item an
//! activation should open.

use crate::domain::item::Item;

/// Cursor over the filtered subset.
///
/// The index wraps on both ends and is reset to the first item whenever a
/// filter application produces a non-empty subset. On an empty subset every
/// movement and activation is a safe no-op.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    active_index: usize,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the active item within the visible subset.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Moves the cursor back to the first item.
    pub fn reset(&mut self) {
        self.active_index = 0;
    }

    /// Moves the cursor forward by one, wrapping to the start.
    ///
    /// No-op when nothing is visible.
    pub fn next(&mut self, visible_count: usize) {
        if visible_count == 0 {
            return;
        }
        self.active_index = (self.active_index + 1) % visible_count;
    }

    /// Moves the cursor back by one, wrapping to the end.
    ///
    /// No-op when nothing is visible.
    pub fn prev(&mut self, visible_count: usize) {
        if visible_count == 0 {
            return;
        }
        if self.active_index == 0 {
            self.active_index = visible_count - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// Resolves the item an activation should open.
    ///
    /// A single-member subset activates that member no matter where the
    /// cursor points. Otherwise the item under the cursor is returned, or
    /// `None` when the subset is empty or the cursor is out of range.
    #[must_use]
    pub fn activation_target<'a>(&self, visible: &'a [Item]) -> Option<&'a Item> {
        if visible.len() == 1 {
            return visible.first();
        }
        visible.get(self.active_index)
    }

    /// Resolves the item a digit hotkey should open.
    ///
    /// Digits only work while the visible subset has at most nine members;
    /// digit `n` maps to the `n`-th visible item.
    #[must_use]
    pub fn digit_target<'a>(&self, visible: &'a [Item], digit: u8) -> Option<&'a Item> {
        if !(1..=9).contains(&digit) || visible.len() > 9 {
            return None;
        }
        visible.get(usize::from(digit) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item {
                id: format!("id{i}"),
                name: format!("Item {i}"),
                tags: String::new(),
                url: format!("https://item{i}.example"),
                icon: String::new(),
                group: String::new(),
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut nav = NavigationController::new();

        nav.next(3);
        nav.next(3);
        assert_eq!(nav.active_index(), 2);
        nav.next(3);
        assert_eq!(nav.active_index(), 0);

        nav.prev(3);
        assert_eq!(nav.active_index(), 2);
    }

    #[test]
    fn movement_on_an_empty_subset_is_a_no_op() {
        let mut nav = NavigationController::new();

        nav.next(0);
        nav.prev(0);

        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn many_steps_forward_match_modular_arithmetic() {
        let mut nav = NavigationController::new();
        for _ in 0..7 {
            nav.next(5);
        }
        assert_eq!(nav.active_index(), 7 % 5);
    }

    #[test]
    fn activation_follows_the_cursor() {
        let visible = items(3);
        let mut nav = NavigationController::new();

        nav.next(3);
        let target = nav.activation_target(&visible).unwrap();
        assert_eq!(target.id, "id1");
    }

    #[test]
    fn single_member_subset_activates_regardless_of_cursor() {
        let visible = items(1);
        let mut nav = NavigationController::new();
        nav.active_index = 4;

        let target = nav.activation_target(&visible).unwrap();
        assert_eq!(target.id, "id0");
    }

    #[test]
    fn activation_on_empty_or_out_of_range_is_none() {
        let mut nav = NavigationController::new();

        assert!(nav.activation_target(&[]).is_none());

        nav.active_index = 9;
        assert!(nav.activation_target(&items(3)).is_none());
    }

    #[test]
    fn digits_map_onto_small_subsets_only() {
        let nav = NavigationController::new();

        let nine = items(9);
        assert_eq!(nav.digit_target(&nine, 1).unwrap().id, "id0");
        assert_eq!(nav.digit_target(&nine, 9).unwrap().id, "id8");

        let ten = items(10);
        assert!(nav.digit_target(&ten, 1).is_none());

        assert!(nav.digit_target(&items(3), 0).is_none());
        assert!(nav.digit_target(&items(3), 5).is_none());
    }
}
