//! Single-selection list state

/// An item that can live in a [`SelectableList`]
pub trait Selectable {
    fn id(&self) -> &str;
    fn selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}

/// Ordered collection where at most one item is selected at a time.
///
/// Every user-triggered selection clears all flags and sets exactly one;
/// callers never observe a half-applied transition.
#[derive(Debug, Clone, Default)]
pub struct SelectableList<T> {
    items: Vec<T>,
}

impl<T: Selectable> SelectableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the selected item, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|i| i.selected())
    }

    /// The selected item, if any
    pub fn selected(&self) -> Option<&T> {
        self.items.iter().find(|i| i.selected())
    }

    /// Select the item with the given id and return it.
    ///
    /// An unknown id is a caller bug, not a user error: the list is left
    /// untouched and `None` is returned.
    pub fn select(&mut self, id: &str) -> Option<&T> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        for item in &mut self.items {
            item.set_selected(false);
        }
        self.items[index].set_selected(true);
        Some(&self.items[index])
    }

    /// Select by position; out-of-range indexes are a no-op
    pub fn select_index(&mut self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            return None;
        }
        for item in &mut self.items {
            item.set_selected(false);
        }
        self.items[index].set_selected(true);
        Some(&self.items[index])
    }

    /// Move the selection down one item (wraps; selects the first item when
    /// nothing is selected yet)
    pub fn select_next(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let next = match self.selected_index() {
            Some(i) => (i + 1) % self.len(),
            None => 0,
        };
        self.select_index(next)
    }

    /// Move the selection up one item (wraps)
    pub fn select_prev(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let prev = match self.selected_index() {
            Some(0) | None => self.len() - 1,
            Some(i) => i - 1,
        };
        self.select_index(prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Entry {
        id: String,
        selected: bool,
    }

    impl Entry {
        fn new(id: &str, selected: bool) -> Self {
            Self {
                id: id.to_string(),
                selected,
            }
        }
    }

    impl Selectable for Entry {
        fn id(&self) -> &str {
            &self.id
        }
        fn selected(&self) -> bool {
            self.selected
        }
        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }
    }

    fn abc_list() -> SelectableList<Entry> {
        SelectableList::new(vec![
            Entry::new("A", false),
            Entry::new("B", true),
            Entry::new("C", false),
        ])
    }

    fn flags(list: &SelectableList<Entry>) -> Vec<bool> {
        list.items().iter().map(|i| i.selected).collect()
    }

    mod select_by_id {
        use super::*;

        #[test]
        fn test_select_clears_others_and_sets_one() {
            let mut list = abc_list();
            let picked = list.select("A").unwrap();
            assert_eq!(picked.id(), "A");
            assert_eq!(flags(&list), vec![true, false, false]);
        }

        #[test]
        fn test_exactly_one_selected_after_any_select() {
            let mut list = abc_list();
            for id in ["C", "A", "C", "B"] {
                list.select(id);
                let count = list.items().iter().filter(|i| i.selected).count();
                assert_eq!(count, 1);
                assert_eq!(list.selected().unwrap().id(), id);
            }
        }

        #[test]
        fn test_unknown_id_leaves_state_unchanged() {
            let mut list = abc_list();
            assert!(list.select("Z").is_none());
            assert_eq!(flags(&list), vec![false, true, false]);
        }

        #[test]
        fn test_reselecting_current_item_keeps_it_selected() {
            let mut list = abc_list();
            list.select("B");
            assert_eq!(flags(&list), vec![false, true, false]);
        }
    }

    mod select_by_index {
        use super::*;

        #[test]
        fn test_select_index_out_of_range_is_noop() {
            let mut list = abc_list();
            assert!(list.select_index(3).is_none());
            assert_eq!(flags(&list), vec![false, true, false]);
        }

        #[test]
        fn test_select_next_wraps() {
            let mut list = abc_list();
            list.select("C");
            let picked = list.select_next().unwrap();
            assert_eq!(picked.id(), "A");
        }

        #[test]
        fn test_select_prev_wraps() {
            let mut list = abc_list();
            list.select("A");
            let picked = list.select_prev().unwrap();
            assert_eq!(picked.id(), "C");
        }

        #[test]
        fn test_select_next_with_no_selection_picks_first() {
            let mut list = SelectableList::new(vec![
                Entry::new("A", false),
                Entry::new("B", false),
            ]);
            assert!(list.selected().is_none());
            let picked = list.select_next().unwrap();
            assert_eq!(picked.id(), "A");
        }

        #[test]
        fn test_empty_list_navigation_is_noop() {
            let mut list: SelectableList<Entry> = SelectableList::new(vec![]);
            assert!(list.select_next().is_none());
            assert!(list.select_prev().is_none());
            assert!(list.is_empty());
        }
    }
}
