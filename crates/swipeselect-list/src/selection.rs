//! Selected-row bookkeeping for multi-select mode.

use std::collections::BTreeSet;

/// The set of selected item indices.
///
/// Membership is presence only; an index appears at most once. Indices are
/// kept ordered so [`SelectionSet::selected_indices`] is ascending without a
/// sort at teardown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index`. Returns true iff the set is empty after
    /// the flip.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
        self.indices.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.indices.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn toggle_inserts_absent_index() {
        let mut set = SelectionSet::new();
        assert!(!set.toggle(7));
        assert!(set.is_selected(7));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn toggling_last_member_reports_empty() {
        let mut set: SelectionSet = [3].into_iter().collect();
        assert!(set.toggle(3));
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn now_empty_matches_count_after_every_toggle() {
        let mut set = SelectionSet::new();
        for index in [1, 4, 1, 9, 4, 9, 2, 2] {
            let now_empty = set.toggle(index);
            assert_eq!(now_empty, set.count() == 0, "after toggling {index}");
        }
        assert!(set.is_empty());
    }

    #[test]
    fn membership_follows_toggle_parity() {
        let sequence = [5, 0, 5, 12, 3, 12, 12, 0, 7, 5, 5, 5];
        let mut set = SelectionSet::new();
        let mut toggles: HashMap<usize, usize> = HashMap::new();
        for index in sequence {
            set.toggle(index);
            *toggles.entry(index).or_default() += 1;
        }

        for (index, count) in toggles {
            assert_eq!(set.is_selected(index), count % 2 == 1, "index {index}");
        }
    }

    #[test]
    fn selected_indices_are_ascending() {
        let mut set = SelectionSet::new();
        for index in [42, 3, 17, 0] {
            set.toggle(index);
        }
        assert_eq!(set.selected_indices(), vec![0, 3, 17, 42]);
        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set: SelectionSet = [1, 2, 3].into_iter().collect();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.is_selected(2));
    }
}
