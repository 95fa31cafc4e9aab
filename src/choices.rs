//! The choice list consumed by selection prompts.
//!
//! [`Choices`] owns an ordered sequence of [`Choice`] values together with the
//! currently filtered view of it. Prompts navigate by *navigable index*: the
//! position of a selectable item within the filtered view, skipping
//! separators. The full list order is never changed by filtering — the
//! filtered view is a projection, and [`Choices::reset_filter`] restores the
//! unfiltered projection at any time.
//!
//! ```rust
//! use bubbletea_prompts::choices::{Choice, Choices};
//!
//! let mut choices = Choices::new(vec![
//!     Choice::item("Apple", 1),
//!     Choice::separator(),
//!     Choice::item("Banana", 2),
//! ]);
//!
//! assert_eq!(choices.real_length(), 2); // separators are not navigable
//! assert_eq!(choices.search("ban"), 1);
//! choices.toggle(0); // toggles Banana: navigable index 0 of the filtered view
//! choices.reset_filter();
//! assert_eq!(choices.real_length(), 2);
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// One entry in a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<V> {
    /// A selectable entry with a display name, an answer value, and a
    /// checked flag.
    Item {
        /// Display name, also the text the filter matches against.
        name: String,
        /// The value reported when the prompt is answered.
        value: V,
        /// Whether the entry is currently selected.
        checked: bool,
    },
    /// A purely visual divider. Never navigable, never selectable.
    Separator(Option<String>),
}

impl<V> Choice<V> {
    /// Creates an unchecked item.
    pub fn item(name: impl Into<String>, value: V) -> Self {
        Self::Item {
            name: name.into(),
            value,
            checked: false,
        }
    }

    /// Creates an item that starts out checked.
    pub fn checked_item(name: impl Into<String>, value: V) -> Self {
        Self::Item {
            name: name.into(),
            value,
            checked: true,
        }
    }

    /// Creates an unlabeled separator, rendered as a horizontal rule.
    pub fn separator() -> Self {
        Self::Separator(None)
    }

    /// Creates a separator with a label.
    pub fn titled_separator(label: impl Into<String>) -> Self {
        Self::Separator(Some(label.into()))
    }

    /// Returns whether this choice is a selectable item.
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item { .. })
    }

    /// Returns the display name for items, `None` for separators.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Item { name, .. } => Some(name),
            Self::Separator(_) => None,
        }
    }
}

/// A navigable row of the filtered view: the full-list index of the item and
/// the character positions matched by the current query.
#[derive(Debug, Clone)]
struct NavigableRow {
    index: usize,
    matches: Vec<usize>,
}

/// An ordered choice list plus its current filtered view.
#[derive(Debug)]
pub struct Choices<V> {
    all: Vec<Choice<V>>,
    visible: Vec<NavigableRow>,
    query: String,
}

impl<V> Choices<V> {
    /// Creates a choice list. The filtered view starts out unfiltered.
    pub fn new(choices: Vec<Choice<V>>) -> Self {
        let mut c = Self {
            all: choices,
            visible: Vec::new(),
            query: String::new(),
        };
        c.reset_filter();
        c
    }

    /// Number of entries in the full list, separators included.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns whether the full list is empty.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Number of selectable items in the full list, ignoring any filter.
    pub fn item_count(&self) -> usize {
        self.all.iter().filter(|c| c.is_item()).count()
    }

    /// Number of navigable rows in the current filtered view.
    pub fn real_length(&self) -> usize {
        self.visible.len()
    }

    /// Iterates over the full list in order, separators included.
    pub fn iter(&self) -> std::slice::Iter<'_, Choice<V>> {
        self.all.iter()
    }

    /// The current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns whether a filter is currently applied.
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }

    /// Refilters the list against `text` and returns the new navigable
    /// length. An empty query restores the unfiltered view.
    ///
    /// Matching is fuzzy; items are kept in list order. Separators never
    /// participate.
    pub fn search(&mut self, text: &str) -> usize {
        if text.is_empty() {
            self.reset_filter();
            return self.real_length();
        }

        let matcher = SkimMatcherV2::default();
        self.query = text.to_string();
        self.visible = self
            .all
            .iter()
            .enumerate()
            .filter_map(|(index, choice)| {
                let name = choice.name()?;
                matcher
                    .fuzzy_indices(name, text)
                    .map(|(_, matches)| NavigableRow { index, matches })
            })
            .collect();
        self.real_length()
    }

    /// Clears the filter, making every item navigable again.
    pub fn reset_filter(&mut self) {
        self.query.clear();
        self.visible = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_item())
            .map(|(index, _)| NavigableRow {
                index,
                matches: Vec::new(),
            })
            .collect();
    }

    /// Looks up a choice by navigable index into the filtered view.
    pub fn get(&self, nav_index: usize) -> Option<&Choice<V>> {
        let row = self.visible.get(nav_index)?;
        self.all.get(row.index)
    }

    /// Flips the checked flag on the navigable row at `nav_index`.
    ///
    /// Returns `false` when the index is out of bounds of the filtered view
    /// (for example when the view is empty), leaving every checked flag
    /// untouched.
    pub fn toggle(&mut self, nav_index: usize) -> bool {
        let Some(row) = self.visible.get(nav_index) else {
            return false;
        };
        match &mut self.all[row.index] {
            Choice::Item { checked, .. } => {
                *checked = !*checked;
                true
            }
            Choice::Separator(_) => false,
        }
    }

    /// All checked items as `(name, value)` pairs, in full-list order and
    /// regardless of the current filter.
    pub fn checked(&self) -> impl Iterator<Item = (&str, &V)> {
        self.all.iter().filter_map(|c| match c {
            Choice::Item {
                name,
                value,
                checked: true,
            } => Some((name.as_str(), value)),
            _ => None,
        })
    }

    /// Returns whether the entry at full-list `index` is part of the current
    /// filtered view. Always true for items while unfiltered; always false
    /// for separators once a query is applied.
    pub fn is_match(&self, index: usize) -> bool {
        if !self.is_filtered() {
            return self.all.get(index).is_some_and(Choice::is_item);
        }
        self.visible.iter().any(|row| row.index == index)
    }

    /// Matched character positions for the item at full-list `index`, for
    /// render-time highlighting. Empty or absent while unfiltered.
    pub fn matches_for(&self, index: usize) -> Option<&[usize]> {
        self.visible
            .iter()
            .find(|row| row.index == index)
            .map(|row| row.matches.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Choices<u32> {
        Choices::new(vec![
            Choice::item("Apple", 1),
            Choice::checked_item("Banana", 2),
            Choice::separator(),
            Choice::item("Cherry", 3),
        ])
    }

    #[test]
    fn test_real_length_excludes_separators() {
        let choices = fruit();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices.item_count(), 3);
        assert_eq!(choices.real_length(), 3);
    }

    #[test]
    fn test_get_skips_separators() {
        let choices = fruit();
        assert_eq!(choices.get(2).and_then(Choice::name), Some("Cherry"));
        assert!(choices.get(3).is_none());
    }

    #[test]
    fn test_search_narrows_and_reset_restores() {
        let mut choices = fruit();
        assert_eq!(choices.search("an"), 1);
        assert_eq!(choices.get(0).and_then(Choice::name), Some("Banana"));
        assert!(choices.is_filtered());

        choices.reset_filter();
        assert_eq!(choices.real_length(), 3);
        assert!(!choices.is_filtered());
    }

    #[test]
    fn test_search_empty_query_is_unfiltered() {
        let mut choices = fruit();
        choices.search("an");
        assert_eq!(choices.search(""), 3);
        assert!(!choices.is_filtered());
    }

    #[test]
    fn test_search_no_matches() {
        let mut choices = fruit();
        assert_eq!(choices.search("zzz"), 0);
        assert!(choices.get(0).is_none());
    }

    #[test]
    fn test_toggle_through_filtered_view() {
        let mut choices = fruit();
        choices.search("cherry");
        assert!(choices.toggle(0));
        choices.reset_filter();
        let checked: Vec<&str> = choices.checked().map(|(n, _)| n).collect();
        assert_eq!(checked, vec!["Banana", "Cherry"]);
    }

    #[test]
    fn test_toggle_out_of_bounds_is_noop() {
        let mut choices = fruit();
        choices.search("zzz");
        assert!(!choices.toggle(0));
        let checked: Vec<&str> = choices.checked().map(|(n, _)| n).collect();
        assert_eq!(checked, vec!["Banana"]);
    }

    #[test]
    fn test_checked_order_ignores_filter() {
        let mut choices = fruit();
        choices.search("cherry");
        choices.toggle(0);
        // Filter still active: checked() reports full-list order.
        let values: Vec<u32> = choices.checked().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn test_matches_for_filtered_item() {
        let mut choices = fruit();
        choices.search("ba");
        let matches = choices.matches_for(1).expect("Banana should match");
        assert!(!matches.is_empty());
        assert!(choices.is_match(1));
        assert!(!choices.is_match(0));
        assert!(choices.matches_for(0).is_none());
    }

    #[test]
    fn test_is_match_unfiltered() {
        let choices = fruit();
        assert!(choices.is_match(0));
        assert!(!choices.is_match(2)); // separator
    }
}
