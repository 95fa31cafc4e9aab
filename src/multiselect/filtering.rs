//! Filter application and pointer movement.

use super::model::Model;

impl<V: Clone> Model<V> {
    /// Re-derives the filter from the input's current line and refilters the
    /// choice list. The query is lower-cased before searching, so the filter
    /// is case-insensitive regardless of what was typed.
    pub(super) fn apply_filter(&mut self) {
        let query = self.filter_input.value().to_lowercase();
        self.choices.search(&query);
    }

    /// Moves the pointer up one navigable row, wrapping to the last row.
    /// A no-op when the filtered view is empty.
    pub(super) fn move_up(&mut self) {
        let len = self.choices.real_length();
        if len == 0 {
            return;
        }
        self.pointer = if self.pointer > 0 {
            self.pointer - 1
        } else {
            len - 1
        };
    }

    /// Moves the pointer down one navigable row, wrapping to the first row.
    /// A no-op when the filtered view is empty.
    pub(super) fn move_down(&mut self) {
        let len = self.choices.real_length();
        if len == 0 {
            return;
        }
        self.pointer = if self.pointer + 1 < len {
            self.pointer + 1
        } else {
            0
        };
    }
}
