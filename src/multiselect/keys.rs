//! Key bindings for the multi-select prompt.
//!
//! Navigation deliberately binds no printable keys: every printable
//! character must stay available to the live filter. Control-key aliases
//! (`ctrl+p`/`ctrl+n`) are safe because they never reach the filter input.

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for toggling, navigation, and submit.
#[derive(Debug, Clone)]
pub struct MultiSelectKeyMap {
    /// Toggle the choice under the pointer. Also clears the filter.
    pub toggle: key::Binding,
    /// Move the pointer up one navigable row, wrapping at the top.
    pub up: key::Binding,
    /// Move the pointer down one navigable row, wrapping at the bottom.
    pub down: key::Binding,
    /// Submit the current selection for validation.
    pub submit: key::Binding,
}

impl Default for MultiSelectKeyMap {
    fn default() -> Self {
        Self {
            toggle: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "toggle"),
            up: key::new_binding(vec![
                key::with_keys_str(&["up", "ctrl+p"]),
                key::with_help("↑", "up"),
            ]),
            down: key::new_binding(vec![
                key::with_keys_str(&["down", "ctrl+n"]),
                key::with_help("↓", "down"),
            ]),
            submit: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm"),
        }
    }
}

impl key::KeyMap for MultiSelectKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.toggle, &self.submit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.toggle, &self.submit],
        ]
    }
}
