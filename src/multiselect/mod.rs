//! Multi-select prompt: choose zero or more entries from a list.
//!
//! The prompt shows a question, the choice list, and a live filter line.
//! Arrow keys move the pointer through the navigable rows of the current
//! filtered view (wrapping at both ends), tab toggles the checkbox under the
//! pointer and clears the filter, and every other key is line input for the
//! filter. Enter submits: the checked entries are collected in list order,
//! validated, and — on success — the prompt freezes into a one-line answer
//! summary and stops reacting to input.
//!
//! ## State machine
//!
//! The prompt is strictly event-driven: the runtime delivers one key event
//! at a time, the event is applied to completion, and the next `view()`
//! call reflects the new state. Two states exist, `Pending` and `Answered`,
//! and the transition between them is one-way. Any key that is not bound to
//! navigation or submit invalidates the pointer, because the filtered view
//! may have changed shape underneath it — the pointer resets to the first
//! row rather than carrying a stale position.
//!
//! ## Embedding
//!
//! ```rust,ignore
//! struct App {
//!     prompt: multiselect::Model<&'static str>,
//! }
//!
//! impl bubbletea_rs::Model for App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.prompt.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.prompt.view()
//!     }
//! }
//! ```
//!
//! The `with_done` callback (or polling [`Model::answered`]) tells the host
//! when the answer is in; returning `bubbletea_rs::quit()` from the callback
//! ends the program.

/// Key bindings for the prompt's actions.
pub mod keys;

/// Styling for every visual element of the prompt.
pub mod style;

mod filtering;
mod model;
mod rendering;
mod types;


pub use keys::MultiSelectKeyMap;
pub use model::Model;
pub use style::MultiSelectStyles;
pub use types::{DoneFunc, Status, ValidateFunc};

use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<V: Clone> Model<V> {
    /// Processes one key event.
    ///
    /// Events are ignored entirely once the prompt is answered. While
    /// pending, the bound keys drive toggling, navigation, and submit; any
    /// other key — recognized or not — is forwarded to the filter input and
    /// refilters the choices. A validation error from a previous submit is
    /// cleared by the next event.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if self.status == Status::Answered {
            return None;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };

        self.first_render = false;
        self.error = None;

        if self.keymap.submit.matches(key_msg) {
            return self.submit();
        }

        let navigated = self.keymap.up.matches(key_msg) || self.keymap.down.matches(key_msg);
        if self.keymap.toggle.matches(key_msg) {
            self.choices.toggle(self.pointer);
            self.filter_input.reset();
            self.choices.reset_filter();
        } else if self.keymap.up.matches(key_msg) {
            self.move_up();
        } else if self.keymap.down.matches(key_msg) {
            self.move_down();
        } else {
            self.filter_input.update(msg);
            self.apply_filter();
        }

        // The pointer survives only plain navigation. Everything else may
        // have reshaped the filtered view, so it snaps back to the top.
        if !navigated {
            self.pointer = 0;
        }
        None
    }
}
