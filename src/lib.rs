#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-prompts/")]

//! # bubbletea-prompts
//!
//! Interactive terminal prompt components for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: ask a question, let the user answer with the keyboard, get a
//! typed result back.
//!
//! ## Overview
//!
//! Each prompt is a sub-component in the Elm Architecture style: it exposes
//! `update()` to consume runtime messages and `view()` to render its current
//! state as a string. The bubbletea runtime delivers key events one at a time
//! and replaces the previously drawn frame on every pass, so a prompt never
//! touches the terminal itself — it only computes the next frame.
//!
//! ## Components
//!
//! - [`multiselect`]: choose zero or more entries from a list with arrow-key
//!   navigation, a live filter, and tab-to-toggle checkboxes
//! - [`textinput`]: a single-line text editor with cursor movement, word
//!   operations, and width-limited display
//! - [`choices`]: the choice list shared by selection prompts — items,
//!   separators, filtering, and checked-state bookkeeping
//! - [`key`]: type-safe key bindings with help metadata
//!
//! ## Quick start
//!
//! Embed a prompt in your own model and forward messages to it:
//!
//! ```rust
//! use bubbletea_prompts::choices::Choice;
//! use bubbletea_prompts::multiselect;
//!
//! let prompt = multiselect::Model::new(
//!     "Which toppings do you want?",
//!     vec![
//!         Choice::item("Cheese", "cheese"),
//!         Choice::item("Mushrooms", "mushrooms"),
//!         Choice::separator(),
//!         Choice::item("Olives", "olives"),
//!     ],
//! )
//! .unwrap();
//!
//! let frame = prompt.view();
//! assert!(frame.contains("Which toppings do you want?"));
//! ```
//!
//! Inside your application's `update()`:
//!
//! ```rust,ignore
//! fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!     if let Some(cmd) = self.prompt.update(&msg) {
//!         return Some(cmd);
//!     }
//!     if self.prompt.answered() {
//!         // self.prompt.values() holds the final answer
//!     }
//!     None
//! }
//! ```
//!
//! ## Key bindings
//!
//! Prompt keymaps are built from the [`key`] module and can be swapped out
//! wholesale. Any key that is not bound to navigation, toggling, or submit is
//! treated as filter input.

pub mod choices;
pub mod key;
pub mod multiselect;
pub mod textinput;

use thiserror::Error;

/// Errors surfaced when constructing a prompt.
///
/// These are configuration mistakes, detected before anything is rendered.
/// Runtime conditions (a validation function rejecting the answer, an empty
/// filter result) are ordinary prompt states, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A required constructor parameter was missing or empty.
    ///
    /// Returned, for example, by [`multiselect::Model::new`] when the choice
    /// list contains no selectable item.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),
}

pub use choices::{Choice, Choices};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use multiselect::{
    Model as MultiSelect, MultiSelectKeyMap, MultiSelectStyles, Status as MultiSelectStatus,
};
pub use textinput::{default_key_map as textinput_default_key_map, new as textinput_new, Model as TextInput};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_prompts::prelude::*;
///
/// let input = textinput_new();
/// assert_eq!(input.value(), "");
/// ```
pub mod prelude {
    pub use crate::choices::{Choice, Choices};
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::multiselect::{
        Model as MultiSelect, MultiSelectKeyMap, MultiSelectStyles,
        Status as MultiSelectStatus,
    };
    pub use crate::textinput::{new as textinput_new, Model as TextInput};
    pub use crate::Error;
}
