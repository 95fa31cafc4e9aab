//! Core types for the multi-select prompt.

use bubbletea_rs::Cmd;

/// Lifecycle state of a prompt.
///
/// A prompt starts `Pending` and moves to `Answered` exactly once, when a
/// submit passes validation. The transition is terminal: an answered prompt
/// ignores every further message and its view is frozen to the answer
/// summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The prompt is interactive and consuming key events.
    Pending,
    /// The prompt has been answered; events are no longer processed.
    Answered,
}

/// Validation function run against the answer values on submit.
///
/// Returning `Err(message)` keeps the prompt pending and displays the
/// message beneath it; the user can adjust the selection and submit again.
pub type ValidateFunc<V> = Box<dyn Fn(&[V]) -> Result<(), String> + Send + Sync>;

/// Callback invoked once with the final answer values when the prompt is
/// answered. May return a command for the runtime, e.g.
/// `bubbletea_rs::quit()`.
pub type DoneFunc<V> = Box<dyn FnOnce(&[V]) -> Option<Cmd> + Send + Sync>;
