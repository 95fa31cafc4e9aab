//! Model struct, construction, and the submit transition.

use super::keys::MultiSelectKeyMap;
use super::style::MultiSelectStyles;
use super::types::{DoneFunc, Status, ValidateFunc};
use crate::choices::{Choice, Choices};
use crate::{textinput, Error};
use bubbletea_rs::Cmd;

/// The multi-select prompt model.
///
/// Owns the choice list, the pointer, the embedded filter input, and the
/// answer once submitted. `V` is the answer value type carried by each
/// [`Choice::Item`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_prompts::choices::Choice;
/// use bubbletea_prompts::multiselect::Model;
///
/// let prompt = Model::new(
///     "Pick some fruit",
///     vec![Choice::item("Apple", 1), Choice::item("Banana", 2)],
/// )
/// .unwrap();
/// assert!(!prompt.answered());
/// assert_eq!(prompt.pointer(), 0);
/// ```
pub struct Model<V> {
    pub(super) question: String,
    pub(super) choices: Choices<V>,
    pub(super) pointer: usize,
    pub(super) status: Status,
    pub(super) first_render: bool,
    pub(super) selection: Vec<String>,
    pub(super) values: Vec<V>,
    pub(super) error: Option<String>,
    pub(super) filter_input: textinput::Model,
    pub(super) keymap: MultiSelectKeyMap,
    pub(super) styles: MultiSelectStyles,
    pub(super) validate: Option<ValidateFunc<V>>,
    pub(super) on_done: Option<DoneFunc<V>>,
}

impl<V: Clone> Model<V> {
    /// Creates a prompt for the given question and choices.
    ///
    /// Fails fast with [`Error::MissingParam`] when the list contains no
    /// selectable item — a prompt made only of separators (or nothing) can
    /// never be answered meaningfully.
    pub fn new(question: impl Into<String>, choices: Vec<Choice<V>>) -> Result<Self, Error> {
        if !choices.iter().any(Choice::is_item) {
            return Err(Error::MissingParam("choices"));
        }

        let mut filter_input = textinput::new();
        filter_input.prompt = "  Filter: ".to_string();
        filter_input.focus();

        Ok(Self {
            question: question.into(),
            choices: Choices::new(choices),
            pointer: 0,
            status: Status::Pending,
            first_render: true,
            selection: Vec::new(),
            values: Vec::new(),
            error: None,
            filter_input,
            keymap: MultiSelectKeyMap::default(),
            styles: MultiSelectStyles::default(),
            validate: None,
            on_done: None,
        })
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: MultiSelectKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: MultiSelectStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the validation function run on every submit.
    pub fn with_validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&[V]) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Sets the callback invoked once with the final values when the prompt
    /// is answered.
    pub fn with_done<F>(mut self, done: F) -> Self
    where
        F: FnOnce(&[V]) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_done = Some(Box::new(done));
        self
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The current lifecycle state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the prompt has been answered.
    pub fn answered(&self) -> bool {
        self.status == Status::Answered
    }

    /// The navigable index of the highlighted row in the filtered view.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// The current filter text, as typed.
    pub fn filter(&self) -> String {
        self.filter_input.value()
    }

    /// The choice list.
    pub fn choices(&self) -> &Choices<V> {
        &self.choices
    }

    /// Display names of the answer, in list order. Empty until answered.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Values of the answer, in list order. Empty until answered.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// The message of the last failed validation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Collects the checked entries, validates them, and — on success —
    /// freezes the prompt with the answer.
    pub(super) fn submit(&mut self) -> Option<Cmd> {
        let mut names = Vec::new();
        let mut values = Vec::new();
        for (name, value) in self.choices.checked() {
            names.push(name.to_string());
            values.push(value.clone());
        }

        if let Some(validate) = &self.validate {
            if let Err(message) = validate(&values) {
                self.error = Some(message);
                return None;
            }
        }

        self.selection = names;
        self.values = values;
        self.status = Status::Answered;

        // The callback is taken out of the model, so it can never run twice.
        match self.on_done.take() {
            Some(done) => done(&self.values),
            None => None,
        }
    }
}
