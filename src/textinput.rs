//! Single-line text input component.
//!
//! A trimmed-down line editor for prompts: character insertion, word and
//! line deletion, cursor movement, an optional character limit, and a
//! width-limited display window that scrolls horizontally to keep the cursor
//! visible. The caret is drawn as a reverse-video cell, so the component
//! works without any terminal cursor support.
//!
//! The component is a sub-component in the Elm Architecture sense: embed it
//! in your model, forward messages to [`Model::update`], and splice
//! [`Model::view`] into your frame.
//!
//! ```rust
//! use bubbletea_prompts::textinput;
//!
//! let mut input = textinput::new();
//! input.focus();
//! input.set_placeholder("type to filter");
//! assert_eq!(input.value(), "");
//! ```

use crate::key::{new_binding, with_keys_str, Binding};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

/// Key bindings for the editing actions of the text input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the cursor one character right.
    pub character_forward: Binding,
    /// Move the cursor one character left.
    pub character_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
    /// Delete everything before the cursor.
    pub delete_before_cursor: Binding,
    /// Delete everything from the cursor to the end of the line.
    pub delete_after_cursor: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
}

/// The default set of key bindings for the text input.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        delete_word_backward: new_binding(vec![with_keys_str(&["alt+backspace", "ctrl+w"])]),
        delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
        delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
    }
}

/// A single-line text input model.
pub struct Model {
    /// Prompt text rendered before the input, e.g. `"> "`.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Style for the caret cell. Rendered with reverse video on top.
    pub cursor_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Key bindings for editing actions.
    pub key_map: KeyMap,
    /// Maximum number of characters accepted. `0` means no limit.
    pub char_limit: usize,
    /// Maximum display width in columns. `0` means no limit.
    pub width: usize,

    value: Vec<char>,
    pos: usize,
    offset: usize,
    focus: bool,
}

/// Creates a text input with default settings. It starts blurred; call
/// [`Model::focus`] to accept input.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        cursor_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        key_map: default_key_map(),
        char_limit: 0,
        width: 0,
        value: Vec::new(),
        pos: 0,
        offset: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the value, truncating to the character limit, and moves the
    /// cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        if self.char_limit > 0 && self.value.len() > self.char_limit {
            self.value.truncate(self.char_limit);
        }
        self.set_cursor(self.value.len());
    }

    /// Returns the cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamping to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves the cursor to the start of the line.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the line.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value and moves the cursor to the start. Settings such as
    /// placeholder and width are kept.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Focuses the input so it responds to key events.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blurs the input; key events are ignored until focused again.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns whether the input is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Processes a message. Only [`KeyMsg`] values are of interest; anything
    /// else is ignored. Returns no commands — the component is fully
    /// synchronous.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return None;
        };

        let keys = self.key_map.clone();
        if keys.character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if keys.character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if keys.line_start.matches(key_msg) {
            self.cursor_start();
        } else if keys.line_end.matches(key_msg) {
            self.cursor_end();
        } else if keys.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.set_cursor(self.pos - 1);
            }
        } else if keys.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                self.handle_overflow();
            }
        } else if keys.delete_word_backward.matches(key_msg) {
            self.delete_word_backward();
        } else if keys.delete_before_cursor.matches(key_msg) {
            self.value.drain(..self.pos);
            self.set_cursor(0);
        } else if keys.delete_after_cursor.matches(key_msg) {
            self.value.truncate(self.pos);
            self.handle_overflow();
        } else if let KeyCode::Char(c) = key_msg.key {
            // Plain characters (shifted or not) are input; anything with
            // control or alt held belongs to some other binding.
            if key_msg.modifiers.difference(KeyModifiers::SHIFT) == KeyModifiers::NONE {
                self.insert_char(c);
            }
        }
        None
    }

    /// Renders the input: prompt, visible slice of the value, and caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let (start, end) = self.visible_range();
        let pos = self.pos - start;
        let visible = &self.value[start..end];

        let mut v = String::new();
        let before: String = visible[..pos.min(visible.len())].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.focus {
            if pos < visible.len() {
                v.push_str(&self.caret(visible[pos]));
                let after: String = visible[pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            } else {
                v.push_str(&self.caret(' '));
            }
        } else if pos < visible.len() {
            let after: String = visible[pos..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let mut v = String::new();
        let mut chars = self.placeholder.chars();
        if self.focus {
            if let Some(first) = chars.next() {
                v.push_str(&self.caret(first));
            }
        }
        let rest: String = chars.collect();
        v.push_str(&self.placeholder_style.render(&rest));
        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn caret(&self, c: char) -> String {
        self.cursor_style
            .clone()
            .reverse(true)
            .inline(true)
            .render(&c.to_string())
    }

    fn insert_char(&mut self, c: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, c);
        self.set_cursor(self.pos + 1);
    }

    fn delete_word_backward(&mut self) {
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.pos);
        self.set_cursor(start);
    }

    /// Keeps the cursor inside the display window when a width is set.
    fn handle_overflow(&mut self) {
        if self.width == 0 {
            self.offset = 0;
            return;
        }
        if self.pos < self.offset {
            self.offset = self.pos;
            return;
        }
        // Shrink from the left until the span up to the cursor fits.
        while self.offset < self.pos && span_width(&self.value[self.offset..self.pos]) >= self.width
        {
            self.offset += 1;
        }
    }

    /// The half-open character range currently visible.
    fn visible_range(&self) -> (usize, usize) {
        if self.width == 0 {
            return (0, self.value.len());
        }
        let mut end = self.offset;
        let mut used = 0;
        while end < self.value.len() {
            let w = self.value[end].width().unwrap_or(0);
            if used + w > self.width {
                break;
            }
            used += w;
            end += 1;
        }
        (self.offset, end)
    }
}

fn span_width(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut Model, key: KeyCode) {
        press_with(input, key, KeyModifiers::NONE);
    }

    fn press_with(input: &mut Model, key: KeyCode, modifiers: KeyModifiers) {
        let msg: Msg = Box::new(KeyMsg { key, modifiers });
        input.update(&msg);
    }

    fn type_str(input: &mut Model, s: &str) {
        for c in s.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_default_values() {
        let input = new();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
        assert!(!input.focused());
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = new();
        input.focus();
        type_str(&mut input, "hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.position(), 5);

        input.set_cursor(0);
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(input.value(), "xhello");
    }

    #[test]
    fn test_ignores_input_when_blurred() {
        let mut input = new();
        type_str(&mut input, "hello");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = new();
        input.focus();
        input.set_value("abc");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "ab");

        input.set_cursor(0);
        press(&mut input, KeyCode::Delete);
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_movement_keys() {
        let mut input = new();
        input.focus();
        input.set_value("word");
        press(&mut input, KeyCode::Left);
        assert_eq!(input.position(), 3);
        press(&mut input, KeyCode::Home);
        assert_eq!(input.position(), 0);
        press(&mut input, KeyCode::Left); // already at start
        assert_eq!(input.position(), 0);
        press(&mut input, KeyCode::End);
        assert_eq!(input.position(), 4);
    }

    #[test]
    fn test_kill_line_bindings() {
        let mut input = new();
        input.focus();
        input.set_value("hello world");
        input.set_cursor(5);
        press_with(&mut input, KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "hello");

        input.set_value("hello world");
        input.set_cursor(6);
        press_with(&mut input, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "world");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = new();
        input.focus();
        input.set_value("one two  three");
        press_with(&mut input, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "one two  ");
        press_with(&mut input, KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "one ");
    }

    #[test]
    fn test_char_limit() {
        let mut input = new();
        input.focus();
        input.char_limit = 3;
        type_str(&mut input, "abcdef");
        assert_eq!(input.value(), "abc");

        input.set_value("abcdef");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_control_chars_are_not_input() {
        let mut input = new();
        input.focus();
        press_with(&mut input, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_reset() {
        let mut input = new();
        input.set_value("some text");
        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_window_follows_cursor() {
        let mut input = new();
        input.focus();
        input.width = 4;
        input.set_value("abcdefgh");
        // Cursor at the end: window must include it.
        let (start, end) = input.visible_range();
        assert!(start > 0);
        assert!(end >= input.position().min(input.value.len()));

        input.set_cursor(0);
        let (start, _) = input.visible_range();
        assert_eq!(start, 0);
    }

    #[test]
    fn test_view_contains_prompt_and_value() {
        let mut input = new();
        input.set_value("abc");
        let view = input.view();
        assert!(view.contains("abc"));
        assert!(view.starts_with("> "));
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let mut input = new();
        input.set_placeholder("start typing");
        assert!(input.view().contains("start typing"));
        input.set_value("x");
        assert!(!input.view().contains("start typing"));
    }
}
