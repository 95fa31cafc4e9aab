//! Type-safe key bindings with help metadata.
//!
//! A [`Binding`] couples one or more key presses with the help text shown to
//! the user. Components keep their bindings in a keymap struct and test
//! incoming [`KeyMsg`] values against them, so rebinding a component is a
//! matter of swapping the keymap rather than editing match arms.
//!
//! Bindings can be built directly:
//!
//! ```rust
//! use bubbletea_prompts::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let submit = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//! ```
//!
//! or with functional options and string key names:
//!
//! ```rust
//! use bubbletea_prompts::key::{new_binding, with_help, with_keys_str};
//!
//! let quit = new_binding(vec![
//!     with_keys_str(&["ctrl+c", "esc"]),
//!     with_help("ctrl+c", "quit"),
//! ]);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The pressed key.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help metadata for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"` or `"ctrl+c"`.
    pub key: String,
    /// Action description, e.g. `"move up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key presses.
    ///
    /// Accepts plain [`KeyCode`]s or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help metadata, builder style.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the binding's help metadata.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Enables or disables the binding. A disabled binding never matches and
    /// is omitted from help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether the message matches this binding.
    ///
    /// A binding declared without modifiers also matches shifted characters,
    /// so `Char('A')` arriving with `SHIFT` set still hits a bare `Char('A')`
    /// binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|k| {
            if k.code != msg.key {
                return false;
            }
            if k.modifiers == msg.modifiers {
                return true;
            }
            k.modifiers == KeyModifiers::NONE
                && matches!(k.code, KeyCode::Char(_))
                && msg.modifiers == KeyModifiers::SHIFT
        })
    }
}

/// A functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from functional options, Go style.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new::<KeyPress>(vec![]);
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: bind the given key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Option: bind keys given by name, e.g. `"ctrl+c"`, `"up"`, `"tab"`.
///
/// Unrecognized names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    Box::new(move |b| b.keys = parsed)
}

/// Option: attach help metadata.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option: start the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Reports whether the message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Keymaps that can describe themselves for help displays.
pub trait KeyMap {
    /// The most important bindings, for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code = None;
    for part in s.split('+') {
        match part {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            name => code = parse_key_name(name),
        }
    }
    code.map(|code| KeyPress { code, modifiers })
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_bare_key() {
        let b = Binding::new(vec![KeyCode::Tab]);
        assert!(b.matches(&msg(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(!b.matches(&msg(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!b.matches(&msg(KeyCode::Tab, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_binding_matches_modified_key() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&msg(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shifted_char_matches_unmodified_binding() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Tab]);
        b.set_enabled(false);
        assert!(!b.matches(&msg(KeyCode::Tab, KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&msg(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_new_binding_with_options() {
        let b = new_binding(vec![
            with_keys_str(&["ctrl+c", "esc"]),
            with_help("ctrl+c", "quit"),
        ]);
        assert!(b.matches(&msg(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(b.matches(&msg(KeyCode::Esc, KeyModifiers::NONE)));
        assert_eq!(b.help().key, "ctrl+c");
        assert_eq!(b.help().desc, "quit");
    }

    #[test]
    fn test_with_keys_str_skips_unknown_names() {
        let b = new_binding(vec![with_keys_str(&["no-such-key", "tab"])]);
        assert_eq!(b.keys().len(), 1);
        assert!(b.matches(&msg(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_any() {
        let up = Binding::new(vec![KeyCode::Up]);
        let down = Binding::new(vec![KeyCode::Down]);
        assert!(matches(&msg(KeyCode::Up, KeyModifiers::NONE), &[&up, &down]));
        assert!(!matches(&msg(KeyCode::Tab, KeyModifiers::NONE), &[&up, &down]));
    }
}
