//! Visual styling for the multi-select prompt.

use lipgloss_extras::prelude::*;

/// Glyph drawn in front of the row under the pointer.
pub const POINTER: &str = "❯";

/// Checkbox glyph for a checked item.
pub const CHECKED: &str = "◉";

/// Checkbox glyph for an unchecked item.
pub const UNCHECKED: &str = "◯";

/// Rule drawn for an unlabeled separator.
pub const SEPARATOR_RULE: &str = "──────────";

/// Styles for every visual element of the prompt.
///
/// All fields are plain lipgloss styles; replace any of them to retheme the
/// prompt. The defaults follow classic prompt conventions: cyan pointer and
/// answer, green checked glyph, dim separators and filtered-out rows.
#[derive(Debug, Clone)]
pub struct MultiSelectStyles {
    /// The question text.
    pub question: Style,
    /// The one-time key hint after the question.
    pub hint: Style,
    /// The pointer glyph.
    pub pointer: Style,
    /// The checkbox glyph of a checked item.
    pub checked: Style,
    /// The checkbox glyph of an unchecked item.
    pub unchecked: Style,
    /// The name of the row under the pointer.
    pub highlighted: Style,
    /// The name of any other navigable row.
    pub normal: Style,
    /// The name of a row excluded by the current filter.
    pub dimmed: Style,
    /// Separator labels and rules.
    pub separator: Style,
    /// The comma-joined answer summary.
    pub answer: Style,
    /// The validation error line.
    pub error: Style,
}

impl Default for MultiSelectStyles {
    fn default() -> Self {
        Self {
            question: Style::new(),
            hint: Style::new().foreground(Color::from("240")),
            pointer: Style::new().foreground(Color::from("6")),
            checked: Style::new().foreground(Color::from("2")),
            unchecked: Style::new(),
            highlighted: Style::new().foreground(Color::from("6")),
            normal: Style::new(),
            dimmed: Style::new().foreground(Color::from("240")),
            separator: Style::new().foreground(Color::from("240")),
            answer: Style::new().foreground(Color::from("6")),
            error: Style::new().foreground(Color::from("1")),
        }
    }
}
