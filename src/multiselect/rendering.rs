//! View composition for the multi-select prompt.
//!
//! The view is a pure function of the model: the runtime replaces the
//! previously drawn frame with whatever `view()` returns, so every pass
//! renders the complete prompt — question, choice block, filter line — and
//! an answered prompt renders only the summary line.

use super::model::Model;
use super::style;
use super::types::Status;
use crate::choices::Choice;
use lipgloss_extras::prelude::*;

impl<V: Clone> Model<V> {
    /// Renders the prompt in its current state.
    ///
    /// While pending: the question (with a one-time toggle-key hint), one
    /// line per choice of the full list, and the filter line the embedded
    /// input renders. Once answered: the question and the comma-joined
    /// selection, nothing else.
    pub fn view(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.styles.question.render(&self.question));
        out.push(' ');

        if self.status == Status::Answered {
            out.push_str(&self.styles.answer.render(&self.selection.join(", ")));
            out.push('\n');
            return out;
        }

        if self.first_render {
            let hint = format!("(Press <{}> to select)", self.keymap.toggle.help().key);
            out.push_str(&self.styles.hint.render(&hint));
        }
        out.push('\n');
        out.push_str(&self.view_choices());
        out.push('\n');
        out.push_str(&self.filter_input.view());
        if let Some(error) = &self.error {
            out.push('\n');
            out.push_str(&self.styles.error.render(&format!(">> {}", error)));
        }
        out
    }

    /// Renders the choice block: the full list in order, with a running
    /// separator offset aligning list indices with the navigable pointer.
    fn view_choices(&self) -> String {
        let mut lines = Vec::with_capacity(self.choices.len());
        let mut separator_offset = 0;
        let navigable = self.choices.real_length();

        for (i, choice) in self.choices.iter().enumerate() {
            match choice {
                Choice::Separator(label) => {
                    separator_offset += 1;
                    let text = label.as_deref().unwrap_or(style::SEPARATOR_RULE);
                    lines.push(format!(" {}", self.styles.separator.render(text)));
                }
                Choice::Item { name, checked, .. } => {
                    // No row is highlighted while the filtered view is empty.
                    let highlighted = navigable > 0 && i - separator_offset == self.pointer;
                    lines.push(self.view_item(i, name, *checked, highlighted));
                }
            }
        }
        lines.join("\n")
    }

    fn view_item(&self, index: usize, name: &str, checked: bool, highlighted: bool) -> String {
        let pointer = if highlighted {
            self.styles.pointer.render(style::POINTER)
        } else {
            " ".to_string()
        };
        let glyph = if checked {
            self.styles.checked.render(style::CHECKED)
        } else {
            self.styles.unchecked.render(style::UNCHECKED)
        };

        let name_style = if highlighted {
            &self.styles.highlighted
        } else if self.choices.is_filtered() && !self.choices.is_match(index) {
            &self.styles.dimmed
        } else {
            &self.styles.normal
        };
        let rendered = match self.choices.matches_for(index) {
            Some(matches) if !matches.is_empty() => highlight_matches(name, matches, name_style),
            _ => name_style.render(name),
        };

        format!("{}{} {}", pointer, glyph, rendered)
    }
}

/// Underlines the matched character positions on top of the base style.
fn highlight_matches(text: &str, matches: &[usize], base: &Style) -> String {
    let underline = base.clone().underline(true);
    let mut out = String::new();
    let mut run = String::new();
    for (i, c) in text.chars().enumerate() {
        if matches.contains(&i) {
            if !run.is_empty() {
                out.push_str(&base.render(&run));
                run.clear();
            }
            out.push_str(&underline.render(&c.to_string()));
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        out.push_str(&base.render(&run));
    }
    out
}
