//! Form screen: focus handling, key mapping and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input::{any_char, edit, numeric_char};
use crate::form::fields::LENGTH_MIN_HINT;
use crate::form::{Control, CopyState, Field, Form};
use crate::terminal::{
    BOX_WIDTH, DIM, GREEN, RESET, REVERSE, UNDERLINE, box_bottom, box_line, box_line_center,
    box_rule, box_top, console_width,
};

const TITLE: &str = "Random Password Generator";
const INNER_WIDTH: usize = BOX_WIDTH - 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Generate,
    Copy,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Submit,
    Copy,
    Quit,
}

/// Controller state the screen displays.
pub struct Screen<'a> {
    pub password: &'a str,
    pub copy_state: CopyState,
    pub can_copy: bool,
    pub alert: Option<&'a str>,
}

pub struct FormView {
    focus: Focus,
    cursor: usize,
}

impl FormView {
    pub fn new(form: &Form) -> Self {
        let focus = if form.is_empty() {
            Focus::Generate
        } else {
            Focus::Field(0)
        };
        let mut view = Self { focus, cursor: 0 };
        view.reset_cursor(form);
        view
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    fn order(form: &Form) -> Vec<Focus> {
        (0..form.len())
            .map(Focus::Field)
            .chain([Focus::Generate, Focus::Copy])
            .collect()
    }

    fn move_focus(&mut self, form: &Form, forward: bool) {
        let order = Self::order(form);
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.reset_cursor(form);
    }

    /// Park the cursor at the end of the focused field's text.
    fn reset_cursor(&mut self, form: &Form) {
        self.cursor = match self.focus {
            Focus::Field(i) => form
                .fields()
                .get(i)
                .and_then(Field::value)
                .map_or(0, |v| v.chars().count()),
            _ => 0,
        };
    }

    pub fn handle_key(&mut self, key: &KeyEvent, form: &mut Form) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('g') if ctrl => return Action::Submit,
            KeyCode::Char('y') if ctrl => return Action::Copy,
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(form, true);
                return Action::Redraw;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(form, false);
                return Action::Redraw;
            }
            KeyCode::Enter if self.focus == Focus::Copy => return Action::Copy,
            KeyCode::Enter => return Action::Submit,
            _ => {}
        }

        let space = key.code == KeyCode::Char(' ');
        match self.focus {
            Focus::Generate if space => Action::Submit,
            Focus::Copy if space => Action::Copy,
            Focus::Field(i) => {
                let Some(field) = form.field_at_mut(i) else {
                    return Action::None;
                };
                let handled = match &mut field.control {
                    Control::Checkbox { checked } if space => {
                        *checked = !*checked;
                        true
                    }
                    Control::Checkbox { .. } => false,
                    Control::Number { value } => edit(value, &mut self.cursor, key, numeric_char),
                    Control::Text { value } => edit(value, &mut self.cursor, key, any_char),
                };
                if handled { Action::Redraw } else { Action::None }
            }
            _ => Action::None,
        }
    }

    pub fn render(&self, form: &Form, screen: &Screen) -> Vec<String> {
        let mut lines = vec![box_top(TITLE), box_line("")];

        lines.push(box_line(&format!("{UNDERLINE}Password{RESET}")));
        if screen.password.is_empty() {
            lines.push(box_line(""));
        }
        for chunk in wrap(screen.password, INNER_WIDTH - 2) {
            lines.push(box_line(&format!("  {chunk}")));
        }

        let copy_label = match screen.copy_state {
            CopyState::Idle => button("Copy", self.focus == Focus::Copy, screen.can_copy),
            CopyState::Copied => format!(
                "{GREEN}{}{RESET}",
                button("Copied ✓", self.focus == Focus::Copy, true)
            ),
        };
        lines.push(box_line_right(&copy_label));
        lines.push(box_rule());

        for (i, field) in form.fields().iter().enumerate() {
            let focused = self.focus == Focus::Field(i);
            lines.push(box_line(&self.render_field(field, focused)));
        }

        lines.push(box_line(""));
        lines.push(box_line_center(&button(
            "Generate",
            self.focus == Focus::Generate,
            true,
        )));
        lines.push(box_rule());
        lines.push(box_line_center(
            "Tab/↑↓ move · Space toggle · Enter generate",
        ));
        lines.push(box_line_center(
            "Ctrl+Y copy · Ctrl+U clear field · Esc quit",
        ));
        lines.push(box_bottom());

        if let Some(message) = screen.alert {
            lines.push(String::new());
            lines.extend(alert_box(message));
        }

        lines
    }

    fn render_field(&self, field: &Field, focused: bool) -> String {
        match &field.control {
            Control::Checkbox { checked } => {
                let mark = if *checked { 'x' } else { ' ' };
                let text = format!("[{mark}] {}", field.label);
                if focused {
                    format!("{REVERSE}{text}{RESET}")
                } else {
                    text
                }
            }
            Control::Number { value } => {
                let prefix = format!("{} (min {LENGTH_MIN_HINT}): ", field.label);
                let cursor = focused.then_some(self.cursor);
                let width = INNER_WIDTH.saturating_sub(prefix.chars().count());
                format!("{prefix}{}", field_text(value, cursor, width))
            }
            Control::Text { value } => {
                let prefix = format!("{}: ", field.label);
                let cursor = focused.then_some(self.cursor);
                let width = INNER_WIDTH.saturating_sub(prefix.chars().count());
                format!("{prefix}{}", field_text(value, cursor, width))
            }
        }
    }
}

/// Modal shown when the clipboard write fails.
pub fn alert_box(message: &str) -> Vec<String> {
    let mut lines = vec![box_top("Alert")];
    for chunk in wrap(message, INNER_WIDTH) {
        lines.push(box_line(&format!("{RED_BOLD}{chunk}{RESET}")));
    }
    lines.push(box_line(""));
    lines.push(box_line_center("Press any key to continue"));
    lines.push(box_bottom());
    lines
}

const RED_BOLD: &str = "\x1b[1;38;5;9m";

fn button(label: &str, focused: bool, enabled: bool) -> String {
    let text = format!("[ {label} ]");
    match (enabled, focused) {
        (false, true) => format!("{DIM}{REVERSE}{text}{RESET}"),
        (false, false) => format!("{DIM}{text}{RESET}"),
        (true, true) => format!("{REVERSE}{text}{RESET}"),
        (true, false) => text,
    }
}

fn box_line_right(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    box_line(&format!("{}{}", " ".repeat(padding), content))
}

/// Split into lines of at most `width` chars.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Visible slice of a field value, scrolled so the cursor stays in view.
fn field_text(value: &str, cursor: Option<usize>, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let width = width.max(1);

    let Some(cursor) = cursor else {
        return chars.iter().take(width).collect();
    };

    let cursor = cursor.min(chars.len());
    let start = (cursor + 1).saturating_sub(width);
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate().skip(start).take(width) {
        if i == cursor {
            out.push_str(&format!("{REVERSE}{c}{RESET}"));
        } else {
            out.push(*c);
        }
    }
    if cursor == chars.len() {
        out.push_str(&format!("{REVERSE} {RESET}"));
    }
    out
}
