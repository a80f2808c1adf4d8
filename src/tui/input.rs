//! Single-line text editing for form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Byte offset of the `cursor`-th char, or the end of the string.
fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Characters a number field accepts while typing. Whether the result is a
/// usable length is decided when the form is read.
pub fn numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

pub fn any_char(_: char) -> bool {
    true
}

/// Apply an editing key to `value`. `cursor` is a char position in
/// `0..=len`. Returns true when the key was consumed.
pub fn edit(
    value: &mut String,
    cursor: &mut usize,
    key: &KeyEvent,
    accept: fn(char) -> bool,
) -> bool {
    let len = value.chars().count();
    *cursor = (*cursor).min(len);

    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            value.clear();
            *cursor = 0;
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char(c) => {
            if !accept(c) {
                return true;
            }
            value.insert(byte_index(value, *cursor), c);
            *cursor += 1;
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                value.remove(byte_index(value, *cursor));
            }
        }
        KeyCode::Delete => {
            if *cursor < len {
                value.remove(byte_index(value, *cursor));
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(len),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = len,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_all(value: &mut String, cursor: &mut usize, text: &str) {
        for c in text.chars() {
            edit(value, cursor, &key(KeyCode::Char(c)), any_char);
        }
    }

    #[test]
    fn insert_and_move() {
        let (mut value, mut cursor) = (String::new(), 0);
        type_all(&mut value, &mut cursor, "ace");
        edit(&mut value, &mut cursor, &key(KeyCode::Left), any_char);
        type_all(&mut value, &mut cursor, "d");
        edit(&mut value, &mut cursor, &key(KeyCode::Home), any_char);
        edit(&mut value, &mut cursor, &key(KeyCode::Right), any_char);
        type_all(&mut value, &mut cursor, "b");
        assert_eq!(value, "abcde");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_and_delete() {
        let (mut value, mut cursor) = ("abc".to_string(), 3);
        edit(&mut value, &mut cursor, &key(KeyCode::Backspace), any_char);
        assert_eq!((value.as_str(), cursor), ("ab", 2));

        edit(&mut value, &mut cursor, &key(KeyCode::Home), any_char);
        edit(&mut value, &mut cursor, &key(KeyCode::Delete), any_char);
        assert_eq!((value.as_str(), cursor), ("b", 0));

        edit(&mut value, &mut cursor, &key(KeyCode::Backspace), any_char);
        assert_eq!((value.as_str(), cursor), ("b", 0));
    }

    #[test]
    fn multibyte_chars_edit_cleanly() {
        let (mut value, mut cursor) = (String::new(), 0);
        type_all(&mut value, &mut cursor, "é€x");
        edit(&mut value, &mut cursor, &key(KeyCode::Left), any_char);
        edit(&mut value, &mut cursor, &key(KeyCode::Backspace), any_char);
        assert_eq!(value, "éx");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn ctrl_u_clears() {
        let (mut value, mut cursor) = ("secret".to_string(), 6);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(edit(&mut value, &mut cursor, &ctrl_u, any_char));
        assert_eq!((value.as_str(), cursor), ("", 0));
    }

    #[test]
    fn other_control_chords_pass_through() {
        let (mut value, mut cursor) = ("ab".to_string(), 2);
        let ctrl_g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert!(!edit(&mut value, &mut cursor, &ctrl_g, any_char));
        assert_eq!(value, "ab");
    }

    #[test]
    fn numeric_filter_drops_letters() {
        let (mut value, mut cursor) = (String::new(), 0);
        for c in "1x6.0".chars() {
            edit(&mut value, &mut cursor, &key(KeyCode::Char(c)), numeric_char);
        }
        assert_eq!(value, "16.0");
    }

    #[test]
    fn stale_cursor_is_clamped() {
        let (mut value, mut cursor) = ("ab".to_string(), 10);
        edit(&mut value, &mut cursor, &key(KeyCode::Char('c')), any_char);
        assert_eq!(value, "abc");
        assert_eq!(cursor, 3);
    }
}
