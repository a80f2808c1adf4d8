//! Form field model.
//!
//! Fields are looked up by id the way a page looks up named form elements,
//! so a lookup can miss and callers decide the fallback.

use crate::settings::Settings;

pub const LENGTH: &str = "length";
pub const UPPERCASE: &str = "uppercase";
pub const LOWERCASE: &str = "lowercase";
pub const NUMBER: &str = "number";
pub const SYMBOL: &str = "symbol";
pub const EXCLUDE: &str = "exclude";

/// Shown next to the length field. Not enforced.
pub const LENGTH_MIN_HINT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Checkbox { checked: bool },
    Number { value: String },
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub control: Control,
}

impl Field {
    pub fn checkbox(id: &'static str, label: &'static str, checked: bool) -> Self {
        Self {
            id,
            label,
            control: Control::Checkbox { checked },
        }
    }

    pub fn number(id: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            label,
            control: Control::Number {
                value: value.into(),
            },
        }
    }

    pub fn text(id: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            label,
            control: Control::Text {
                value: value.into(),
            },
        }
    }

    /// Editable text of a number or text field.
    pub fn value(&self) -> Option<&str> {
        match &self.control {
            Control::Number { value } | Control::Text { value } => Some(value),
            Control::Checkbox { .. } => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut String> {
        match &mut self.control {
            Control::Number { value } | Control::Text { value } => Some(value),
            Control::Checkbox { .. } => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self.control {
            Control::Checkbox { checked } => Some(checked),
            _ => None,
        }
    }

    /// Flip a checkbox. Returns false for other controls.
    pub fn toggle(&mut self) -> bool {
        match &mut self.control {
            Control::Checkbox { checked } => {
                *checked = !*checked;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The password generator form, pre-filled from settings.
    pub fn password_generator(settings: &Settings) -> Self {
        Self::new(vec![
            Field::number(LENGTH, "Password Length", settings.length.to_string()),
            Field::checkbox(UPPERCASE, "Include Uppercases", settings.include_uppercase),
            Field::checkbox(LOWERCASE, "Include Lowercases", settings.include_lowercase),
            Field::checkbox(NUMBER, "Include Numbers", settings.include_number),
            Field::checkbox(SYMBOL, "Include Symbols", settings.include_symbol),
            Field::text(EXCLUDE, "Exclude Characters", settings.exclude_characters.clone()),
        ])
    }

    pub fn named_item(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn named_item_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Detach a field, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let form = Form::password_generator(&Settings::default());
        let ids: Vec<_> = form.fields().iter().map(|f| f.id).collect();
        assert_eq!(ids, [LENGTH, UPPERCASE, LOWERCASE, NUMBER, SYMBOL, EXCLUDE]);
        assert_eq!(form.named_item(LENGTH).and_then(Field::value), Some("12"));
        assert_eq!(form.named_item(SYMBOL).and_then(Field::checked), Some(true));
        assert_eq!(form.named_item(EXCLUDE).and_then(Field::value), Some(""));
    }

    #[test]
    fn toggle_only_flips_checkboxes() {
        let mut form = Form::password_generator(&Settings::default());
        assert!(form.named_item_mut(NUMBER).is_some_and(Field::toggle));
        assert_eq!(form.named_item(NUMBER).and_then(Field::checked), Some(false));
        assert!(!form.named_item_mut(EXCLUDE).is_some_and(Field::toggle));
    }

    #[test]
    fn removed_field_is_not_found() {
        let mut form = Form::password_generator(&Settings::default());
        assert!(form.remove(UPPERCASE).is_some());
        assert!(form.named_item(UPPERCASE).is_none());
        assert!(form.remove(UPPERCASE).is_none());
        assert_eq!(form.len(), 5);
    }
}
