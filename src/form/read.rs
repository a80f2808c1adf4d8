//! Reading form fields into a generation request.

use log::{debug, error};

use super::fields::{self, Form};
use crate::pass::{DEFAULT_LENGTH, GenerationRequest};

/// Checked state of a checkbox. A missing field reads as unchecked.
pub fn read_checkbox(form: &Form, id: &str) -> bool {
    match form.named_item(id).and_then(|f| f.checked()) {
        Some(checked) => {
            debug!("{id} from form: {checked}");
            checked
        }
        None => {
            error!("Could not find {id} input element.");
            false
        }
    }
}

/// Password length from the length field, or the default when the field is
/// missing or its value is not a positive integer.
pub fn read_length(form: &Form) -> usize {
    match form.named_item(fields::LENGTH).and_then(|f| f.value()) {
        Some(raw) => coerce_length(raw),
        None => {
            error!("Could not find {} input element.", fields::LENGTH);
            DEFAULT_LENGTH
        }
    }
}

/// Exclusion list from the exclude field, empty when the field is missing.
pub fn read_exclude(form: &Form) -> String {
    match form.named_item(fields::EXCLUDE).and_then(|f| f.value()) {
        Some(value) => value.to_string(),
        None => {
            error!("Could not find {} input element.", fields::EXCLUDE);
            String::new()
        }
    }
}

/// Numeric coercion for the length field. Accepts any numeric literal that
/// is a whole number >= 1 (`"16"`, `" 16 "`, `"16.0"`, `"1e2"`).
pub fn coerce_length(raw: &str) -> usize {
    let Ok(n) = raw.trim().parse::<f64>() else {
        return DEFAULT_LENGTH;
    };

    if !n.is_finite() || n < 1.0 || n.fract() != 0.0 || n > usize::MAX as f64 {
        return DEFAULT_LENGTH;
    }

    n as usize
}

/// Snapshot the whole form as a request.
pub fn read_request(form: &Form) -> GenerationRequest {
    GenerationRequest {
        include_uppercase: read_checkbox(form, fields::UPPERCASE),
        include_lowercase: read_checkbox(form, fields::LOWERCASE),
        include_number: read_checkbox(form, fields::NUMBER),
        include_symbol: read_checkbox(form, fields::SYMBOL),
        length: read_length(form),
        exclude_characters: read_exclude(form),
    }
}
