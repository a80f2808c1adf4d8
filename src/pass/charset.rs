//! Character pool assembly for password generation.

use std::collections::HashSet;

use super::GenerationRequest;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]\\:;?><,./-=";

/// Characters a password may be drawn from, in class order
/// (uppercase, lowercase, digit, symbol) minus the exclusion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build the pool for a request. Exclusions are a literal character set.
    pub fn build(request: &GenerationRequest) -> Self {
        let excluded: HashSet<char> = request.exclude_characters.chars().collect();

        let classes = [
            (request.include_uppercase, UPPERCASE),
            (request.include_lowercase, LOWERCASE),
            (request.include_number, DIGITS),
            (request.include_symbol, SYMBOLS),
        ];

        let chars = classes
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .flat_map(|(_, class)| class.chars())
            .filter(|c| !excluded.contains(c))
            .collect();

        Self { chars }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
