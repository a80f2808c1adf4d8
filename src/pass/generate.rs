//! Password generation.

use rand::Rng;
use zeroize::Zeroizing;

use super::charset::CharacterPool;
use crate::error::BuildError;

pub const DEFAULT_LENGTH: usize = 12;

/// Longest password the builder will allocate.
pub const MAX_LENGTH: usize = 65_536;

/// Inputs for a single password build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_number: bool,
    pub include_symbol: bool,
    pub length: usize,
    pub exclude_characters: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_lowercase: true,
            include_number: true,
            include_symbol: true,
            length: DEFAULT_LENGTH,
            exclude_characters: String::new(),
        }
    }
}

/// Password text, wiped from memory on drop.
pub type GeneratedPassword = Zeroizing<String>;

/// Result of a build as the form sees it.
pub type BuildOutcome = Result<GeneratedPassword, BuildError>;

/// Text the form displays for a build outcome: the password, or the error
/// message in its place.
pub fn display_text(outcome: &BuildOutcome) -> Zeroizing<String> {
    match outcome {
        Ok(password) => password.clone(),
        Err(e) => Zeroizing::new(e.to_string()),
    }
}

/// Build a password drawing from `rng`.
///
/// Each position is an independent uniform pick from the pool, with
/// replacement. The pool is rebuilt on every call.
pub fn build<R: Rng>(request: &GenerationRequest, rng: &mut R) -> BuildOutcome {
    if request.length < 1 {
        return Err(BuildError::InvalidLength);
    }
    if request.length > MAX_LENGTH {
        return Err(BuildError::TooLong);
    }

    let pool = CharacterPool::build(request);
    if pool.is_empty() {
        return Err(BuildError::EmptyPool);
    }

    let chars = pool.as_slice();
    let mut password = Zeroizing::new(String::with_capacity(request.length));
    for _ in 0..request.length {
        password.push(chars[rng.gen_range(0..chars.len())]);
    }

    Ok(password)
}

/// Build a password using the thread-local RNG.
pub fn generate(request: &GenerationRequest) -> BuildOutcome {
    build(request, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn no_classes_reports_empty_pool() {
        let request = GenerationRequest {
            include_uppercase: false,
            include_lowercase: false,
            include_number: false,
            include_symbol: false,
            ..Default::default()
        };
        let outcome = generate(&request);
        assert_eq!(outcome, Err(BuildError::EmptyPool));
        assert_eq!(
            display_text(&outcome).as_str(),
            "No characters available after exclusion. Please check your exclusion list or include more character types."
        );
    }

    #[test]
    fn zero_length_reports_invalid_length() {
        let request = GenerationRequest {
            include_lowercase: false,
            include_number: false,
            include_symbol: false,
            length: 0,
            ..Default::default()
        };
        let outcome = generate(&request);
        assert_eq!(outcome, Err(BuildError::InvalidLength));
        assert_eq!(
            display_text(&outcome).as_str(),
            "Password length must be a number greater than 0."
        );
    }

    #[test]
    fn length_checked_before_pool() {
        let request = GenerationRequest {
            include_uppercase: false,
            include_lowercase: false,
            include_number: false,
            include_symbol: false,
            length: 0,
            ..Default::default()
        };
        assert_eq!(generate(&request), Err(BuildError::InvalidLength));
    }

    #[test]
    fn oversized_length_is_rejected_without_allocating() {
        let request = GenerationRequest {
            length: usize::MAX,
            ..Default::default()
        };
        let outcome = build(&request, &mut StdRng::seed_from_u64(1));
        assert_eq!(outcome, Err(BuildError::TooLong));
        assert_eq!(
            display_text(&outcome).as_str(),
            "Password length must be at most 65536."
        );

        let request = GenerationRequest {
            length: MAX_LENGTH + 1,
            ..Default::default()
        };
        assert_eq!(generate(&request), Err(BuildError::TooLong));
    }

    #[test]
    fn max_length_is_accepted() {
        let request = GenerationRequest {
            length: MAX_LENGTH,
            ..Default::default()
        };
        assert_eq!(generate(&request).unwrap().chars().count(), MAX_LENGTH);
    }

    #[test]
    fn default_request_yields_twelve_chars() {
        let password = generate(&GenerationRequest::default()).unwrap();
        assert_eq!(password.chars().count(), DEFAULT_LENGTH);
    }

    #[test]
    fn same_seed_same_password() {
        let request = GenerationRequest {
            length: 32,
            ..Default::default()
        };
        let a = build(&request, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = build(&request, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_text_passes_password_through() {
        let outcome: BuildOutcome = Ok(Zeroizing::new("abc".to_string()));
        assert_eq!(display_text(&outcome).as_str(), "abc");
    }

    #[test]
    fn single_char_pool_repeats() {
        let request = GenerationRequest {
            include_lowercase: false,
            include_number: false,
            include_symbol: false,
            length: 5,
            exclude_characters: "ABCDEFGHIJKLMNOPQRSTUVWXY".to_string(),
            ..Default::default()
        };
        assert_eq!(generate(&request).unwrap().as_str(), "ZZZZZ");
    }
}
