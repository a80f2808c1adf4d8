//! Password building: character pool assembly and random selection.

pub mod charset;
mod generate;

pub use charset::CharacterPool;
pub use generate::{
    BuildOutcome, DEFAULT_LENGTH, GeneratedPassword, GenerationRequest, MAX_LENGTH, build,
    display_text, generate,
};
