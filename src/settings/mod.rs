//! Runtime settings: initial form values, copy indicator timing, logging.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::pass::{DEFAULT_LENGTH, GenerationRequest};

/// How long the copy button shows its confirmation.
pub const COPY_RESET_DELAY: Duration = Duration::from_secs(3);

#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone)]
pub struct Settings {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_number: bool,
    pub include_symbol: bool,
    pub exclude_characters: String,
    pub copy_reset: Duration,
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
    pub log_level: LevelFilter,
    pub quiet: bool,
}

impl Settings {
    /// The request the initial form values describe.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_number: self.include_number,
            include_symbol: self.include_symbol,
            length: self.length,
            exclude_characters: self.exclude_characters.clone(),
        }
    }

    /// Random source for generation: seeded when a seed was given,
    /// otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_number: true,
            include_symbol: true,
            exclude_characters: String::new(),
            copy_reset: COPY_RESET_DELAY,
            seed: None,
            log_dir: default_log_dir(),
            log_level: DEFAULT_LOG_LEVEL,
            quiet: false,
        }
    }
}

#[inline]
fn default_log_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".cache").join("passform"),
        None => PathBuf::from("."),
    }
}
