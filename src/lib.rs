//! Random password generator: a password builder plus an interactive
//! terminal form that drives it.

pub mod cli;
pub mod error;
pub mod exits;
pub mod form;
pub mod logger;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::BuildError;
pub use pass::{GenerationRequest, build, generate};
pub use settings::Settings;
