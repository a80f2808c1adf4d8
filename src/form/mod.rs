//! The password form: field model, request reading, clipboard and the
//! controller tying them to the password builder.

pub mod clipboard;
mod controller;
pub mod fields;
pub mod read;
mod timer;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use controller::{COPY_FAILED_ALERT, CopyOutcome, CopyState, FormController};
pub use fields::{Control, Field, Form};
pub use timer::ResetTimer;
