//! Warnings, errors and prompts for one-shot output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Prompts are skipped when quiet or when nobody can answer.
fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow, to stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, to stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print the password instead. Non-interactive and quiet
/// runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }

    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
