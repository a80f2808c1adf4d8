//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Box functions return the line so a screen
//! can be composed first and written in one go.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Write composed lines from the top of the screen. Uses `\r\n` so the
/// output lines up in raw mode.
pub fn draw_screen(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(b"\x1b[H\x1b[2J");
    for line in lines {
        let _ = out.write_all(line.as_bytes());
        let _ = out.write_all(b"\r\n");
    }
    let _ = out.flush();
}

/// Print lines in cooked mode.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                            │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// ├───────────────────────────────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let mut out = Vec::with_capacity(lines.len().max(1));
    let first = lines.first().map(String::as_str).unwrap_or("");
    out.push(box_line(&format!("{flag:<flag_col$}{first}")));
    for line in lines.iter().skip(1) {
        out.push(box_line(&format!("{}{}", " ".repeat(flag_col), line)));
    }
    out
}

/// Display width of `s`, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
