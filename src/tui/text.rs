use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top, print_lines};

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passform"),
        box_line_center("Random password generator"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Form: Run without flags (or with initial values only) to"),
        box_line("     open the interactive password form."),
        box_line("  2) One-shot: Pass -p or -b to print or copy a single"),
        box_line("     password without the form."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passform [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
    ];
    lines.extend(box_opt("  -l, --length <N>", "Characters per password (default: 12)"));
    lines.extend(box_opt("      --no-upper", "Leave out uppercase letters"));
    lines.extend(box_opt("      --no-lower", "Leave out lowercase letters"));
    lines.extend(box_opt("      --no-number", "Leave out digits"));
    lines.extend(box_opt("      --no-symbol", "Leave out symbols"));
    lines.extend(box_opt(
        "  -x, --exclude <CHARS>",
        "Characters never used, taken literally",
    ));
    lines.extend(box_opt(
        "      --seed <N>",
        "Seed the random source for reproducible output",
    ));
    lines.push(box_line(""));
    lines.push(box_line(" Output:"));
    lines.extend(box_opt("  -p, --print", "Print one password and exit"));
    lines.extend(box_opt("  -b, --board", "Copy one password to the clipboard"));
    lines.extend(box_opt("  -q, --quiet", "Suppress everything but the password"));
    lines.push(box_line(""));
    lines.push(box_line(" Logging:"));
    lines.extend(box_opt(
        "      --log-dir <DIR>",
        "Log file directory (default: ~/.cache/passform)",
    ));
    lines.extend(box_opt("      --verbose", "Debug-level logging"));
    lines.push(box_line(""));
    lines.push(box_line(" Info:"));
    lines.extend(box_opt("  -h, --help", "Display this help message"));
    lines.extend(box_opt("  -v, --version", "Display version"));
    lines.extend([
        box_line(""),
        box_line("FORM KEYS:"),
        box_line("  Tab/Shift+Tab, ↑/↓   move between fields"),
        box_line("  Space                toggle a checkbox"),
        box_line("  Enter, Ctrl+G        generate (copy when on Copy)"),
        box_line("  Ctrl+Y               copy the password"),
        box_line("  Ctrl+U               clear the current field"),
        box_line("  Esc, Ctrl+C          quit"),
        box_line(""),
        box_line("EXAMPLES:"),
        box_line("  passform                  Open the form"),
        box_line("  passform -l 20 -p         One password, 20 characters"),
        box_line("  passform --no-symbol -b   Alphanumeric, to clipboard"),
        box_line("  passform -x 'O0Il1' -p    Skip look-alike characters"),
        box_line(""),
        box_bottom(),
    ]);
    lines
}

pub fn print_help() {
    print_lines(&help_lines());
    println!();
}
