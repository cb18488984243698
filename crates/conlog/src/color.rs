//! ANSI color codes and string decoration.

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const GRAY: &str = "\x1b[37m";
pub const WHITE: &str = "\x1b[97m";

/// Wraps `text` as `<color><text><reset>`.
pub fn with_color(color: &str, text: &str) -> String {
    let mut out = String::with_capacity(color.len() + text.len() + RESET.len());
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Removes ANSI CSI escape sequences (`ESC [ ... final`) from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes run until a final byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
