//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (wide characters count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// 1234567 → "1.234.567" with `sep = "."`.
pub fn group_thousands(n: u64, sep: &str) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }

    out
}

/// Money for display, e.g. "Rp 160.000". An empty symbol prints the bare
/// number.
pub fn format_currency(n: u64, symbol: &str, sep: &str) -> String {
    let amount = group_thousands(n, sep);
    if symbol.is_empty() {
        amount
    } else {
        format!("{symbol} {amount}")
    }
}
