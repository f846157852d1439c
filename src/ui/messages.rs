//! User-facing notifications: a coloured icon followed by the message.
//! Errors go to stderr, everything else to stdout.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Colour::Blue.bold(),
            Level::Success => Colour::Green.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{} {}", self.style().paint(self.icon()), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}

/// Section header printed above tables
pub fn header<T: fmt::Display>(msg: T) {
    let title = format!("====================== {msg}");
    println!("{}\n", Colour::Blue.bold().paint(title));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_follows_the_icon() {
        let line = Level::Warning.line("disk almost full");
        assert!(line.contains("⚠️"));
        assert!(line.ends_with(" disk almost full"));
    }
}
