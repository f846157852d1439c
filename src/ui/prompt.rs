use super::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user. Anything but "y"/"yes" is a no.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        is_yes(&s)
    } else {
        false
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
