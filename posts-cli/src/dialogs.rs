use posts_client::Dialogs;
use std::io::{self, BufRead, Write};

/// Prompts on stdin/stderr.
pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }
}
