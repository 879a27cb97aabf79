//! Terminal implementation of the storefront's confirm/acknowledge prompts.

use std::io::{self, BufRead, Write};

use cake_shop_storefront::prompt::Prompt;

/// Asks on stdout and reads the answer from stdin.
///
/// With `assume_yes` every confirmation is granted without asking.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stdout = io::stdout().lock();
        let mut stdin = io::stdin().lock();
        ask(&mut stdin, &mut stdout, message).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read answer, treating as no");
            false
        })
    }

    fn acknowledge(&mut self, message: &str) {
        if let Err(e) = writeln!(io::stdout(), "{message}") {
            tracing::warn!(error = %e, "Could not show message");
        }
    }
}

/// Write `message` with a `[y/N]` suffix and read one line. Only `y` or
/// `yes` (any case) counts as consent; end of input is a no.
fn ask(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> io::Result<bool> {
    write!(out, "{message} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn answer(input: &str) -> bool {
        let mut out = Vec::new();
        ask(&mut Cursor::new(input), &mut out, "Delete?").unwrap()
    }

    #[test]
    fn test_ask_accepts_yes() {
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
        assert!(answer("  yes  \n"));
    }

    #[test]
    fn test_ask_defaults_to_no() {
        assert!(!answer("\n"));
        assert!(!answer("n\n"));
        assert!(!answer("sure\n"));
        assert!(!answer(""));
    }

    #[test]
    fn test_ask_writes_question() {
        let mut out = Vec::new();
        ask(&mut Cursor::new("n\n"), &mut out, "Delete?").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Delete? [y/N] ");
    }

    #[test]
    fn test_assume_yes_never_reads() {
        let mut prompt = TerminalPrompt::new(true);
        assert!(prompt.confirm("Delete?"));
    }
}
