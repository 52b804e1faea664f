//! Overwrite confirmation prompt
//!
//! A small state machine over an injected line reader, so the prompt can be
//! tested deterministically without a real terminal. The handler wires it to
//! stdin/stdout; tests drive it with an in-memory cursor.

use std::io::{self, BufRead, Write};

/// Outcome of the overwrite confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// User confirmed the overwrite
    Confirmed,
    /// User declined, or the input ended before a valid answer
    Declined,
}

/// Asks whether an existing `CMakeLists.txt` may be overwritten.
///
/// Accepts case-insensitive `yes`/`no`/`y`/`n` and re-prompts on anything
/// else. End of input counts as a decline: with nobody left to answer, the
/// safe choice is to keep the existing file.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> io::Result<Decision> {
    loop {
        writeln!(writer, "CMakeLists.txt already exists")?;
        write!(writer, "Are you sure you want to override <(y)es|(n)o>: ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Decision::Declined);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Decision::Confirmed),
            "n" | "no" => return Ok(Decision::Declined),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use yare::parameterized;

    fn decide(input: &str) -> Decision {
        let mut output = Vec::new();
        confirm_overwrite(Cursor::new(input), &mut output).unwrap()
    }

    #[parameterized(
        yes = { "yes\n" },
        y = { "y\n" },
        uppercase = { "YES\n" },
        mixed_case = { "Yes\n" },
        padded = { "  y  \n" },
    )]
    fn test_affirmative_answers(input: &str) {
        assert_eq!(decide(input), Decision::Confirmed);
    }

    #[parameterized(
        no = { "no\n" },
        n = { "n\n" },
        uppercase = { "NO\n" },
        eof = { "" },
    )]
    fn test_negative_answers(input: &str) {
        assert_eq!(decide(input), Decision::Declined);
    }

    #[test]
    fn test_reprompts_until_valid_answer() {
        let mut output = Vec::new();
        let decision =
            confirm_overwrite(Cursor::new("maybe\nok then\nno\n"), &mut output).unwrap();
        assert_eq!(decision, Decision::Declined);

        // One prompt per attempt: two invalid lines plus the final answer.
        let prompted = String::from_utf8(output).unwrap();
        assert_eq!(prompted.matches("CMakeLists.txt already exists").count(), 3);
    }

    #[test]
    fn test_invalid_then_eof_declines() {
        let mut output = Vec::new();
        let decision = confirm_overwrite(Cursor::new("whatever\n"), &mut output).unwrap();
        assert_eq!(decision, Decision::Declined);
    }

    #[test]
    fn test_prompt_text() {
        let mut output = Vec::new();
        confirm_overwrite(Cursor::new("y\n"), &mut output).unwrap();
        let prompted = String::from_utf8(output).unwrap();
        assert!(prompted.contains("CMakeLists.txt already exists"));
        assert!(prompted.contains("Are you sure you want to override <(y)es|(n)o>: "));
    }
}
