//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use thiserror::Error;

/// Why a prompt did not produce a value
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input reached end-of-file
    #[error("input closed")]
    Closed,

    /// A numeric field did not parse
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prompt and read one line, without its line terminator.
    ///
    /// Other whitespace is kept, so a line of spaces is not an empty field.
    /// Bytes that are not UTF-8 become U+FFFD.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PromptError::Closed);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompt for a whole number; surrounding whitespace is ignored
    pub fn ask_number(&mut self, prompt: &str) -> Result<i64, PromptError> {
        let answer = self.ask(prompt)?;
        let answer = answer.trim();
        answer
            .parse()
            .map_err(|_| PromptError::InvalidNumber(answer.to_string()))
    }

    /// Prompt for a Y/N answer; only `Y` or `y` counts as yes
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Give back the writer (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: impl AsRef<[u8]>) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_ref().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_terminator_only() {
        let mut p = prompter("  1 Main St \r\n");
        assert_eq!(p.ask("Address: ").unwrap(), "  1 Main St ");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Address: ");
    }

    #[test]
    fn test_ask_replaces_invalid_utf8() {
        let mut p = prompter(b"1 Main \xff St\nIL\n");
        assert_eq!(p.ask("Address: ").unwrap(), "1 Main \u{FFFD} St");
        assert_eq!(p.ask("State: ").unwrap(), "IL");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut p = prompter("Colonial");
        assert_eq!(p.ask("Model: ").unwrap(), "Colonial");
        assert!(matches!(p.ask("Model: "), Err(PromptError::Closed)));
    }

    #[test]
    fn test_ask_at_eof_is_closed() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Anything: "), Err(PromptError::Closed)));
    }

    #[test]
    fn test_ask_number() {
        let mut p = prompter(" 62704 \nabc\n");
        assert_eq!(p.ask_number("ZIP: ").unwrap(), 62704);

        let err = p.ask_number("ZIP: ").unwrap_err();
        assert_eq!(err.to_string(), "invalid number 'abc'");
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("y\nY\nyes\nN\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }
}
