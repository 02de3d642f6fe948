//! Line-oriented input collection.
//!
//! `Prompter` turns raw lines into typed values. Malformed numbers are
//! reported and asked for again, so callers only ever see well-typed input.
//! End of input surfaces as [`UnidbError::InputClosed`].

use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use unidb::error::{Result, UnidbError};

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `label` and reads one line, without its line terminator.
    ///
    /// The answer is returned as typed otherwise. Bytes that are not UTF-8
    /// become U+FFFD, so a garbled line is just another malformed answer.
    pub fn line(&mut self, label: &str) -> Result<String> {
        self.write(label)?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(UnidbError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Asks until the answer parses as `T`.
    pub fn number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        loop {
            let answer = self.line(label)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let warning = format!("{}\n", INVALID_NUMBER.red());
                    self.write(&warning)?;
                }
            }
        }
    }

    /// A y/n question; anything but an answer starting with y or Y is a no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.line(&format!("{} ", question.yellow()))?;
        Ok(matches!(answer.trim().chars().next(), Some('y' | 'Y')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reprompts_until_number() {
        let mut p = prompter("abc\n\n42\n");
        let n: i32 = p.number("ID: ").unwrap();
        assert_eq!(n, 42);

        let output = String::from_utf8(p.output).unwrap();
        assert_eq!(output.matches("ID: ").count(), 3);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
    }

    #[test]
    fn parses_floats_and_trims() {
        let mut p = prompter("  3.75 \r\n");
        let gpa: f64 = p.number("GPA: ").unwrap();
        assert!((gpa - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn free_text_is_kept_as_typed() {
        let mut p = prompter("  Computer Science \r\n");
        assert_eq!(p.line("Major: ").unwrap(), "  Computer Science ");
    }

    #[test]
    fn invalid_utf8_is_reprompted() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new());
        let n: i32 = p.number("ID: ").unwrap();
        assert_eq!(n, 7);

        let output = String::from_utf8(p.output).unwrap();
        assert_eq!(output.matches(INVALID_NUMBER).count(), 1);
    }

    #[test]
    fn invalid_utf8_text_is_replaced() {
        let mut p = Prompter::new(Cursor::new(b"Caf\xe9\n".to_vec()), Vec::new());
        assert_eq!(p.line("Name: ").unwrap(), "Caf\u{fffd}");
    }

    #[test]
    fn confirm_accepts_only_yes() {
        let mut p = prompter("y\nYes\nn\n\nmaybe\n");
        assert!(p.confirm("?").unwrap());
        assert!(p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
    }

    #[test]
    fn eof_is_input_closed() {
        let mut p = prompter("not a number\n");
        let err = p.number::<i32>("ID: ").unwrap_err();
        assert!(matches!(err, UnidbError::InputClosed));
    }
}
