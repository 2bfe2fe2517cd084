/**
 * Helper functions for input and output.
 *
 * Input is read through the `MyReadline` trait so that the quiz can be driven by a
 * line editor, by piped standard input, or by a scripted source in tests.
 */
use std::io;
use std::io::BufRead;

use colored::*;
use rustyline::error::ReadlineError;

use super::common::{QuizError, Result};


#[macro_export]
macro_rules! my_writeln {
    ($dst:expr, $($arg:tt)*) => (
        writeln!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}


#[macro_export]
macro_rules! my_write {
    ($dst:expr, $($arg:tt)*) => (
        write!($dst, $($arg)*).map_err($crate::common::QuizError::Io)
    );
}


/// A source of answers. Each call returns one line of input without its line
/// terminator.
///
/// Implementations return `QuizError::ReadlineEof` once the input is exhausted and
/// `QuizError::ReadlineInterrupted` if the user pressed Ctrl+C.
pub trait MyReadline {
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Whether `read_line` displays `prompt` itself. If not, the caller writes it.
    fn shows_prompt(&self) -> bool {
        false
    }
}


impl<H: rustyline::Helper> MyReadline for rustyline::Editor<H> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.readline(&format!("{}", prompt.white())) {
            Ok(s) => Ok(s),
            Err(ReadlineError::Interrupted) => Err(QuizError::ReadlineInterrupted),
            Err(ReadlineError::Eof) => Err(QuizError::ReadlineEof),
            _ => Err(QuizError::ReadlineOther),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}


/// Reads answers line by line from a non-interactive source such as a pipe. The
/// prompt is left to the caller.
pub struct PipedReader<B> {
    input: B,
}


impl<B: BufRead> PipedReader<B> {
    pub fn new(input: B) -> Self {
        PipedReader { input }
    }
}


impl<B: BufRead> MyReadline for PipedReader<B> {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(QuizError::Io)? == 0 {
            return Err(QuizError::ReadlineEof);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}


/// Print `message` to `writer`, breaking lines according to the current width of the
/// terminal. If `prefix` is not `None`, then prepend it to the first line and indent
/// all subsequent lines by its length.
pub fn prettyprint<W: io::Write>(
    writer: &mut W, message: &str, prefix: Option<&str>
) -> Result<()> {
    prettyprint_colored(writer, message, prefix, None, None)
}


pub fn prettyprint_colored<W: io::Write>(
    writer: &mut W, message: &str, prefix: Option<&str>, message_color: Option<Color>,
    prefix_color: Option<Color>
) -> Result<()> {
    let prefix = prefix.unwrap_or("");
    let width = textwrap::termwidth().saturating_sub(prefix.len()).max(1);
    let mut lines = textwrap::wrap_iter(message, width);

    if let Some(first_line) = lines.next() {
        let colored_prefix = color_optional(&prefix, prefix_color);
        let colored_line = color_optional(&first_line, message_color);
        my_writeln!(writer, "{}{}", colored_prefix, colored_line)?;
    }

    let indent = " ".repeat(prefix.len());
    for line in lines {
        let colored_line = color_optional(&line, message_color);
        my_writeln!(writer, "{}{}", indent, colored_line)?;
    }
    Ok(())
}


fn color_optional(text: &str, color: Option<Color>) -> ColoredString {
    if let Some(color) = color {
        text.color(color)
    } else {
        text.normal()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_reader_strips_line_endings() {
        let mut reader = PipedReader::new("  b \r\n3\n".as_bytes());
        assert_eq!(reader.read_line("").unwrap(), "  b ");
        assert_eq!(reader.read_line("").unwrap(), "3");
        assert!(!reader.shows_prompt());
    }

    #[test]
    fn piped_reader_reports_end_of_input() {
        let mut reader = PipedReader::new("a\n".as_bytes());
        assert_eq!(reader.read_line("").unwrap(), "a");
        match reader.read_line("") {
            Err(QuizError::ReadlineEof) => {},
            other => panic!("expected end of input, got {:?}", other),
        }
    }

    #[test]
    fn prettyprint_indents_continuation_lines() {
        colored::control::set_override(false);
        let message = "word ".repeat(60);
        let mut out = Vec::new();
        prettyprint(&mut out, message.trim(), Some("  A. ")).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("  A. word"));
        for line in &lines[1..] {
            assert!(line.starts_with("     word"));
        }
    }
}
