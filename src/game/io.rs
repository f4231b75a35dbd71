//! Interactive I/O collaborator
//!
//! The engine never touches the console directly. It talks to a [`GameIo`]
//! implementation, which makes rounds fully scriptable in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Input ended while awaiting a response")]
    InputExhausted,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Blocking prompt interface consumed by the session engine
pub trait GameIo {
    /// Ask a yes/no question and return the normalized answer
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, IoError>;

    /// Ask a free-text question and return the raw line
    fn ask_text(&mut self, prompt: &str) -> Result<String, IoError>;

    /// Print a line of output
    fn say(&mut self, line: &str) -> Result<(), IoError>;
}

/// Console implementation over any reader/writer pair
///
/// Yes/no answers are trimmed and lowercased; anything other than `y` or `n`
/// re-prompts. Free-text answers are taken verbatim.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl ConsoleIo<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        ConsoleIo {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleIo { input, output }
    }

    fn read_line(&mut self) -> Result<String, IoError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(IoError::InputExhausted);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> GameIo for ConsoleIo<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, IoError> {
        loop {
            write!(self.output, "{prompt} (y/n)? ")?;
            self.output.flush()?;
            match self.read_line()?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String, IoError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn say(&mut self, line: &str) -> Result<(), IoError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

/// Scripted collaborator that replays a fixed answer sequence
///
/// Used by the test suite; also handy for demo transcripts. Prompts and
/// output lines are recorded so tests can assert on the conversation.
pub struct ScriptedIo {
    responses: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedIo {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedIo {
            responses: responses.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn exhausted(&self) -> bool {
        self.responses.is_empty()
    }

    fn next_response(&mut self) -> Result<String, IoError> {
        self.responses.pop_front().ok_or(IoError::InputExhausted)
    }
}

impl GameIo for ScriptedIo {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, IoError> {
        self.transcript.push(format!("{prompt} (y/n)? "));
        loop {
            match self.next_response()?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.transcript.push("Please answer y or n.".to_string()),
            }
        }
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String, IoError> {
        self.transcript.push(prompt.to_string());
        self.next_response()
    }

    fn say(&mut self, line: &str) -> Result<(), IoError> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_yes_no_normalization() {
        let input = io::Cursor::new(b"  Y \n".to_vec());
        let mut io = ConsoleIo::new(input, Vec::new());
        assert!(io.ask_yes_no("Is it alive?").unwrap());
    }

    #[test]
    fn test_console_reprompts_on_invalid() {
        let input = io::Cursor::new(b"maybe\nyes\nn\n".to_vec());
        let mut io = ConsoleIo::new(input, Vec::new());
        assert!(!io.ask_yes_no("Is it alive?").unwrap());
        let output = String::from_utf8(io.output).unwrap();
        assert_eq!(output.matches("Please answer y or n.").count(), 2);
        assert_eq!(output.matches("Is it alive? (y/n)? ").count(), 3);
    }

    #[test]
    fn test_console_end_of_input() {
        let input = io::Cursor::new(Vec::new());
        let mut io = ConsoleIo::new(input, Vec::new());
        assert!(matches!(
            io.ask_yes_no("Is it alive?"),
            Err(IoError::InputExhausted)
        ));
    }

    #[test]
    fn test_text_answer_is_verbatim() {
        let input = io::Cursor::new(b"  My Object \n".to_vec());
        let mut io = ConsoleIo::new(input, Vec::new());
        assert_eq!(io.ask_text("name? ").unwrap(), "  My Object ");
    }

    #[test]
    fn test_scripted_replay() {
        let mut io = ScriptedIo::new(["nope", "N"]);
        assert!(!io.ask_yes_no("Is it alive?").unwrap());
        assert!(io.exhausted());
        assert_eq!(
            io.transcript(),
            ["Is it alive? (y/n)? ", "Please answer y or n."]
        );
    }
}
