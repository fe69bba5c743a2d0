//! Input/output abstractions
//!
//! Provides traits for input and output operations so a session can be
//! driven from the terminal or from a script in tests.

use std::collections::VecDeque;
use std::io::{self, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
    /// Write a diagnostic line to the error stream
    fn error(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout/stderr
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Input reader that replays a fixed list of lines
pub struct ScriptedInput {
    responses: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: responses.into_iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts seen so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        self.prompts.push(prompt.to_string());
        self.responses
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "No more scripted responses"))
    }
}

/// Output writer that keeps everything in memory
#[derive(Default)]
pub struct BufferedOutput {
    pub messages: Vec<String>,
    pub errors: Vec<String>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All regular output joined into one string
    pub fn text(&self) -> String {
        self.messages.concat()
    }
}

impl OutputWriter for BufferedOutput {
    fn write(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn writeln(&mut self, message: &str) {
        self.messages.push(format!("{}\n", message));
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
