//! # Input Reader
//!
//! Turns one line of terminal text into a [`Command`].
//!
//! The same number means different things depending on which prompt asked for it:
//!
//! | typed | main prompt        | ID / score prompt        |
//! |-------|--------------------|--------------------------|
//! | `-2`  | `Exit` (quit)      | `Continue` (re-prompt)   |
//! | `-1`  | `Abort` (append)   | `Exit` (leave dialog)    |
//! | `0`   | `List`             | `List`                   |
//! | `n>0` | `Position(n)`      | `Position(n)`            |
//!
//! Inside a dialog, `-1` backs out to the main menu and a stray `-2` cannot quit
//! the whole program. End of input is `Exit` everywhere.

use colored::Colorize;
use std::io::{self, BufRead, Write};

const EXIT_CODE: i32 = -2;
const ABORT_CODE: i32 = -1;
const CONTINUE_CODE: i32 = -3;
const LIST_CODE: i32 = 0;

/// Which prompt a line of input answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Main,
    Id,
    Score,
}

/// A normalized command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the program, or leave the current dialog
    Exit,
    /// At the main prompt: append a record
    Abort,
    /// Nothing to do; prompt again
    Continue,
    /// List all records
    List,
    /// Modify the record at this 1-based position
    Position(u32),
}

impl Command {
    /// Interprets a parsed integer typed at `prompt`.
    pub fn from_code(code: i32, prompt: Prompt) -> Self {
        let code = match (prompt, code) {
            (Prompt::Main, code) => code,
            (_, ABORT_CODE) => EXIT_CODE,
            (_, EXIT_CODE) => CONTINUE_CODE,
            (_, code) => code,
        };

        match code {
            EXIT_CODE => Command::Exit,
            ABORT_CODE => Command::Abort,
            LIST_CODE => Command::List,
            n if n > 0 => Command::Position(n as u32),
            _ => Command::Continue,
        }
    }
}

/// One answered prompt: the first word typed and what it means as a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub token: String,
    pub command: Command,
}

impl Entry {
    fn new(token: impl Into<String>, command: Command) -> Self {
        Self {
            token: token.into(),
            command,
        }
    }
}

/// A line-oriented terminal: prompts go to `output`, answers come from `input`.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    input_limit: usize,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, input_limit: usize) -> Self {
        Self {
            input,
            output,
            input_limit: input_limit.max(1),
        }
    }

    /// Shows the prompt, reads one line, and interprets it.
    pub fn read_command(&mut self, prompt: Prompt) -> io::Result<Entry> {
        self.show_prompt(prompt)?;
        let entry = self.read_entry(prompt)?;
        writeln!(self.output)?;
        Ok(entry)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_entry(&mut self, prompt: Prompt) -> io::Result<Entry> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(Entry::new("", Command::Exit));
        }
        raw.truncate(self.input_limit);
        let line = String::from_utf8_lossy(&raw);

        if line.is_empty() || line.starts_with(char::is_whitespace) {
            return Ok(Entry::new("", Command::Continue));
        }

        let token = first_word(&line);
        let command = match token {
            "-" | "+" => Command::Continue,
            _ => match parse_leading_int(token) {
                Some(code) => Command::from_code(code, prompt),
                None => Command::Continue,
            },
        };

        tracing::debug!(?prompt, token, ?command, "read entry");
        Ok(Entry::new(token, command))
    }

    fn show_prompt(&mut self, prompt: Prompt) -> io::Result<()> {
        let out = &mut self.output;
        match prompt {
            Prompt::Main => {
                writeln!(out, "{}", "MAIN COMMANDS".bold())?;
                writeln!(out, "-2 - quit")?;
                writeln!(out, "-1 - append a record")?;
                writeln!(out, " 0 - display all records")?;
                writeln!(out, " n - modify record number n (positive integer)")?;
                write!(out, "\nEnter command: ")?;
            }
            Prompt::Id => {
                writeln!(out, "{}", "ID COMMANDS".bold())?;
                writeln!(out, "-1 - back to main menu")?;
                writeln!(out, "\nStudent ID must start with \"a\", followed by 8 digits")?;
                write!(out, "Enter ID: ")?;
            }
            Prompt::Score => {
                writeln!(out, "{}", "SCORE COMMANDS".bold())?;
                writeln!(out, "-1 - back to main menu")?;
                writeln!(out, "\nScore must be between 0 and 100")?;
                write!(out, "Enter score: ")?;
            }
        }
        out.flush()
    }
}

/// Text up to the first space, without the line ending.
fn first_word(line: &str) -> &str {
    let word = line.split(' ').next().unwrap_or_default();
    let word = word.split('\n').next().unwrap_or_default();
    word.trim_end_matches('\r')
}

/// Parses a leading signed integer the way `%d` does: sign, digits, then
/// anything. `None` if there are no digits or the value overflows.
fn parse_leading_int(token: &str) -> Option<i32> {
    let unsigned = token.strip_prefix(['-', '+']).unwrap_or(token);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign_len = token.len() - unsigned.len();
    token[..sign_len + digits].parse().ok()
}
