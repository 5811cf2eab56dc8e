//! # Command Interpreter
//!
//! The interactive loop, written as an explicit state machine:
//!
//! ```text
//!                  ┌────────── Continue / List / missing record ──────────┐
//!                  ▼                                                       │
//!        ┌──────────────────┐  Abort (append) / Position(n) (modify)       │
//!  ───►  │ AwaitMainCommand │ ───────────────────────────┐                 │
//!        └──────────────────┘                            ▼                 │
//!                  │ Exit                    ┌──────────────────────┐      │
//!                  ▼                         │ CollectingIdentifier │ ─────┘
//!             ┌─────────┐                    └──────────────────────┘ Exit
//!             │ Exiting │                               │ valid ID
//!             └─────────┘                               ▼
//!                                            ┌──────────────────────┐
//!                                            │   CollectingScore    │ ── Exit or
//!                                            └──────────────────────┘   written ──► main
//! ```
//!
//! Append and modify share the identifier/score dialog; they differ only in the
//! [`Target`] the finished record is written to. A modify first reads and reports
//! the record it will replace, and is a no-op when there is none.
//!
//! Prompts go to the terminal's output. Listings and modify reports go to a
//! separate diagnostic writer (stderr in the binary).

use crate::api::ScorebookApi;
use crate::error::Result;
use crate::input::{Command, Prompt, Terminal};
use crate::model::{ListedRecord, Record};
use crate::store::DataStore;
use crate::validation::{validate_id, validate_score};
use std::io::{BufRead, Write};

/// Where a finished dialog writes its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Append,
    Modify(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    AwaitMainCommand,
    CollectingIdentifier { target: Target },
    CollectingScore { target: Target, id: String },
    Exiting,
}

pub struct Session<S: DataStore, R, W, E> {
    api: ScorebookApi<S>,
    terminal: Terminal<R, W>,
    diag: E,
}

impl<S, R, W, E> Session<S, R, W, E>
where
    S: DataStore,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(api: ScorebookApi<S>, terminal: Terminal<R, W>, diag: E) -> Self {
        Self {
            api,
            terminal,
            diag,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::AwaitMainCommand;
        while state != State::Exiting {
            state = self.step(state)?;
        }
        tracing::debug!("session finished");
        Ok(())
    }

    /// Reads one line of input and returns the next state.
    pub fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::AwaitMainCommand => self.main_command()?,
            State::CollectingIdentifier { target } => self.collect_identifier(target)?,
            State::CollectingScore { target, id } => self.collect_score(target, id)?,
            State::Exiting => State::Exiting,
        };
        tracing::trace!(?next, "state transition");
        Ok(next)
    }

    pub fn into_parts(self) -> (ScorebookApi<S>, Terminal<R, W>, E) {
        (self.api, self.terminal, self.diag)
    }

    fn main_command(&mut self) -> Result<State> {
        let entry = self.terminal.read_command(Prompt::Main)?;
        let next = match entry.command {
            Command::Exit => State::Exiting,
            Command::Abort => State::CollectingIdentifier {
                target: Target::Append,
            },
            Command::List => {
                self.list()?;
                State::AwaitMainCommand
            }
            Command::Position(position) => self.begin_modify(position)?,
            Command::Continue => State::AwaitMainCommand,
        };
        Ok(next)
    }

    fn list(&mut self) -> Result<()> {
        let mut any = false;
        for item in self.api.list_records()? {
            writeln!(self.diag, "{}", item?)?;
            any = true;
        }
        if any {
            writeln!(self.diag)?;
        }
        self.diag.flush()?;
        Ok(())
    }

    fn begin_modify(&mut self, position: u32) -> Result<State> {
        let Some(existing) = self.api.find_record(position)? else {
            tracing::debug!(position, "no record to modify");
            return Ok(State::AwaitMainCommand);
        };

        self.report(&existing)?;
        Ok(State::CollectingIdentifier {
            target: Target::Modify(position),
        })
    }

    fn report(&mut self, listed: &ListedRecord) -> Result<()> {
        writeln!(self.diag, "{}", listed)?;
        writeln!(self.diag)?;
        self.diag.flush()?;
        Ok(())
    }

    fn collect_identifier(&mut self, target: Target) -> Result<State> {
        let entry = self.terminal.read_command(Prompt::Id)?;
        if entry.command == Command::Exit {
            tracing::debug!(?target, "dialog abandoned at ID");
            return Ok(State::AwaitMainCommand);
        }

        match validate_id(&entry.token) {
            Ok(()) => Ok(State::CollectingScore {
                target,
                id: entry.token,
            }),
            Err(e) => {
                tracing::debug!(token = %entry.token, reason = %e, "rejected ID");
                Ok(State::CollectingIdentifier { target })
            }
        }
    }

    fn collect_score(&mut self, target: Target, id: String) -> Result<State> {
        let entry = self.terminal.read_command(Prompt::Score)?;
        if entry.command == Command::Exit {
            tracing::debug!(?target, %id, "dialog abandoned at score");
            return Ok(State::AwaitMainCommand);
        }

        let score = match validate_score(&entry.token) {
            Ok(score) => score,
            Err(e) => {
                tracing::debug!(token = %entry.token, reason = %e, "rejected score");
                return Ok(State::CollectingScore { target, id });
            }
        };

        let record = Record::new(id, score);
        match target {
            Target::Append => {
                self.api.append_record(&record)?;
            }
            Target::Modify(position) => {
                self.api.modify_record(position, &record)?;
            }
        }
        Ok(State::AwaitMainCommand)
    }
}
