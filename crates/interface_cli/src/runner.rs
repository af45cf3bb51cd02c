//! Command loop
//!
//! The runner owns the ledger for the lifetime of the process and applies
//! commands strictly one at a time. A failing command is reported on the
//! output and the loop moves on to the next line.

use std::io::{BufRead, Write};

use core_kernel::UserId;
use domain_ledger::{ExpenseProcessor, Ledger};
use domain_party::UserDirectory;
use crate::command::Command;
use crate::error::{CliError, CommandError};
use crate::render;

/// Counters for one pass over an input stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank lines read
    pub commands: usize,
    /// Lines that produced an error line
    pub failures: usize,
}

/// Parses commands and dispatches them to the ledger
pub struct CommandRunner<D: UserDirectory> {
    directory: D,
    ledger: Ledger,
    processor: ExpenseProcessor,
}

impl<D: UserDirectory> CommandRunner<D> {
    /// Creates a runner over `directory` that takes ownership of `ledger`
    pub fn new(directory: D, ledger: Ledger) -> Self {
        Self {
            directory,
            ledger,
            processor: ExpenseProcessor::new(),
        }
    }

    /// Returns the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the user directory
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Consumes the runner, returning the ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Reads commands from `input` until EOF, writing output lines to `output`
    ///
    /// Blank lines are skipped. Command failures, including lines that are
    /// not valid UTF-8, are written as output lines and never stop the loop.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading `input` or writing `output` fails
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<RunSummary, CliError> {
        let mut summary = RunSummary::default();

        for chunk in input.split(b'\n') {
            let bytes = chunk?;
            let outcome = match std::str::from_utf8(&bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.execute_line(line),
                Err(_) => Err(CommandError::InvalidEncoding.into()),
            };
            summary.commands += 1;

            let lines = match outcome {
                Ok(lines) => lines,
                Err(error) => {
                    summary.failures += 1;
                    let text = String::from_utf8_lossy(&bytes);
                    tracing::warn!(
                        %error,
                        line = %text.trim(),
                        invalid_expense = error.is_invalid_expense(),
                        "command rejected"
                    );
                    vec![render::error_line(&error)]
                }
            };

            for text in lines {
                writeln!(output, "{}", text)?;
            }
        }

        output.flush()?;
        Ok(summary)
    }

    /// Parses and executes one line, returning the lines to print
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<String>, CliError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Executes a parsed command, returning the lines to print
    ///
    /// # Errors
    ///
    /// - `CliError::Party` if a referenced user is not registered
    /// - `CliError::Expense` if the expense split is rejected or a resulting
    ///   debt is out of range
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>, CliError> {
        match command {
            Command::Expense(expense) => {
                self.ensure_registered(&expense.payer_id)?;
                for participant in &expense.participant_ids {
                    self.ensure_registered(participant)?;
                }

                let receipt = self.processor.process(&mut self.ledger, &expense)?;
                tracing::debug!(
                    expense_id = %receipt.expense_id,
                    edges = self.ledger.len(),
                    "ledger updated"
                );
                Ok(Vec::new())
            }
            Command::Show(user) => {
                if let Some(id) = &user {
                    self.ensure_registered(id)?;
                }
                let balances = self.ledger.query(user.as_ref());
                Ok(render::render_balances(&balances, &self.directory)?)
            }
        }
    }

    fn ensure_registered(&self, id: &UserId) -> Result<(), CliError> {
        self.directory.resolve(id)?;
        Ok(())
    }
}
