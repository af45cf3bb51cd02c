//! CLI error handling

use thiserror::Error;

use domain_ledger::ExpenseError;
use domain_party::PartyError;

/// Problems with the shape of a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Line is not valid UTF-8")]
    InvalidEncoding,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid participant count: {0}")]
    InvalidCount(String),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Unknown split policy: {0}")]
    UnknownPolicy(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Expense(#[from] ExpenseError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns true if the error is a rejected expense split
    pub fn is_invalid_expense(&self) -> bool {
        matches!(self, CliError::Expense(ExpenseError::Validation(_)))
    }
}
