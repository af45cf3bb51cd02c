//! Command-Line Interface Layer
//!
//! This crate reads commands one line at a time, applies them to a single
//! process-wide [`Ledger`], and writes the resulting balance lines.
//!
//! # Commands
//!
//! ```text
//! EXPENSE <payer> <amount> <n> <id_1> ... <id_n> <EQUAL|EXACT|PERCENT> [<v_1> ... <v_n>]
//! SHOW
//! SHOW <user>
//! ```
//!
//! # Architecture
//!
//! - **Command**: parsing of a single input line
//! - **Runner**: validation against the user directory and dispatch to the ledger
//! - **Render**: output line formatting
//! - **Config**: environment-driven settings for the binary
//!
//! # Example
//!
//! ```rust
//! use domain_ledger::Ledger;
//! use domain_party::InMemoryUserDirectory;
//! use interface_cli::CommandRunner;
//!
//! let mut runner = CommandRunner::new(InMemoryUserDirectory::sample(), Ledger::new());
//! let input = "EXPENSE u1 1000 4 u1 u2 u3 u4 EQUAL\nSHOW u4\n";
//! let mut output = Vec::new();
//! runner.run(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "User4 owes User1: 250\n");
//! ```
//!
//! [`Ledger`]: domain_ledger::Ledger

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod runner;

pub use command::Command;
pub use config::{CliConfig, LogFormat};
pub use error::{CliError, CommandError};
pub use runner::{CommandRunner, RunSummary};
