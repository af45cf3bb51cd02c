//! Split Ledger - Command Line Binary
//!
//! Reads `EXPENSE` and `SHOW` commands from standard input, one per line,
//! and prints balances to standard output. Logs go to standard error.
//!
//! # Usage
//!
//! ```bash
//! # Run with the demo users u1..u4
//! printf 'EXPENSE u1 1000 4 u1 u2 u3 u4 EQUAL\nSHOW\n' | cargo run --bin splitledger
//!
//! # Run with a users file and JSON logs
//! SPLIT_USERS_FILE=users.json SPLIT_LOG_FORMAT=json cargo run --bin splitledger < commands.txt
//! ```
//!
//! # Environment Variables
//!
//! * `SPLIT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `SPLIT_LOG_FORMAT` - Log format: text or json (default: text)
//! * `SPLIT_USERS_FILE` - JSON array of users to register (default: demo users)
//! * `RUST_LOG` - Overrides `SPLIT_LOG_LEVEL` when set

use anyhow::Context;
use domain_ledger::Ledger;
use interface_cli::{CliConfig, CommandRunner, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the command loop.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The users file cannot be read or holds invalid users
/// - Standard input or output fails
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config);

    let directory = config
        .load_directory()
        .context("failed to load user directory")?;

    tracing::info!(
        users_file = ?config.users_file,
        "Starting split ledger"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = CommandRunner::new(directory, Ledger::new())
        .run(stdin.lock(), stdout.lock())
        .context("command loop failed")?;

    tracing::info!(
        commands = summary.commands,
        failures = summary.failures,
        "Input exhausted"
    );
    Ok(())
}

/// Initializes the tracing subscriber, writing to standard error.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
