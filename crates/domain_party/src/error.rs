//! Party domain errors

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// No user is registered under the given ID
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// Attempted to register an ID that is already taken
    #[error("Duplicate user: {0}")]
    DuplicateUser(String),

    /// User validation failed
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// A user roster could not be read or decoded
    #[error("Failed to load users: {0}")]
    LoadFailed(String),
}

impl PartyError {
    /// Creates an UnknownUser error from any ID type
    pub fn unknown_user(id: impl std::fmt::Display) -> Self {
        PartyError::UnknownUser(id.to_string())
    }

    /// Creates an InvalidUser error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PartyError::InvalidUser(errors.join("; "))
    }
}
