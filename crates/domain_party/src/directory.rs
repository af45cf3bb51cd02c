//! User directory port and its in-memory adapter
//!
//! The directory is a flat `UserId -> User` record store. The ledger never
//! touches it; the command layer uses it to reject unknown ids and to render
//! display names.

use std::collections::HashMap;
use std::io::Read;

use core_kernel::UserId;
use crate::error::PartyError;
use crate::user::User;
use crate::validation::UserValidator;

/// Port for registering and resolving users
pub trait UserDirectory {
    /// Registers a new user
    ///
    /// # Errors
    ///
    /// - `PartyError::DuplicateUser` if the id is already taken
    /// - `PartyError::InvalidUser` if the user fails validation
    fn register(&mut self, user: User) -> Result<(), PartyError>;

    /// Looks up a user by id
    fn get(&self, id: &UserId) -> Option<&User>;

    /// Number of registered users
    fn len(&self) -> usize;

    /// Returns true if no users are registered
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a user is registered under `id`
    fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a user, failing with `PartyError::UnknownUser` if absent
    fn resolve(&self, id: &UserId) -> Result<&User, PartyError> {
        self.get(id).ok_or_else(|| PartyError::unknown_user(id))
    }

    /// Returns the display name for `id`
    fn display_name(&self, id: &UserId) -> Result<&str, PartyError> {
        self.resolve(id).map(|user| user.name.as_str())
    }
}

/// In-memory directory that remembers registration order
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory pre-populated with `users`
    ///
    /// # Errors
    ///
    /// Fails on the first user that cannot be registered
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Result<Self, PartyError> {
        let mut directory = Self::new();
        for user in users {
            directory.register(user)?;
        }
        Ok(directory)
    }

    /// Loads a directory from a JSON array of users
    ///
    /// ```json
    /// [{"id": "u1", "name": "User1", "email": "user1@example.com", "mobile": "9876543210"}]
    /// ```
    pub fn from_json_reader(reader: impl Read) -> Result<Self, PartyError> {
        let users: Vec<User> = serde_json::from_reader(reader)
            .map_err(|e| PartyError::LoadFailed(e.to_string()))?;
        Self::with_users(users)
    }

    /// The four demo users `u1`..`u4`, named `User1`..`User4`
    pub fn sample() -> Self {
        let mut directory = Self::new();
        let ids = (1..=4).filter_map(|n| UserId::new(format!("u{}", n)).ok().map(|id| (n, id)));
        for (n, id) in ids {
            let user = User::new(id, format!("User{}", n), format!("user{}@example.com", n), "9876543210");
            directory.insert(user);
        }
        directory
    }

    /// Iterates users in registration order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    fn insert(&mut self, user: User) {
        self.index.insert(user.id.clone(), self.users.len());
        self.users.push(user);
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn register(&mut self, user: User) -> Result<(), PartyError> {
        if self.index.contains_key(&user.id) {
            return Err(PartyError::DuplicateUser(user.id.to_string()));
        }

        let validation = UserValidator::validate(&user);
        if !validation.is_valid {
            return Err(PartyError::validation_failed(validation.errors));
        }
        for warning in &validation.warnings {
            tracing::warn!(user = %user.id, %warning, "user registered with warning");
        }

        tracing::debug!(user = %user.id, name = %user.name, "user registered");
        self.insert(user);
        Ok(())
    }

    fn get(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).and_then(|&i| self.users.get(i))
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
