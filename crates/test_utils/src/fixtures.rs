//! Pre-built Test Fixtures
//!
//! Provides ready-to-use users that match the demo directory, so test input
//! can refer to `u1`..`u4` and expect `User1`..`User4` in the output.

use core_kernel::UserId;
use domain_party::{InMemoryUserDirectory, User, UserDirectory};

/// Fixture for user identifiers
pub struct UserFixtures;

impl UserFixtures {
    /// Parses an identifier, panicking on invalid test input
    pub fn id(raw: &str) -> UserId {
        UserId::new(raw).unwrap_or_else(|e| panic!("invalid test user id {:?}: {}", raw, e))
    }

    /// First demo user
    pub fn u1() -> UserId {
        Self::id("u1")
    }

    /// Second demo user
    pub fn u2() -> UserId {
        Self::id("u2")
    }

    /// Third demo user
    pub fn u3() -> UserId {
        Self::id("u3")
    }

    /// Fourth demo user
    pub fn u4() -> UserId {
        Self::id("u4")
    }

    /// All four demo users in order
    pub fn all() -> Vec<UserId> {
        vec![Self::u1(), Self::u2(), Self::u3(), Self::u4()]
    }

    /// A user with valid contact details
    pub fn user(raw: &str, name: &str) -> User {
        User::new(
            Self::id(raw),
            name,
            format!("{}@example.com", raw),
            "9876543210",
        )
    }

    /// The demo directory with `u1`..`u4`
    pub fn directory() -> InMemoryUserDirectory {
        InMemoryUserDirectory::sample()
    }

    /// A directory holding exactly the given `(id, name)` pairs
    pub fn directory_of(users: &[(&str, &str)]) -> InMemoryUserDirectory {
        let mut directory = InMemoryUserDirectory::new();
        for (raw, name) in users {
            directory
                .register(Self::user(raw, name))
                .unwrap_or_else(|e| panic!("failed to register {}: {}", raw, e));
        }
        directory
    }

    /// JSON text for a users file holding the given `(id, name)` pairs
    pub fn users_json(users: &[(&str, &str)]) -> String {
        let entries: Vec<String> = users
            .iter()
            .map(|(raw, name)| {
                format!(
                    r#"{{"id":"{}","name":"{}","email":"{}@example.com","mobile":"9876543210"}}"#,
                    raw, name, raw
                )
            })
            .collect();
        format!("[{}]", entries.join(","))
    }
}
