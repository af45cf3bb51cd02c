//! User entity

use serde::{Deserialize, Serialize};

use core_kernel::UserId;

/// A person who can pay for or take part in an expense
///
/// Identity is `id`. Users are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier used on the command line
    pub id: UserId,
    /// Name shown in balance output
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub mobile: String,
}

impl User {
    /// Creates a new user
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            mobile: mobile.into(),
        }
    }
}
