//! Party Management Domain
//!
//! This crate owns the people who share expenses. A [`User`] is registered
//! once and never changes afterwards; the [`UserDirectory`] is the flat
//! record store the rest of the system consults to turn a [`UserId`] into a
//! display name.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{InMemoryUserDirectory, User, UserDirectory};
//!
//! let mut directory = InMemoryUserDirectory::new();
//! directory
//!     .register(User::new("u1".parse().unwrap(), "User1", "user1@example.com", "9876543210"))
//!     .unwrap();
//!
//! assert_eq!(directory.display_name(&"u1".parse().unwrap()).unwrap(), "User1");
//! ```
//!
//! [`UserId`]: core_kernel::UserId

pub mod user;
pub mod directory;
pub mod validation;
pub mod error;

pub use user::User;
pub use directory::{UserDirectory, InMemoryUserDirectory};
pub use validation::{UserValidator, ValidationResult};
pub use error::PartyError;
