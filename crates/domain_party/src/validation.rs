//! User validation rules
//!
//! # Validation Rules
//!
//! - Name must not be blank
//! - Email must look like `local@domain.tld`
//! - Mobile must not be blank
//!
//! A mobile number containing anything other than digits, spaces, `+` or `-`
//! is accepted with a warning.

use crate::user::User;

/// Result of user validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the user is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for user records
pub struct UserValidator;

impl UserValidator {
    /// Validates a user before registration
    ///
    /// # Arguments
    ///
    /// * `user` - The user to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(user: &User) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if user.name.trim().is_empty() {
            result.add_error(format!("Name is required for user {}", user.id));
        }

        if !Self::is_plausible_email(&user.email) {
            result.add_error(format!("Invalid email format: {}", user.email));
        }

        let mobile = user.mobile.trim();
        if mobile.is_empty() {
            result.add_error("Mobile number cannot be empty");
        } else if !mobile
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
        {
            result.add_warning(format!("Unusual characters in mobile number: {}", mobile));
        }

        result
    }

    /// Basic shape check: one `@`, non-empty local part, dotted domain
    fn is_plausible_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, mobile: &str) -> User {
        User::new("u1".parse().unwrap(), name, email, mobile)
    }

    #[test]
    fn test_valid_user() {
        let result = UserValidator::validate(&user("User1", "user1@example.com", "9876543210"));
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_blank_name() {
        let result = UserValidator::validate(&user("  ", "user1@example.com", "9876543210"));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_bad_emails() {
        for email in ["", "user1", "@example.com", "user1@", "user1@example", "a@b@c.com"] {
            let result = UserValidator::validate(&user("User1", email, "9876543210"));
            assert!(!result.is_valid, "expected {:?} to be rejected", email);
        }
    }

    #[test]
    fn test_mobile_rules() {
        let blank = UserValidator::validate(&user("User1", "user1@example.com", " "));
        assert!(!blank.is_valid);

        let odd = UserValidator::validate(&user("User1", "user1@example.com", "call me"));
        assert!(odd.is_valid);
        assert_eq!(odd.warnings.len(), 1);
    }
}
