//! User Entity
//!
//! Single user record: public profile fields plus the password hash.
//! The hash never leaves the domain layer - DTOs only expose the
//! public fields.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name (trimmed, non-empty)
    pub name: String,
    /// Email (unique, normalized to lowercase)
    pub email: Email,
    /// bcrypt password hash
    pub password_hash: HashedPassword,
    /// Optional free-text bio
    pub bio: Option<String>,
    /// Optional free-text location
    pub location: Option<String>,
    /// Created timestamp (immutable)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            bio: None,
            location: None,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial profile update.
    ///
    /// Only supplied, non-empty fields overwrite the stored value; omitted
    /// or empty fields are left unchanged. This mirrors the marketplace's
    /// established behavior: a field cannot be blanked out through this
    /// operation. Email is immutable here.
    pub fn apply_profile(
        &mut self,
        name: Option<String>,
        bio: Option<String>,
        location: Option<String>,
    ) {
        if let Some(name) = non_empty(name) {
            self.name = name;
        }
        if let Some(bio) = non_empty(bio) {
            self.bio = Some(bio);
        }
        if let Some(location) = non_empty(location) {
            self.location = Some(location);
        }
    }
}

/// Trim the value and treat empty as "not supplied"
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn test_user() -> User {
        let hash = ClearTextPassword::new("secret1".to_string())
            .unwrap()
            .hash(4)
            .unwrap();
        User::new(
            "Alice".to_string(),
            Email::new("alice@example.com").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_new_user_has_no_optional_fields() {
        let user = test_user();
        assert!(user.bio.is_none());
        assert!(user.location.is_none());
    }

    #[test]
    fn test_apply_profile_overwrites_supplied_fields() {
        let mut user = test_user();
        user.apply_profile(Some("Alicia".to_string()), Some("Trader".to_string()), None);
        assert_eq!(user.name, "Alicia");
        assert_eq!(user.bio.as_deref(), Some("Trader"));
        assert!(user.location.is_none());
    }

    #[test]
    fn test_apply_profile_skips_omitted_fields() {
        let mut user = test_user();
        user.apply_profile(None, Some("Trader".to_string()), None);
        user.apply_profile(None, None, Some("Berlin".to_string()));
        assert_eq!(user.name, "Alice");
        assert_eq!(user.bio.as_deref(), Some("Trader"));
        assert_eq!(user.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_apply_profile_empty_string_does_not_clear() {
        // Known quirk: an empty string counts as "not supplied", so a
        // stored field cannot be blanked out.
        let mut user = test_user();
        user.apply_profile(None, Some("Trader".to_string()), None);
        user.apply_profile(Some("".to_string()), Some("".to_string()), None);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.bio.as_deref(), Some("Trader"));
    }

    #[test]
    fn test_apply_profile_trims_values() {
        let mut user = test_user();
        user.apply_profile(Some("  Alicia  ".to_string()), None, None);
        assert_eq!(user.name, "Alicia");
    }
}
