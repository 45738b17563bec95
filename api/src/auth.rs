//! # Credential gate — fixed account table
//!
//! Maps a username/password pair to a role and display label. This is a
//! placeholder-grade gate, not a security boundary: two plaintext pairs, no
//! hashing, no lockout, no throttling. The one requirement it encodes —
//! "map a credential pair to a role" — is what a real identity provider
//! would replace before any production deployment.

use store::{Role, SessionUser};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// username, password, role, display label
const ACCOUNTS: [(&str, &str, Role, &str); 2] = [
    ("admin", "admin123", Role::Admin, "System Administrator"),
    ("staff", "staff123", Role::Staff, "Archive Clerk"),
];

/// Check a credential pair against the account table.
pub fn authenticate(username: &str, password: &str) -> Result<SessionUser, AuthError> {
    ACCOUNTS
        .iter()
        .find(|(user, pass, _, _)| *user == username && *pass == password)
        .map(|(_, _, role, label)| SessionUser {
            username: label.to_string(),
            role: *role,
        })
        .ok_or(AuthError::InvalidCredentials)
}

/// Number of accounts the gate knows about.
pub fn known_accounts() -> usize {
    ACCOUNTS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_pair_yields_admin_session() {
        let user = authenticate("admin", "admin123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.username, "System Administrator");
    }

    #[test]
    fn test_staff_pair_yields_staff_session() {
        let user = authenticate("staff", "staff123").unwrap();
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.username, "Archive Clerk");
    }

    #[test]
    fn test_any_other_pair_is_rejected_with_a_message() {
        for (user, pass) in [
            ("admin", "wrong"),
            ("staff", "admin123"),
            ("", ""),
            ("root", "root"),
        ] {
            let err = authenticate(user, pass).unwrap_err();
            assert_eq!(err, AuthError::InvalidCredentials);
            assert!(!err.to_string().is_empty());
        }
    }
}
