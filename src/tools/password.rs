use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::LazyLock;

/// Hash used to verify a password when no user matches the email,
/// so that an unknown email costs as much as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| hash("not a password").ok());

pub const MINIMUM_PASSWORD_LENGTH: usize = 8;

/// Hash a password with Argon2id and a random salt, as a PHC string.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
/// Without stored hash, the check still runs against a dummy one and fails.
pub fn verify(password: &str, stored_hash: Option<&str>) -> bool {
    let Some(stored_hash) = stored_hash.or(DUMMY_HASH.as_deref()) else {
        return false;
    };
    let matches = PasswordHash::new(stored_hash)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false);

    matches && stored_hash != DUMMY_HASH.as_deref().unwrap_or_default()
}

pub fn is_strong_enough(password: &str) -> bool {
    password.chars().count() >= MINIMUM_PASSWORD_LENGTH
}

#[cfg(test)]
mod tests {
    use crate::tools::password::{hash, is_strong_enough, verify};
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_verify_hashed_password() {
        let hashed = hash("correct horse").unwrap();
        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify("correct horse", Some(&hashed)));
        assert!(!verify("battery staple", Some(&hashed)));
    }

    #[test]
    fn should_salt_every_hash() {
        assert_ne!(hash("password").unwrap(), hash("password").unwrap());
    }

    #[test]
    fn should_reject_without_stored_hash() {
        assert!(!verify("not a password", None));
    }

    #[test]
    fn should_reject_malformed_hash() {
        assert!(!verify("password", Some("plain text")));
    }

    #[parameterized(
        password = {"", "1234567", "12345678", "ééééééééé"},
        expected_result = {false, false, true, true}
    )]
    fn should_check_password_strength(password: &str, expected_result: bool) {
        assert_eq!(expected_result, is_strong_enough(password));
    }
}
