//! Password hashing and verification.

use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
///
/// # Errors
///
/// Returns an error if the stored hash is not a valid bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    verify(password, password_hash)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_then_verify_accepts_password() -> TestResult {
        let hashed = hash_password("hunter2")?;

        assert!(verify_password("hunter2", &hashed)?);

        Ok(())
    }

    #[test]
    fn verify_rejects_wrong_password() -> TestResult {
        let hashed = hash_password("hunter2")?;

        assert!(!verify_password("hunter3", &hashed)?);

        Ok(())
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("hunter2", "not-a-bcrypt-hash").is_err());
    }
}
