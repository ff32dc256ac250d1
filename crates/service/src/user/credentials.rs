//! Password hashing and session token generation.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

use crate::errors::ServiceError;

pub const TOKEN_LEN: usize = 48;

/// Salted argon2 hash in PHC string form.
pub fn hash_password(argon: &Argon2<'_>, password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    argon
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Hash(e.to_string()))
}

/// Parameters come from the PHC string, so any `Argon2` instance can verify.
pub fn verify_password(argon: &Argon2<'_>, password: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(hash).map_err(|e| ServiceError::Hash(e.to_string()))?;
    Ok(argon.verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Opaque session token from the OS CSPRNG.
pub fn generate_token() -> String {
    OsRng.sample_iter(&Alphanumeric).take(TOKEN_LEN).map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fast_argon2;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let argon = fast_argon2();
        let hash = hash_password(&argon, "password").unwrap();
        assert_ne!(hash, "password");
        assert!(verify_password(&argon, "password", &hash).unwrap());
        assert!(!verify_password(&argon, "rahasia", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let argon = fast_argon2();
        let a = hash_password(&argon, "password").unwrap();
        let b = hash_password(&argon, "password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn default_params_verify_fast_hashes() {
        let hash = hash_password(&fast_argon2(), "password").unwrap();
        assert!(verify_password(&Argon2::default(), "password", &hash).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(matches!(verify_password(&fast_argon2(), "x", "not-a-phc"), Err(ServiceError::Hash(_))));
    }

    #[test]
    fn tokens_are_alphanumeric_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
