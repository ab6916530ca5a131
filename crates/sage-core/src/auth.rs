//! Bearer-token identity and password hashing
//!
//! Callers identify themselves with an HS256 JWT whose `sub` claim is the
//! user id. A token either resolves to a user id or verification fails;
//! there is no partial identity.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the token signing secret
pub const JWT_SECRET_ENV: &str = "SAGE_JWT_SECRET";

/// How long an issued token stays valid
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

/// Signing and verification keys for identity tokens
pub struct AuthKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl AuthKeys {
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl,
        }
    }

    pub fn from_secret(secret: &[u8]) -> Self {
        Self::new(secret, DEFAULT_TOKEN_TTL)
    }

    /// Read the signing secret from `SAGE_JWT_SECRET`
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var(JWT_SECRET_ENV).map_err(|_| {
            Error::Authentication(format!(
                "Token secret not configured. Set the {} environment variable.",
                JWT_SECRET_ENV
            ))
        })?;
        if secret.trim().is_empty() {
            return Err(Error::Authentication(format!(
                "{} must not be empty",
                JWT_SECRET_ENV
            )));
        }
        Ok(Self::from_secret(secret.as_bytes()))
    }

    /// Issue a bearer token for a user id
    pub fn issue_token(&self, user_id: i64) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::InvalidData("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Authentication(format!("Failed to sign token: {}", e)))
    }

    /// Resolve a token to the user id it was issued for.
    ///
    /// Malformed, tampered, and expired tokens all fail verification.
    pub fn verify_identity(&self, token: &str) -> Result<i64> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| Error::Authentication(format!("Invalid token: {}", e)))?;
        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| Error::Authentication("Invalid token: bad subject claim".into()))
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

/// Hash a password with Argon2id for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InvalidData(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password candidate against a stored Argon2 hash
pub fn verify_password(candidate: &str, stored_hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| Error::InvalidData(format!("Malformed stored password hash: {}", e)))?;
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .map_err(|err| match err {
            PasswordHashError::Password => Error::Authentication("Invalid credentials".into()),
            other => Error::InvalidData(format!("Password verification failed: {}", other)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> AuthKeys {
        AuthKeys::from_secret(b"test-secret-which-is-long-enough")
    }

    #[test]
    fn test_token_round_trip() {
        let keys = test_keys();
        let token = keys.issue_token(42).unwrap();
        assert_eq!(keys.verify_identity(&token).unwrap(), 42);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let keys = test_keys();
        let err = keys.verify_identity("not-a-jwt").unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let keys = test_keys();
        let other = AuthKeys::from_secret(b"a-completely-different-secret!!!");
        let token = other.issue_token(42).unwrap();
        assert!(matches!(
            keys.verify_identity(&token),
            Err(Error::Authentication(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Zero TTL issues a token that is already expired. jsonwebtoken
        // applies default leeway, so disable it for the check.
        let mut keys = AuthKeys::new(b"test-secret-which-is-long-enough", Duration::from_secs(0));
        keys.validation.leeway = 0;
        let token = keys.issue_token(7).unwrap();
        assert!(matches!(
            keys.verify_identity(&token),
            Err(Error::Authentication(_))
        ));
    }

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).is_ok());
        assert!(matches!(
            verify_password("hunter3", &hash),
            Err(Error::Authentication(_))
        ));
    }
}
