//! Bearer token signing and verification.

use std::fmt;

use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::auth::errors::AuthError;

/// Bearer token lifetime in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Claims embedded in a signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub exp: i64,
}

/// Identity asserted by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
        }
    }
}

/// Signs and verifies HS256 bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token carrying the user's id and email, expiring in one hour.
    ///
    /// # Errors
    ///
    /// Returns an error if claim serialization or signing fails.
    pub fn issue(&self, user_id: i32, email: &str) -> Result<String, AuthError> {
        let claims = Claims {
            id: user_id,
            email: email.to_owned(),
            exp: Timestamp::now().as_second() + TOKEN_TTL_SECONDS,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Signing)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidToken`] for malformed, expired, or
    /// wrongly-signed tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSigner(**redacted**)")
    }
}
