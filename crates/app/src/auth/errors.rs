//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer token was presented.
    #[error("access denied")]
    MissingToken,

    /// The token was malformed, expired, or signed with the wrong key.
    #[error("invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
