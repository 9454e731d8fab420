use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Clock skew tolerated past `exp` when verifying a token. Revocations
/// must outlive a token by at least this much.
pub const TOKEN_LEEWAY_SECS: i64 = 30;

/// JWT claims of an admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    /// Unique per issued token, so two logins never share a revocation entry
    pub jti: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, subject: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    /// Lifetime of access tokens in seconds
    fn access_token_expiry(&self) -> i64;
}
