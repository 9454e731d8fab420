use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TOKEN_LEEWAY_SECS,
};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: subject.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS_TOKEN.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = TOKEN_LEEWAY_SECS as u64;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        if decoded.claims.token_type != ACCESS_TOKEN {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ACCESS_TOKEN,
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACCESS_TOKEN.to_string()));
        }

        Ok(decoded.claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}
