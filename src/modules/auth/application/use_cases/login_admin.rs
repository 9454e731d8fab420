use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::{AdminCredential, ADMIN_SUBJECT};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

// ========================= Login Request =========================
/// Validated sign-in attempt
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        // Whitespace is significant in passwords, only reject blank ones
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_string(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AdminSession, LoginError>;
}

pub struct LoginAdminService {
    credential: AdminCredential,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credential: AdminCredential,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credential,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, request: LoginRequest) -> Result<AdminSession, LoginError> {
        // Verify even on an email mismatch so both failures cost the same
        let password_ok = self
            .hasher
            .verify_password(request.password(), &self.credential.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        let email_ok = request.email() == self.credential.email;

        if !(email_ok && password_ok) {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(ADMIN_SUBJECT)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AdminSession {
            access_token,
            expires_in: self.tokens.access_token_expiry(),
        })
    }
}
