use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AuthState, ADMIN_SUBJECT};
use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

#[async_trait]
pub trait ResolveSessionUseCase: Send + Sync {
    async fn execute(&self, token: Option<&str>) -> AuthState;
}

pub struct ResolveSessionService {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl ResolveSessionService {
    pub fn new(tokens: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl ResolveSessionUseCase for ResolveSessionService {
    async fn execute(&self, token: Option<&str>) -> AuthState {
        let Some(token) = token else {
            return AuthState::Anonymous;
        };

        let claims = match self.tokens.verify_token(token) {
            Ok(claims) => claims,
            Err(_) => return AuthState::Anonymous,
        };

        if claims.sub != ADMIN_SUBJECT {
            tracing::warn!(sub = %claims.sub, "Session token with unexpected subject");
            return AuthState::Anonymous;
        }

        if self.blacklist.is_revoked(token).await {
            return AuthState::Anonymous;
        }

        AuthState::Admin
    }
}
