use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    /// Revokes `token` if it is a live session token. Anything else is a no-op.
    async fn execute(&self, token: Option<&str>);
}

pub struct LogoutAdminService {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutAdminService {
    pub fn new(tokens: Arc<dyn TokenProvider>, blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl LogoutAdminUseCase for LogoutAdminService {
    async fn execute(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };

        match self.tokens.verify_token(token) {
            Ok(claims) => {
                self.blacklist.revoke(token, claims.exp).await;
                tracing::info!(jti = %claims.jti, "Admin session revoked");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Logout with unusable token, nothing to revoke");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::jwt::jwt_config::JwtConfig;
    use crate::modules::auth::adapter::outgoing::jwt::jwt_service::JwtTokenService;
    use crate::modules::auth::adapter::outgoing::token_blacklist_memory::InMemoryTokenBlacklist;

    fn setup() -> (LogoutAdminService, Arc<JwtTokenService>, Arc<InMemoryTokenBlacklist>) {
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_with_32_characters".to_string(),
            issuer: "portfolio".to_string(),
            access_token_expiry: 600,
        }));
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());
        let service = LogoutAdminService::new(tokens.clone(), blacklist.clone());
        (service, tokens, blacklist)
    }

    #[tokio::test]
    async fn test_logout_revokes_live_token() {
        let (service, tokens, blacklist) = setup();
        let token = tokens.generate_access_token("admin").unwrap();

        service.execute(Some(&token)).await;

        assert!(blacklist.is_revoked(&token).await);
    }

    #[tokio::test]
    async fn test_logout_ignores_garbage_and_missing_tokens() {
        let (service, _, blacklist) = setup();

        service.execute(None).await;
        service.execute(Some("garbage")).await;

        assert_eq!(blacklist.len().await, 0);
    }
}
