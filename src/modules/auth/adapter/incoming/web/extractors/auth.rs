use actix_web::{
    dev::Payload, http::header, Error as ActixError, FromRequest, HttpMessage, HttpRequest,
};
use std::future::{ready, Ready};

use crate::modules::auth::application::domain::entities::{AuthState, SESSION_COOKIE};

/// Session token from the `admin_session` cookie, falling back to a Bearer
/// header for API clients.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The state resolved by the admin gate for this request. Requests that never
/// went through the gate are anonymous.
impl FromRequest for AuthState {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(req
            .extensions()
            .get::<AuthState>()
            .copied()
            .unwrap_or_default()))
    }
}
