use serde::Serialize;

/// Subject claim carried by every admin session token.
pub const ADMIN_SUBJECT: &str = "admin";

/// The one admin path reachable without a session.
pub const LOGIN_PATH: &str = "/admin/login";

pub const SESSION_COOKIE: &str = "admin_session";

/// The configured admin login. The password is only ever held as an
/// Argon2 PHC string.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AuthState {
    #[default]
    Anonymous,
    Admin,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthState::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
}

fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// Per-request gate: everything outside `/admin` is public, the login page
/// is always reachable and the rest of `/admin` needs an admin session.
pub fn authorize(path: &str, state: AuthState) -> GateDecision {
    if !is_admin_path(path) || path == LOGIN_PATH || state.is_admin() {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin
    }
}
