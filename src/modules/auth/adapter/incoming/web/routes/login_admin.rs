use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::login_admin::{
    LoginAdminUseCase, LoginError, LoginRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Admin sign-in form
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin email address
    #[schema(example = "admin@example.com")]
    pub email: String,

    /// Admin password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT session token, also set as the `admin_session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Seconds until the session expires
    #[schema(example = 28800)]
    expires_in: i64,
}

fn session_cookie(token: String, max_age: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::seconds(max_age))
        .finish()
}

/// Admin login
///
/// Checks the configured admin credential and opens a session.
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful, `admin_session` cookie set",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "accessToken": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expiresIn": 28800
                }
            })
        ),
        (
            status = 400,
            description = "Missing or malformed email, or empty password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email format"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid credentials."
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = req.into_inner();

    info!(email = %dto.email, "Admin login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin.execute(request).await {
        Ok(session) => {
            info!("Admin logged in");

            let cookie = session_cookie(
                session.access_token.clone(),
                session.expires_in,
                data.cookie_secure,
            );
            let mut response = ApiResponse::success(LoginResponse {
                access_token: session.access_token,
                expires_in: session.expires_in,
            });

            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }
            response
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials.")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
