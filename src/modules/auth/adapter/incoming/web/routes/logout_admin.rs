use crate::api::schemas::SuccessResponse;
use crate::modules::auth::adapter::incoming::web::extractors::auth::session_token;
use crate::modules::auth::application::domain::entities::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::Cookie;
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Admin logout
///
/// Revokes the current session token and clears the session cookie.
#[utoipa::path(
    post,
    path = "/admin/logout",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session closed",
            body = inline(SuccessResponse<LogoutResponseBody>),
            example = json!({
                "success": true,
                "data": { "message": "Logged out successfully" }
            })
        ),
        (status = 303, description = "No admin session, redirected to /admin/login"),
    ),
    security(("BearerAuth" = []))
)]
#[post("/admin/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let token = session_token(&req);

    data.logout_admin.execute(token.as_deref()).await;
    info!("Admin logged out");

    let mut response = ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    });

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    if let Err(e) = response.add_removal_cookie(&removal) {
        error!(error = %e, "Failed to clear session cookie");
    }
    response
}
