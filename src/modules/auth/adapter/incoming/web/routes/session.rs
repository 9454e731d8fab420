use crate::api::schemas::SuccessResponse;
use crate::modules::auth::application::domain::entities::AuthState;
use crate::shared::api::ApiResponse;
use actix_web::{get, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = true)]
    authenticated: bool,
}

/// Current session
///
/// Reports whether the request carries a live admin session.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session state",
            body = inline(SuccessResponse<SessionResponse>),
            example = json!({
                "success": true,
                "data": { "authenticated": false }
            })
        ),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(state: AuthState) -> HttpResponse {
    ApiResponse::success(SessionResponse {
        authenticated: state.is_admin(),
    })
}
