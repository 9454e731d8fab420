use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody, SessionResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for the portfolio site and its admin panel",
    ),
    paths(
        crate::modules::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_admin::logout_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::session::get_session_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,
            SessionResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("admin_session"))),
            );
        }
    }
}
