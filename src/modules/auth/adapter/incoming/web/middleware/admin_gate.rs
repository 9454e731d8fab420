use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpMessage, HttpResponse,
};
use tracing::debug;

use crate::modules::auth::adapter::incoming::web::extractors::auth::session_token;
use crate::modules::auth::application::domain::entities::{
    authorize, AuthState, GateDecision, LOGIN_PATH,
};
use crate::modules::auth::application::use_cases::resolve_session::ResolveSessionUseCase;
use crate::AppState;

/// Resolves the session of every request, stores it in the request
/// extensions and turns anonymous `/admin` traffic into a login redirect.
pub async fn admin_gate<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let sessions = req
        .app_data::<web::Data<AppState>>()
        .map(|data| data.sessions.clone());
    let token = session_token(req.request());

    let state = match sessions {
        Some(sessions) => sessions.execute(token.as_deref()).await,
        None => AuthState::Anonymous,
    };
    req.extensions_mut().insert(state);

    match authorize(req.path(), state) {
        GateDecision::Allow => next.call(req).await.map(ServiceResponse::map_into_left_body),
        GateDecision::RedirectToLogin => {
            debug!(path = %req.path(), "Anonymous admin request, redirecting to login");
            let response = HttpResponse::SeeOther()
                .insert_header((header::LOCATION, LOGIN_PATH))
                .finish();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
