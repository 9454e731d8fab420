use actix_web::{get, web, HttpResponse, Responder};
use serde_json::Value;
use tracing::error;

use crate::modules::site::application::ports::incoming::site_views::{
    SiteViewError, SiteViewsUseCase,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    view_response(data.site_views.home().await)
}

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    view_response(data.site_views.about().await)
}

fn view_response(result: Result<Value, SiteViewError>) -> HttpResponse {
    match result {
        Ok(view) => ApiResponse::success(view),
        Err(SiteViewError::QueryFailed(e)) => {
            error!("Failed to build view: {}", e);
            ApiResponse::internal_error()
        }
    }
}
