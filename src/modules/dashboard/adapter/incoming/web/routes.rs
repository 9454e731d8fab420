use actix_web::{get, web, Responder};

use crate::modules::dashboard::application::ports::incoming::get_dashboard::GetDashboardUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/admin/dashboard")]
pub async fn get_dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    match data.dashboard.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(_) => ApiResponse::internal_error(),
    }
}
