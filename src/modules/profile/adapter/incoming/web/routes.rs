use actix_web::{get, put, web, HttpResponse, Responder};

use crate::modules::content::adapter::incoming::web::responses::{map_list_error, update_response};
use crate::modules::content::application::ports::incoming::use_cases::ListContentUseCase;
use crate::modules::content::FormInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The first profile row, or `null` before the database is seeded.
async fn current_profile(data: &AppState) -> HttpResponse {
    match data.profile.list.execute(&()).await {
        Ok(rows) => ApiResponse::success(rows.into_iter().next()),
        Err(e) => map_list_error(e),
    }
}

#[get("/api/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    current_profile(&data).await
}

#[get("/admin/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    current_profile(&data).await
}

#[put("/admin/profile/{id}")]
pub async fn update_profile_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.profile.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}
