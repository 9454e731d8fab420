use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;

use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, update_response,
};
use crate::modules::content::FormInput;
use crate::modules::experience::application::domain::entities::{ExperienceFilter, ExperienceKind};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ExperienceQuery {
    #[serde(rename = "type")]
    pub kind: Option<ExperienceKind>,
}

impl From<ExperienceQuery> for ExperienceFilter {
    fn from(query: ExperienceQuery) -> Self {
        Self { kind: query.kind }
    }
}

// ──── Public ────

#[get("/api/experiences")]
pub async fn get_public_experiences_handler(
    query: web::Query<ExperienceQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ExperienceFilter::from(query.into_inner());
    list_response(data.experiences.list.as_ref(), &filter).await
}

// ──── Admin ────

#[get("/admin/experiences")]
pub async fn get_experiences_handler(
    query: web::Query<ExperienceQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = ExperienceFilter::from(query.into_inner());
    list_response(data.experiences.list.as_ref(), &filter).await
}

#[post("/admin/experiences")]
pub async fn create_experience_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.experiences.create.as_ref(), form.into_inner()).await
}

#[put("/admin/experiences/{id}")]
pub async fn update_experience_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.experiences.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}

#[delete("/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.experiences.delete.as_ref(), path.into_inner()).await
}
