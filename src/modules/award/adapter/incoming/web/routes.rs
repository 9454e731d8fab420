use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;

use crate::modules::award::application::domain::entities::{AwardFilter, AwardKind};
use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, update_response,
};
use crate::modules::content::FormInput;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AwardQuery {
    #[serde(rename = "type")]
    pub kind: Option<AwardKind>,
}

impl From<AwardQuery> for AwardFilter {
    fn from(query: AwardQuery) -> Self {
        Self { kind: query.kind }
    }
}

#[get("/api/awards")]
pub async fn get_public_awards_handler(
    query: web::Query<AwardQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = AwardFilter::from(query.into_inner());
    list_response(data.awards.list.as_ref(), &filter).await
}

#[get("/admin/awards")]
pub async fn get_awards_handler(
    query: web::Query<AwardQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = AwardFilter::from(query.into_inner());
    list_response(data.awards.list.as_ref(), &filter).await
}

#[post("/admin/awards")]
pub async fn create_award_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.awards.create.as_ref(), form.into_inner()).await
}

#[put("/admin/awards/{id}")]
pub async fn update_award_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.awards.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}

#[delete("/admin/awards/{id}")]
pub async fn delete_award_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.awards.delete.as_ref(), path.into_inner()).await
}
