use actix_web::{delete, get, post, put, web, Responder};

use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, update_response,
};
use crate::modules::content::FormInput;
use crate::AppState;

#[get("/api/education")]
pub async fn get_public_education_handler(data: web::Data<AppState>) -> impl Responder {
    list_response(data.education.list.as_ref(), &()).await
}

#[get("/admin/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    list_response(data.education.list.as_ref(), &()).await
}

#[post("/admin/education")]
pub async fn create_education_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.education.create.as_ref(), form.into_inner()).await
}

#[put("/admin/education/{id}")]
pub async fn update_education_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.education.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}

#[delete("/admin/education/{id}")]
pub async fn delete_education_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.education.delete.as_ref(), path.into_inner()).await
}
