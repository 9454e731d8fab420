use actix_web::{delete, get, post, put, web, Responder};

use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, update_response,
};
use crate::modules::content::FormInput;
use crate::AppState;

#[get("/api/skills")]
pub async fn get_public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    list_response(data.skills.list.as_ref(), &()).await
}

#[get("/admin/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    list_response(data.skills.list.as_ref(), &()).await
}

#[post("/admin/skills")]
pub async fn create_skill_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.skills.create.as_ref(), form.into_inner()).await
}

#[put("/admin/skills/{id}")]
pub async fn update_skill_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.skills.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}

#[delete("/admin/skills/{id}")]
pub async fn delete_skill_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.skills.delete.as_ref(), path.into_inner()).await
}
