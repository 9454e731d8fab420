use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, map_mutation_error,
};
use crate::modules::content::FormInput;
use crate::modules::message::application::domain::entities::MessageFilter;
use crate::modules::message::application::ports::incoming::mark_message::MarkMessageUseCase;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub unread: Option<bool>,
}

// ──── Public ────

#[post("/api/messages")]
pub async fn submit_message_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.messages.create.as_ref(), form.into_inner()).await
}

// ──── Admin ────

#[get("/admin/messages")]
pub async fn get_messages_handler(
    query: web::Query<MessageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = MessageFilter {
        unread: query.unread,
    };
    list_response(data.messages.list.as_ref(), &filter).await
}

#[post("/admin/messages/{id}/read")]
pub async fn mark_message_read_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    mark(&data, path.into_inner(), true).await
}

#[post("/admin/messages/{id}/unread")]
pub async fn mark_message_unread_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    mark(&data, path.into_inner(), false).await
}

#[delete("/admin/messages/{id}")]
pub async fn delete_message_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.messages.delete.as_ref(), path.into_inner()).await
}

async fn mark(data: &AppState, id: i32, read: bool) -> HttpResponse {
    match data.messages.mark.execute(id, read).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(e) => map_mutation_error(e),
    }
}
