//! Glue between actix handlers and the generic content use cases.
//!
//! Per-resource route modules stay thin: they pick the use case from
//! `AppState` and delegate the validation/response mapping to these helpers.

use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::modules::content::application::domain::resource::Resource;
use crate::modules::content::application::domain::validation::{FormInput, FromForm};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentMutationError, CreateContentUseCase, DeleteContentUseCase, ListContentError,
    ListContentUseCase, UpdateContentUseCase,
};
use crate::shared::api::ApiResponse;

pub async fn create_response<R: Resource>(
    use_case: &dyn CreateContentUseCase<R>,
    form: FormInput,
) -> HttpResponse {
    let draft = match R::Draft::from_form(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!(kind = %R::KIND, %errors, "Rejected create form");
            return ApiResponse::validation_failed(&errors);
        }
    };

    match use_case.execute(draft).await {
        Ok(receipt) => ApiResponse::created(receipt),
        Err(e) => map_mutation_error(e),
    }
}

pub async fn update_response<R: Resource>(
    use_case: &dyn UpdateContentUseCase<R>,
    id: i32,
    form: FormInput,
) -> HttpResponse {
    let draft = match R::Draft::from_form(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!(kind = %R::KIND, id, %errors, "Rejected update form");
            return ApiResponse::validation_failed(&errors);
        }
    };

    match use_case.execute(id, draft).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(e) => map_mutation_error(e),
    }
}

pub async fn delete_response<R: Resource>(
    use_case: &dyn DeleteContentUseCase<R>,
    id: i32,
) -> HttpResponse {
    match use_case.execute(id).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(e) => map_mutation_error(e),
    }
}

pub async fn list_response<R: Resource>(
    use_case: &dyn ListContentUseCase<R>,
    filter: &R::Filter,
) -> HttpResponse {
    match use_case.execute(filter).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => map_list_error(e),
    }
}

pub fn map_mutation_error(e: ContentMutationError) -> HttpResponse {
    match e {
        ContentMutationError::NotFound(label) => {
            ApiResponse::not_found("NOT_FOUND", &format!("{label} not found"))
        }
        ContentMutationError::StoreFailure(message) => {
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "MUTATION_FAILED", &message)
        }
    }
}

pub fn map_list_error(e: ListContentError) -> HttpResponse {
    error!(error = %e, "List query failed");
    ApiResponse::internal_error()
}
