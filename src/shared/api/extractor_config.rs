// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, JsonConfig, QueryConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Admin forms are posted as `application/x-www-form-urlencoded`.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}
