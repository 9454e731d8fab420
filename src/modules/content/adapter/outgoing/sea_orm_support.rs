//! Mapping helpers shared by the per-resource SQLite repositories.

use sea_orm::DbErr;

use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;

pub fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, ContentRepositoryError> {
    serde_json::to_value(data).map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

pub fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ContentRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

pub fn map_db_err(e: DbErr) -> ContentRepositoryError {
    let msg = e.to_string();

    if msg.to_lowercase().contains("unique constraint") {
        ContentRepositoryError::Conflict(msg)
    } else {
        ContentRepositoryError::DatabaseError(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err = map_db_err(DbErr::Custom(
            "UNIQUE constraint failed: projects.slug".to_string(),
        ));
        assert!(matches!(err, ContentRepositoryError::Conflict(_)));
    }

    #[test]
    fn test_other_errors_map_to_database_error() {
        let err = map_db_err(DbErr::Custom("database is locked".to_string()));
        assert!(matches!(err, ContentRepositoryError::DatabaseError(_)));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let result: Result<Vec<String>, _> = from_json(&serde_json::json!({ "a": 1 }));
        assert!(matches!(
            result,
            Err(ContentRepositoryError::SerializationError(_))
        ));
    }
}
