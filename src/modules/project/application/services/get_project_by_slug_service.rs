use async_trait::async_trait;
use tracing::error;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::get_project_by_slug::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, slug: &str) -> Result<Project, GetProjectBySlugError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(GetProjectBySlugError::NotFound);
        }

        self.query
            .find_by_slug(slug)
            .await
            .map_err(|e| {
                error!(slug, error = %e, "Failed to look up project by slug");
                GetProjectBySlugError::QueryFailed(e.to_string())
            })?
            .ok_or(GetProjectBySlugError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::outgoing::content_repository::ContentRepositoryError;
    use chrono::Utc;

    struct MockProjectQuery {
        result: Result<Option<Project>, ContentRepositoryError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn find_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<Project>, ContentRepositoryError> {
            self.result.clone()
        }
    }

    fn sample_project() -> Project {
        Project {
            id: 1,
            title: "CMS".to_string(),
            slug: "cms".to_string(),
            brief: None,
            content: Some("# Hello".to_string()),
            tech_stack: vec!["Rust".to_string()],
            repo_url: None,
            demo_url: None,
            thumbnail_url: None,
            featured: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_found() {
        let service = GetProjectBySlugService::new(MockProjectQuery {
            result: Ok(Some(sample_project())),
        });

        let project = service.execute("cms").await.unwrap();
        assert_eq!(project.slug, "cms");
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let service = GetProjectBySlugService::new(MockProjectQuery { result: Ok(None) });

        assert_eq!(
            service.execute("nope").await.unwrap_err(),
            GetProjectBySlugError::NotFound
        );
    }

    #[tokio::test]
    async fn test_blank_slug_short_circuits() {
        let service = GetProjectBySlugService::new(MockProjectQuery {
            result: Err(ContentRepositoryError::DatabaseError("unreachable".to_string())),
        });

        assert_eq!(
            service.execute("   ").await.unwrap_err(),
            GetProjectBySlugError::NotFound
        );
    }

    #[tokio::test]
    async fn test_query_error() {
        let service = GetProjectBySlugService::new(MockProjectQuery {
            result: Err(ContentRepositoryError::DatabaseError("locked".to_string())),
        });

        assert!(matches!(
            service.execute("cms").await.unwrap_err(),
            GetProjectBySlugError::QueryFailed(_)
        ));
    }
}
