use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::content::adapter::incoming::web::responses::{
    create_response, delete_response, list_response, update_response,
};
use crate::modules::content::FormInput;
use crate::modules::project::application::domain::entities::ProjectFilter;
use crate::modules::project::application::ports::incoming::get_project_by_slug::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::site::application::ports::incoming::site_views::{
    SiteViewError, SiteViewsUseCase,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub featured: Option<bool>,
}

// ──── Public ────

/// Without a filter the full list is served from the cached projects view.
#[get("/api/projects")]
pub async fn get_public_projects_handler(
    query: web::Query<ProjectQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match query.featured {
        Some(featured) => {
            let filter = ProjectFilter {
                featured: Some(featured),
                limit: None,
            };
            list_response(data.projects.content.list.as_ref(), &filter).await
        }
        None => match data.site_views.projects().await {
            Ok(view) => ApiResponse::success(view),
            Err(SiteViewError::QueryFailed(e)) => {
                error!("Failed to build projects view: {}", e);
                ApiResponse::internal_error()
            }
        },
    }
}

#[get("/api/projects/{slug}")]
pub async fn get_public_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.projects.get_by_slug.execute(&slug).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => map_get_by_slug_error(e),
    }
}

// ──── Admin ────

#[get("/admin/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list_response(data.projects.content.list.as_ref(), &ProjectFilter::default()).await
}

#[post("/admin/projects")]
pub async fn create_project_handler(
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    create_response(data.projects.content.create.as_ref(), form.into_inner()).await
}

#[put("/admin/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<i32>,
    form: web::Form<FormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    update_response(
        data.projects.content.update.as_ref(),
        path.into_inner(),
        form.into_inner(),
    )
    .await
}

#[delete("/admin/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    delete_response(data.projects.content.delete.as_ref(), path.into_inner()).await
}

fn map_get_by_slug_error(e: GetProjectBySlugError) -> HttpResponse {
    match e {
        GetProjectBySlugError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        GetProjectBySlugError::QueryFailed(msg) => {
            error!("Failed to load project by slug: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::incoming::use_cases::ContentMutationError;
    use crate::modules::project::Project;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        StubContentUseCase, StubGetProjectBySlug, StubSiteViews,
    };
    use actix_web::{test, App};
    use chrono::Utc;
    use serde_json::json;

    fn sample_project(id: i32, slug: &str, featured: bool) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            slug: slug.to_string(),
            brief: None,
            content: Some("Body".to_string()),
            tech_stack: vec!["Rust".to_string()],
            repo_url: None,
            demo_url: None,
            thumbnail_url: None,
            featured,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_public_list_without_filter_uses_projects_view() {
        let views = StubSiteViews::default().with_projects(json!([{ "slug": "cached" }]));
        let app_state = TestAppStateBuilder::default().with_site_views(views).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], "cached");
    }

    #[actix_web::test]
    async fn test_public_list_featured_goes_to_list_use_case() {
        let stub = StubContentUseCase::<Project>::new()
            .with_rows(vec![sample_project(1, "cms", true)]);
        let app_state = TestAppStateBuilder::default()
            .with_project_content(stub.into_use_cases())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_projects_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects?featured=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["slug"], "cms");
        assert_eq!(body["data"][0]["techStack"][0], "Rust");
        assert_eq!(body["data"][0]["featured"], true);
    }

    #[actix_web::test]
    async fn test_get_by_slug_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(StubGetProjectBySlug::found(sample_project(
                3, "cms", false,
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_project_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects/cms").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["content"], "Body");
    }

    #[actix_web::test]
    async fn test_get_by_slug_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(StubGetProjectBySlug::failing(
                GetProjectBySlugError::NotFound,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_public_project_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_create_duplicate_slug_is_generic_failure() {
        let stub = StubContentUseCase::<Project>::new().failing_with(
            ContentMutationError::StoreFailure("Failed to create project".to_string()),
        );
        let app_state = TestAppStateBuilder::default()
            .with_project_content(stub.clone().into_use_cases())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/projects")
            .set_form([("title", "CMS"), ("slug", "cms"), ("featured", "on")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Failed to create project");
        assert_eq!(stub.drafts().len(), 1);
        assert!(stub.drafts()[0].featured);
    }

    #[actix_web::test]
    async fn test_create_without_slug_is_rejected() {
        let stub = StubContentUseCase::<Project>::new();
        let app_state = TestAppStateBuilder::default()
            .with_project_content(stub.clone().into_use_cases())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/projects")
            .set_form([("title", "CMS")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["fields"]["slug"][0], "Slug is required");
        assert!(stub.drafts().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_returns_receipt() {
        let stub = StubContentUseCase::<Project>::new();
        let app_state = TestAppStateBuilder::default()
            .with_project_content(stub.into_use_cases())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/admin/projects/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Project deleted successfully");
    }
}
