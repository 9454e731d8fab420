pub mod api;
mod config;
pub mod health;
pub mod modules;
mod seed;
pub mod shared;

use crate::config::{AdminPassword, AppConfig};
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::token_blacklist_memory::InMemoryTokenBlacklist;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::use_cases::{
    login_admin::{LoginAdminService, LoginAdminUseCase},
    logout_admin::{LogoutAdminService, LogoutAdminUseCase},
    resolve_session::{ResolveSessionService, ResolveSessionUseCase},
};
use crate::modules::auth::{admin_gate, AdminCredential};
use crate::modules::award::adapter::outgoing::award_repository_sqlite::AwardRepositorySqlite;
use crate::modules::award::Award;
use crate::modules::content::adapter::outgoing::view_cache::ViewCache;
use crate::modules::content::application::ports::outgoing::view_invalidator::ViewInvalidator;
use crate::modules::content::application::services::content_service::ContentService;
use crate::modules::content::ContentUseCases;
use crate::modules::dashboard::adapter::outgoing::dashboard_query_sqlite::DashboardQuerySqlite;
use crate::modules::dashboard::application::ports::incoming::get_dashboard::GetDashboardUseCase;
use crate::modules::dashboard::application::services::get_dashboard_service::GetDashboardService;
use crate::modules::education::adapter::outgoing::education_repository_sqlite::EducationRepositorySqlite;
use crate::modules::education::Education;
use crate::modules::experience::adapter::outgoing::experience_repository_sqlite::ExperienceRepositorySqlite;
use crate::modules::experience::Experience;
use crate::modules::message::adapter::outgoing::message_repository_sqlite::MessageRepositorySqlite;
use crate::modules::message::application::services::mark_message_service::MarkMessageService;
use crate::modules::message::MessageUseCases;
use crate::modules::profile::adapter::outgoing::profile_repository_sqlite::ProfileRepositorySqlite;
use crate::modules::profile::ProfileUseCases;
use crate::modules::project::adapter::outgoing::project_repository_sqlite::ProjectRepositorySqlite;
use crate::modules::project::application::services::get_project_by_slug_service::GetProjectBySlugService;
use crate::modules::project::ProjectUseCases;
use crate::modules::site::application::ports::incoming::site_views::SiteViewsUseCase;
use crate::modules::site::application::services::site_views_service::{
    SiteSources, SiteViewsService,
};
use crate::modules::skill::adapter::outgoing::skill_repository_sqlite::SkillRepositorySqlite;
use crate::modules::skill::Skill;
use crate::shared::api::{custom_form_config, custom_json_config, custom_query_config};

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::{anyhow, bail, Context};
use argon2::password_hash::PasswordHash;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub experiences: ContentUseCases<Experience>,
    pub projects: ProjectUseCases,
    pub education: ContentUseCases<Education>,
    pub skills: ContentUseCases<Skill>,
    pub awards: ContentUseCases<Award>,
    pub messages: MessageUseCases,
    pub dashboard: Arc<dyn GetDashboardUseCase>,
    pub site_views: Arc<dyn SiteViewsUseCase>,
    pub login_admin: Arc<dyn LoginAdminUseCase>,
    pub logout_admin: Arc<dyn LogoutAdminUseCase>,
    pub sessions: Arc<dyn ResolveSessionUseCase>,
    /// Mark the session cookie `Secure` (production only)
    pub cookie_secure: bool,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(database_url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    if let Some(path) = database_url
        .strip_prefix("sqlite://")
        .and_then(|rest| rest.split('?').next())
    {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
    }

    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    conn.execute_unprepared("PRAGMA journal_mode=WAL;")
        .await
        .context("Failed to enable WAL journal mode")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(conn))
}

/// Argon2 PHC string for the configured admin password.
async fn admin_password_hash(
    password: &AdminPassword,
    hasher: &dyn PasswordHasher,
) -> anyhow::Result<String> {
    match password {
        AdminPassword::Hash(hash) => {
            PasswordHash::new(hash)
                .map_err(|e| anyhow!("ADMIN_PASSWORD_HASH is not a valid PHC string: {e}"))?;
            Ok(hash.clone())
        }
        AdminPassword::Plain(plain) => hasher
            .hash_password(plain)
            .await
            .map_err(|e| anyhow!("Failed to hash ADMIN_PASSWORD: {e}")),
    }
}

fn build_state(
    db: Arc<DatabaseConnection>,
    config: &AppConfig,
    hasher: Arc<dyn PasswordHasher>,
    password_hash: String,
) -> AppState {
    let cache = Arc::new(ViewCache::new());
    let invalidator: Arc<dyn ViewInvalidator> = cache.clone();

    // Content
    let profile = ProfileUseCases::from_service(ContentService::new(
        ProfileRepositorySqlite::new(Arc::clone(&db)),
        invalidator.clone(),
    ));
    let experiences: ContentUseCases<Experience> = ContentUseCases::from_service(
        ContentService::new(ExperienceRepositorySqlite::new(Arc::clone(&db)), invalidator.clone()),
    );
    let education: ContentUseCases<Education> = ContentUseCases::from_service(
        ContentService::new(EducationRepositorySqlite::new(Arc::clone(&db)), invalidator.clone()),
    );
    let skills: ContentUseCases<Skill> = ContentUseCases::from_service(ContentService::new(
        SkillRepositorySqlite::new(Arc::clone(&db)),
        invalidator.clone(),
    ));
    let awards: ContentUseCases<Award> = ContentUseCases::from_service(ContentService::new(
        AwardRepositorySqlite::new(Arc::clone(&db)),
        invalidator.clone(),
    ));

    let project_repo = ProjectRepositorySqlite::new(Arc::clone(&db));
    let projects = ProjectUseCases {
        content: ContentUseCases::from_service(ContentService::new(
            project_repo.clone(),
            invalidator.clone(),
        )),
        get_by_slug: Arc::new(GetProjectBySlugService::new(project_repo)),
    };

    let message_repo = MessageRepositorySqlite::new(Arc::clone(&db));
    let messages = MessageUseCases::new(
        ContentService::new(message_repo.clone(), invalidator.clone()),
        Arc::new(MarkMessageService::new(message_repo, invalidator)),
    );

    // Composed views
    let site_views = SiteViewsService::new(
        SiteSources {
            profile: profile.list.clone(),
            experiences: experiences.list.clone(),
            projects: projects.content.list.clone(),
            education: education.list.clone(),
            skills: skills.list.clone(),
            awards: awards.list.clone(),
        },
        cache,
    );
    let dashboard = GetDashboardService::new(DashboardQuerySqlite::new(db));

    // Auth
    let tokens: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let blacklist: Arc<dyn TokenBlacklist> = Arc::new(InMemoryTokenBlacklist::new());
    let login_admin = LoginAdminService::new(
        AdminCredential {
            email: config.admin_email.clone(),
            password_hash,
        },
        hasher,
        tokens.clone(),
    );
    let logout_admin = LogoutAdminService::new(tokens.clone(), blacklist.clone());
    let sessions = ResolveSessionService::new(tokens, blacklist);

    AppState {
        profile,
        experiences,
        projects,
        education,
        skills,
        awards,
        messages,
        dashboard: Arc::new(dashboard),
        site_views: Arc::new(site_views),
        login_admin: Arc::new(login_admin),
        logout_admin: Arc::new(logout_admin),
        sessions: Arc::new(sessions),
        cookie_secure: config.is_production(),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let command = std::env::args().nth(1);
    let config = AppConfig::from_env()?;
    let db = connect_database(&config.database_url).await?;

    match command.as_deref() {
        None => {}
        Some("seed") => {
            info!("Starting seeding process...");
            seed::run(&db).await?;
            return Ok(());
        }
        Some(other) => bail!("Unknown command '{other}', expected 'seed' or no argument"),
    }

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
    let password_hash = admin_password_hash(&config.admin_password, hasher.as_ref()).await?;
    let state = web::Data::new(build_state(Arc::clone(&db), &config, hasher, password_hash));

    let server_url = config.server_url();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .app_data(custom_query_config())
            .wrap(from_fn(admin_gate))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::*;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(auth::adapter::incoming::web::routes::logout_admin_handler);
    cfg.service(auth::adapter::incoming::web::routes::get_session_handler);
    // Composed views
    cfg.service(site::adapter::incoming::web::routes::get_home_handler);
    cfg.service(site::adapter::incoming::web::routes::get_about_handler);
    cfg.service(dashboard::adapter::incoming::web::routes::get_dashboard_handler);
    // Profile
    cfg.service(profile::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(profile::adapter::incoming::web::routes::update_profile_handler);
    // Experiences
    cfg.service(experience::adapter::incoming::web::routes::get_public_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::delete_experience_handler);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_public_project_handler);
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Education
    cfg.service(education::adapter::incoming::web::routes::get_public_education_handler);
    cfg.service(education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(education::adapter::incoming::web::routes::create_education_handler);
    cfg.service(education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(education::adapter::incoming::web::routes::delete_education_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::get_public_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::delete_skill_handler);
    // Awards
    cfg.service(award::adapter::incoming::web::routes::get_public_awards_handler);
    cfg.service(award::adapter::incoming::web::routes::get_awards_handler);
    cfg.service(award::adapter::incoming::web::routes::create_award_handler);
    cfg.service(award::adapter::incoming::web::routes::update_award_handler);
    cfg.service(award::adapter::incoming::web::routes::delete_award_handler);
    // Messages
    cfg.service(message::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(message::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(message::adapter::incoming::web::routes::mark_message_read_handler);
    cfg.service(message::adapter::incoming::web::routes::mark_message_unread_handler);
    cfg.service(message::adapter::incoming::web::routes::delete_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    AppConfig::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = start() {
        error!(error = %format!("{e:#}"), "Fatal error");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod app_tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::SESSION_COOKIE;
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;
    use crate::tests::support::db::migrated_sqlite;
    use actix_web::{http::header, test};
    use async_trait::async_trait;

    /// Plaintext "hasher" so end-to-end tests skip Argon2 work.
    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("plain:{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("plain:{password}"))
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            admin_email: "admin@example.com".to_string(),
            admin_password: AdminPassword::Plain("pw".to_string()),
            jwt: JwtConfig {
                secret_key: "test_secret_key_with_32_characters".to_string(),
                issuer: "portfolio".to_string(),
                access_token_expiry: 600,
            },
        }
    }

    macro_rules! full_app {
        ($db:expr) => {{
            let state = build_state(
                $db,
                &config(),
                Arc::new(PlainHasher),
                "plain:pw".to_string(),
            );
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(custom_json_config())
                    .app_data(custom_form_config())
                    .app_data(custom_query_config())
                    .wrap(from_fn(admin_gate))
                    .configure(init_routes),
            )
            .await
        }};
    }

    fn session_cookie_value<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
        resp.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .expect("session cookie set")
    }

    #[actix_web::test]
    async fn test_admin_flow_end_to_end() {
        let db = migrated_sqlite().await;
        let app = full_app!(db);

        // Anonymous admin access is redirected
        let req = test::TestRequest::get().uri("/admin/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);

        // Wrong password stays anonymous
        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "email": "admin@example.com", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        // Correct pair opens a session
        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "email": "admin@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let token = session_cookie_value(&resp);
        let cookie = actix_web::cookie::Cookie::new(SESSION_COOKIE, token.clone());

        // Create a project through the gate
        let req = test::TestRequest::post()
            .uri("/admin/projects")
            .cookie(cookie.clone())
            .set_form([
                ("title", "CMS"),
                ("slug", "cms"),
                ("techStack", "Rust, SQLite"),
                ("featured", "on"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        // Public list and home view see it
        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["slug"], "cms");
        assert_eq!(body["data"][0]["techStack"][1], "SQLite");

        let req = test::TestRequest::get().uri("/api/home").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["featuredProjects"][0]["slug"], "cms");

        // Logout revokes the token
        let req = test::TestRequest::post()
            .uri("/admin/logout")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri("/admin/dashboard")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 303);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/admin/login"
        );
    }

    #[actix_web::test]
    async fn test_cached_views_follow_mutations() {
        let db = migrated_sqlite().await;
        let app = full_app!(db);

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["data"]["awards"].as_array().unwrap().is_empty());

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "email": "admin@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let token = session_cookie_value(&resp);

        let req = test::TestRequest::post()
            .uri("/admin/awards")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_form([("title", "Best Talk"), ("type", "AWARD")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::get().uri("/api/about").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["awards"][0]["title"], "Best Talk");
    }

    #[actix_web::test]
    async fn test_public_message_reaches_admin_inbox() {
        let db = migrated_sqlite().await;
        let app = full_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/messages")
            .set_form([
                ("name", "Sam"),
                ("email", "sam@example.com"),
                ("message", "Hello there"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/admin/login")
            .set_json(serde_json::json!({ "email": "admin@example.com", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let token = session_cookie_value(&resp);

        let req = test::TestRequest::get()
            .uri("/admin/messages?unread=true")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["name"], "Sam");
        assert_eq!(body["data"][0]["isRead"], false);

        let req = test::TestRequest::get()
            .uri("/admin/dashboard")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["messages"], 1);
        assert_eq!(body["data"]["unread"], 1);
    }

    #[tokio::test]
    async fn test_admin_password_hash_rejects_garbage_phc() {
        let result =
            admin_password_hash(&AdminPassword::Hash("not-a-hash".to_string()), &PlainHasher)
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_admin_password_hash_from_plain() {
        let hash = admin_password_hash(&AdminPassword::Plain("pw".to_string()), &PlainHasher)
            .await
            .unwrap();
        assert_eq!(hash, "plain:pw");
    }
}
