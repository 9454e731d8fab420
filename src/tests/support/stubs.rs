use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::modules::auth::application::domain::entities::AuthState;
use crate::modules::auth::application::use_cases::login_admin::{
    AdminSession, LoginAdminUseCase, LoginError, LoginRequest,
};
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::auth::application::use_cases::resolve_session::ResolveSessionUseCase;
use crate::modules::content::application::domain::resource::Resource;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentMutationError, CreateContentUseCase, DeleteContentUseCase, ListContentError,
    ListContentUseCase, MutationReceipt, UpdateContentUseCase,
};
use crate::modules::content::ContentUseCases;
use crate::modules::dashboard::application::ports::incoming::get_dashboard::{
    GetDashboardError, GetDashboardUseCase,
};
use crate::modules::dashboard::DashboardStats;
use crate::modules::message::application::ports::incoming::mark_message::MarkMessageUseCase;
use crate::modules::message::{Message, MessageUseCases};
use crate::modules::profile::{Profile, ProfileUseCases};
use crate::modules::project::application::ports::incoming::get_project_by_slug::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::project::Project;
use crate::modules::site::application::ports::incoming::site_views::{
    SiteViewError, SiteViewsUseCase,
};

// ============================================================================
// Content
// ============================================================================

/// In-memory stand-in for every content use case of one resource type.
///
/// Clones share the recorded drafts, so a test can hand one clone to the app
/// and inspect what the handler passed through with the other.
pub struct StubContentUseCase<R: Resource> {
    rows: Vec<R>,
    list_fails: bool,
    mutation_error: Option<ContentMutationError>,
    drafts: Arc<Mutex<Vec<R::Draft>>>,
}

impl<R: Resource> Clone for StubContentUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            list_fails: self.list_fails,
            mutation_error: self.mutation_error.clone(),
            drafts: Arc::clone(&self.drafts),
        }
    }
}

impl<R: Resource> Default for StubContentUseCase<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            list_fails: false,
            mutation_error: None,
            drafts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<R: Resource> StubContentUseCase<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn failing_with(mut self, error: ContentMutationError) -> Self {
        self.mutation_error = Some(error);
        self
    }

    /// Drafts received by create and update, in call order.
    pub fn drafts(&self) -> Vec<R::Draft> {
        self.drafts.lock().unwrap().clone()
    }

    fn outcome(&self, id: Option<i32>, verb: &str) -> Result<MutationReceipt, ContentMutationError> {
        match &self.mutation_error {
            Some(e) => Err(e.clone()),
            None => Ok(MutationReceipt::new(
                id,
                format!("{} {} successfully", R::LABEL, verb),
            )),
        }
    }

    pub fn into_list(self) -> Arc<dyn ListContentUseCase<R>> {
        Arc::new(self)
    }

    pub fn into_use_cases(self) -> ContentUseCases<R> {
        let stub = Arc::new(self);

        ContentUseCases {
            create: stub.clone(),
            update: stub.clone(),
            delete: stub.clone(),
            list: stub,
        }
    }
}

impl StubContentUseCase<Profile> {
    pub fn into_profile_use_cases(self) -> ProfileUseCases {
        let stub = Arc::new(self);

        ProfileUseCases {
            list: stub.clone(),
            update: stub,
        }
    }
}

impl StubContentUseCase<Message> {
    pub fn into_message_use_cases(self, mark: StubMarkMessage) -> MessageUseCases {
        let stub = Arc::new(self);

        MessageUseCases {
            create: stub.clone(),
            delete: stub.clone(),
            list: stub,
            mark: Arc::new(mark),
        }
    }
}

#[async_trait]
impl<R: Resource> CreateContentUseCase<R> for StubContentUseCase<R> {
    async fn execute(&self, draft: R::Draft) -> Result<MutationReceipt, ContentMutationError> {
        let mut drafts = self.drafts.lock().unwrap();
        drafts.push(draft);
        let id = drafts.len() as i32;
        drop(drafts);

        self.outcome(Some(id), "created")
    }
}

#[async_trait]
impl<R: Resource> UpdateContentUseCase<R> for StubContentUseCase<R> {
    async fn execute(
        &self,
        id: i32,
        draft: R::Draft,
    ) -> Result<MutationReceipt, ContentMutationError> {
        self.drafts.lock().unwrap().push(draft);
        self.outcome(Some(id), "updated")
    }
}

#[async_trait]
impl<R: Resource> DeleteContentUseCase<R> for StubContentUseCase<R> {
    async fn execute(&self, _id: i32) -> Result<MutationReceipt, ContentMutationError> {
        self.outcome(None, "deleted")
    }
}

#[async_trait]
impl<R: Resource> ListContentUseCase<R> for StubContentUseCase<R> {
    async fn execute(&self, _filter: &R::Filter) -> Result<Vec<R>, ListContentError> {
        if self.list_fails {
            return Err(ListContentError::QueryFailed(
                R::KIND.as_str(),
                "stubbed failure".to_string(),
            ));
        }
        Ok(self.rows.clone())
    }
}

// ============================================================================
// Messages
// ============================================================================

pub struct StubMarkMessage {
    error: Option<ContentMutationError>,
}

impl StubMarkMessage {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failing(error: ContentMutationError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl MarkMessageUseCase for StubMarkMessage {
    async fn execute(&self, id: i32, read: bool) -> Result<MutationReceipt, ContentMutationError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        let message = if read {
            "Message marked as read"
        } else {
            "Message marked as unread"
        };
        Ok(MutationReceipt::new(Some(id), message))
    }
}

// ============================================================================
// Projects
// ============================================================================

pub struct StubGetProjectBySlug {
    result: Result<Project, GetProjectBySlugError>,
}

impl StubGetProjectBySlug {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn failing(error: GetProjectBySlugError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlug {
    async fn execute(&self, _slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.result.clone()
    }
}

// ============================================================================
// Site views
// ============================================================================

pub struct StubSiteViews {
    home: Value,
    about: Value,
    projects: Value,
    fails: bool,
}

impl Default for StubSiteViews {
    fn default() -> Self {
        Self {
            home: json!({}),
            about: json!({}),
            projects: json!([]),
            fails: false,
        }
    }
}

impl StubSiteViews {
    pub fn failing() -> Self {
        Self {
            fails: true,
            ..Self::default()
        }
    }

    pub fn with_home(mut self, home: Value) -> Self {
        self.home = home;
        self
    }

    pub fn with_projects(mut self, projects: Value) -> Self {
        self.projects = projects;
        self
    }

    fn view(&self, value: &Value) -> Result<Value, SiteViewError> {
        if self.fails {
            return Err(SiteViewError::QueryFailed("stubbed failure".to_string()));
        }
        Ok(value.clone())
    }
}

#[async_trait]
impl SiteViewsUseCase for StubSiteViews {
    async fn home(&self) -> Result<Value, SiteViewError> {
        self.view(&self.home)
    }

    async fn about(&self) -> Result<Value, SiteViewError> {
        self.view(&self.about)
    }

    async fn projects(&self) -> Result<Value, SiteViewError> {
        self.view(&self.projects)
    }
}

// ============================================================================
// Dashboard
// ============================================================================

pub struct StubDashboard {
    stats: Option<DashboardStats>,
}

impl StubDashboard {
    pub fn ok(stats: DashboardStats) -> Self {
        Self { stats: Some(stats) }
    }

    pub fn failing() -> Self {
        Self { stats: None }
    }
}

#[async_trait]
impl GetDashboardUseCase for StubDashboard {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardError> {
        self.stats
            .clone()
            .ok_or_else(|| GetDashboardError::QueryFailed("stubbed failure".to_string()))
    }
}

// ============================================================================
// Auth
// ============================================================================

pub struct StubLogin {
    result: Result<AdminSession, LoginError>,
}

impl StubLogin {
    pub fn succeeding(token: &str) -> Self {
        Self {
            result: Ok(AdminSession {
                access_token: token.to_string(),
                expires_in: 3600,
            }),
        }
    }

    pub fn failing(error: LoginError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl LoginAdminUseCase for StubLogin {
    async fn execute(&self, _request: LoginRequest) -> Result<AdminSession, LoginError> {
        self.result.clone()
    }
}

/// Records the token of every logout call.
#[derive(Clone, Default)]
pub struct StubLogout {
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl StubLogout {
    pub fn revoked(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogoutAdminUseCase for StubLogout {
    async fn execute(&self, token: Option<&str>) {
        self.calls.lock().unwrap().push(token.map(str::to_string));
    }
}

/// Treats exactly one token as a live admin session.
pub struct StubSessions {
    admin_token: Option<String>,
}

impl StubSessions {
    pub fn anonymous() -> Self {
        Self { admin_token: None }
    }

    pub fn accepting(token: &str) -> Self {
        Self {
            admin_token: Some(token.to_string()),
        }
    }
}

#[async_trait]
impl ResolveSessionUseCase for StubSessions {
    async fn execute(&self, token: Option<&str>) -> AuthState {
        match (token, self.admin_token.as_deref()) {
            (Some(given), Some(expected)) if given == expected => AuthState::Admin,
            _ => AuthState::Anonymous,
        }
    }
}
