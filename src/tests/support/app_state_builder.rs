use crate::modules::auth::application::use_cases::login_admin::{LoginAdminUseCase, LoginError};
use crate::modules::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::modules::auth::application::use_cases::resolve_session::ResolveSessionUseCase;
use crate::modules::award::Award;
use crate::modules::content::ContentUseCases;
use crate::modules::dashboard::application::ports::incoming::get_dashboard::GetDashboardUseCase;
use crate::modules::dashboard::DashboardStats;
use crate::modules::education::Education;
use crate::modules::experience::Experience;
use crate::modules::message::{Message, MessageUseCases};
use crate::modules::profile::{Profile, ProfileUseCases};
use crate::modules::project::application::ports::incoming::get_project_by_slug::{
    GetProjectBySlugError, GetProjectBySlugUseCase,
};
use crate::modules::project::{Project, ProjectUseCases};
use crate::modules::site::application::ports::incoming::site_views::SiteViewsUseCase;
use crate::modules::skill::Skill;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an [`AppState`] where every use case is an inert stub unless a
/// test swaps one in.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    experiences: ContentUseCases<Experience>,
    projects: ProjectUseCases,
    education: ContentUseCases<Education>,
    skills: ContentUseCases<Skill>,
    awards: ContentUseCases<Award>,
    messages: MessageUseCases,
    dashboard: Arc<dyn GetDashboardUseCase>,
    site_views: Arc<dyn SiteViewsUseCase>,
    login_admin: Arc<dyn LoginAdminUseCase>,
    logout_admin: Arc<dyn LogoutAdminUseCase>,
    sessions: Arc<dyn ResolveSessionUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: StubContentUseCase::<Profile>::new().into_profile_use_cases(),
            experiences: StubContentUseCase::<Experience>::new().into_use_cases(),
            projects: ProjectUseCases {
                content: StubContentUseCase::<Project>::new().into_use_cases(),
                get_by_slug: Arc::new(StubGetProjectBySlug::failing(
                    GetProjectBySlugError::NotFound,
                )),
            },
            education: StubContentUseCase::<Education>::new().into_use_cases(),
            skills: StubContentUseCase::<Skill>::new().into_use_cases(),
            awards: StubContentUseCase::<Award>::new().into_use_cases(),
            messages: StubContentUseCase::<Message>::new()
                .into_message_use_cases(StubMarkMessage::ok()),
            dashboard: Arc::new(StubDashboard::ok(DashboardStats::default())),
            site_views: Arc::new(StubSiteViews::default()),
            login_admin: Arc::new(StubLogin::failing(LoginError::InvalidCredentials)),
            logout_admin: Arc::new(StubLogout::default()),
            sessions: Arc::new(StubSessions::anonymous()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_profile(mut self, use_cases: ProfileUseCases) -> Self {
        self.profile = use_cases;
        self
    }

    pub fn with_experiences(mut self, use_cases: ContentUseCases<Experience>) -> Self {
        self.experiences = use_cases;
        self
    }

    pub fn with_project_content(mut self, use_cases: ContentUseCases<Project>) -> Self {
        self.projects.content = use_cases;
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: impl GetProjectBySlugUseCase + 'static,
    ) -> Self {
        self.projects.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_education(mut self, use_cases: ContentUseCases<Education>) -> Self {
        self.education = use_cases;
        self
    }

    pub fn with_skills(mut self, use_cases: ContentUseCases<Skill>) -> Self {
        self.skills = use_cases;
        self
    }

    pub fn with_awards(mut self, use_cases: ContentUseCases<Award>) -> Self {
        self.awards = use_cases;
        self
    }

    pub fn with_messages(mut self, use_cases: MessageUseCases) -> Self {
        self.messages = use_cases;
        self
    }

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn with_site_views(mut self, uc: impl SiteViewsUseCase + 'static) -> Self {
        self.site_views = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: impl LogoutAdminUseCase + 'static) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn with_sessions(mut self, uc: impl ResolveSessionUseCase + 'static) -> Self {
        self.sessions = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            experiences: self.experiences,
            projects: self.projects,
            education: self.education,
            skills: self.skills,
            awards: self.awards,
            messages: self.messages,
            dashboard: self.dashboard,
            site_views: self.site_views,
            login_admin: self.login_admin,
            logout_admin: self.logout_admin,
            sessions: self.sessions,
            cookie_secure: false,
        })
    }
}
