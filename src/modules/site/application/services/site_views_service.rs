use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::modules::award::{Award, AwardFilter};
use crate::modules::content::adapter::outgoing::view_cache::{
    ViewCache, ABOUT_VIEW, HOME_VIEW, PROJECTS_VIEW,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentError, ListContentUseCase,
};
use crate::modules::education::Education;
use crate::modules::experience::{Experience, ExperienceFilter, ExperienceKind};
use crate::modules::profile::Profile;
use crate::modules::project::{Project, ProjectFilter};
use crate::modules::site::application::ports::incoming::site_views::{
    SiteViewError, SiteViewsUseCase,
};
use crate::modules::skill::Skill;

const HOME_FEATURED_LIMIT: u64 = 4;

/// Read side of every record type, as needed to compose the public views.
#[derive(Clone)]
pub struct SiteSources {
    pub profile: Arc<dyn ListContentUseCase<Profile>>,
    pub experiences: Arc<dyn ListContentUseCase<Experience>>,
    pub projects: Arc<dyn ListContentUseCase<Project>>,
    pub education: Arc<dyn ListContentUseCase<Education>>,
    pub skills: Arc<dyn ListContentUseCase<Skill>>,
    pub awards: Arc<dyn ListContentUseCase<Award>>,
}

pub struct SiteViewsService {
    sources: SiteSources,
    cache: Arc<ViewCache>,
}

impl SiteViewsService {
    pub fn new(sources: SiteSources, cache: Arc<ViewCache>) -> Self {
        Self { sources, cache }
    }

    async fn first_profile(&self) -> Result<Option<Profile>, ListContentError> {
        Ok(self.sources.profile.execute(&()).await?.into_iter().next())
    }

    async fn compose_home(&self) -> Result<Value, ListContentError> {
        let profile = self.first_profile().await?;
        let featured = self
            .sources
            .projects
            .execute(&ProjectFilter::featured(HOME_FEATURED_LIMIT))
            .await?;
        let skills = self.sources.skills.execute(&()).await?;

        Ok(json!({
            "profile": profile,
            "featuredProjects": featured,
            "skills": skills,
        }))
    }

    async fn compose_about(&self) -> Result<Value, ListContentError> {
        let profile = self.first_profile().await?;
        let experiences = self
            .sources
            .experiences
            .execute(&ExperienceFilter::default())
            .await?;
        let education = self.sources.education.execute(&()).await?;
        let skills = self.sources.skills.execute(&()).await?;
        let awards = self.sources.awards.execute(&AwardFilter::default()).await?;

        let (work, activities): (Vec<Experience>, Vec<Experience>) = experiences
            .into_iter()
            .partition(|e| e.kind == ExperienceKind::Work);

        Ok(json!({
            "profile": profile,
            "workExperiences": work,
            "activities": activities,
            "education": education,
            "skills": skills,
            "awards": awards,
        }))
    }

    async fn compose_projects(&self) -> Result<Value, ListContentError> {
        let projects = self
            .sources
            .projects
            .execute(&ProjectFilter::default())
            .await?;

        Ok(json!(projects))
    }
}

fn to_view_error(e: ListContentError) -> SiteViewError {
    SiteViewError::QueryFailed(e.to_string())
}

#[async_trait]
impl SiteViewsUseCase for SiteViewsService {
    async fn home(&self) -> Result<Value, SiteViewError> {
        self.cache
            .get_or_compute(HOME_VIEW, || self.compose_home())
            .await
            .map_err(to_view_error)
    }

    async fn about(&self) -> Result<Value, SiteViewError> {
        self.cache
            .get_or_compute(ABOUT_VIEW, || self.compose_about())
            .await
            .map_err(to_view_error)
    }

    async fn projects(&self) -> Result<Value, SiteViewError> {
        self.cache
            .get_or_compute(PROJECTS_VIEW, || self.compose_projects())
            .await
            .map_err(to_view_error)
    }
}
