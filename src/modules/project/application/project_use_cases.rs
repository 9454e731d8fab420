use std::sync::Arc;

use crate::modules::content::ContentUseCases;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::get_project_by_slug::GetProjectBySlugUseCase;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub content: ContentUseCases<Project>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase>,
}
