use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    ListContentUseCase, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader,
};
use crate::modules::content::application::services::content_service::ContentService;
use crate::modules::profile::application::domain::entities::Profile;

/// The profile row is seeded, so the admin surface is read + update only.
#[derive(Clone)]
pub struct ProfileUseCases {
    pub list: Arc<dyn ListContentUseCase<Profile>>,
    pub update: Arc<dyn UpdateContentUseCase<Profile>>,
}

impl ProfileUseCases {
    pub fn from_service<Repo>(service: ContentService<Profile, Repo>) -> Self
    where
        Repo: ContentReader<Profile> + ContentEditor<Profile> + 'static,
    {
        let service = Arc::new(service);

        Self {
            list: service.clone(),
            update: service,
        }
    }
}
