use std::sync::Arc;

use crate::modules::content::application::domain::resource::Resource;
use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentUseCase, DeleteContentUseCase, ListContentUseCase, UpdateContentUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentEditor, ContentReader, ContentWriter,
};
use crate::modules::content::application::services::content_service::ContentService;

/// Full admin CRUD surface for one resource type.
pub struct ContentUseCases<R: Resource> {
    pub create: Arc<dyn CreateContentUseCase<R>>,
    pub update: Arc<dyn UpdateContentUseCase<R>>,
    pub delete: Arc<dyn DeleteContentUseCase<R>>,
    pub list: Arc<dyn ListContentUseCase<R>>,
}

impl<R: Resource> Clone for ContentUseCases<R> {
    fn clone(&self) -> Self {
        Self {
            create: Arc::clone(&self.create),
            update: Arc::clone(&self.update),
            delete: Arc::clone(&self.delete),
            list: Arc::clone(&self.list),
        }
    }
}

impl<R: Resource> ContentUseCases<R> {
    pub fn from_service<Repo>(service: ContentService<R, Repo>) -> Self
    where
        Repo: ContentReader<R> + ContentWriter<R> + ContentEditor<R> + 'static,
    {
        let service = Arc::new(service);

        Self {
            create: service.clone(),
            update: service.clone(),
            delete: service.clone(),
            list: service,
        }
    }
}
