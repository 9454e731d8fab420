use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentUseCase, DeleteContentUseCase, ListContentUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    ContentReader, ContentWriter,
};
use crate::modules::content::application::services::content_service::ContentService;
use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::mark_message::MarkMessageUseCase;

/// Messages are created publicly and never edited, only flagged read/unread.
#[derive(Clone)]
pub struct MessageUseCases {
    pub create: Arc<dyn CreateContentUseCase<Message>>,
    pub delete: Arc<dyn DeleteContentUseCase<Message>>,
    pub list: Arc<dyn ListContentUseCase<Message>>,
    pub mark: Arc<dyn MarkMessageUseCase>,
}

impl MessageUseCases {
    pub fn new<Repo>(
        service: ContentService<Message, Repo>,
        mark: Arc<dyn MarkMessageUseCase>,
    ) -> Self
    where
        Repo: ContentReader<Message> + ContentWriter<Message> + 'static,
    {
        let service = Arc::new(service);

        Self {
            create: service.clone(),
            delete: service.clone(),
            list: service,
            mark,
        }
    }
}
