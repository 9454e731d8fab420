pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod message_repository_sqlite;
        pub mod sea_orm_entity;
    }
}

pub mod application {
    pub mod message_use_cases;

    pub mod domain {
        pub mod entities;
    }
    pub mod ports {
        pub mod incoming {
            pub mod mark_message;
        }
        pub mod outgoing {
            pub mod message_status;
        }
    }
    pub mod services {
        pub mod mark_message_service;
    }
}

pub use application::domain::entities::{Message, MessageDraft, MessageFilter};
pub use application::message_use_cases::MessageUseCases;
