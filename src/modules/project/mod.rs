pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod project_repository_sqlite;
        pub mod sea_orm_entity;
    }
}

pub mod application {
    pub mod project_use_cases;

    pub mod domain {
        pub mod entities;
    }
    pub mod ports {
        pub mod incoming {
            pub mod get_project_by_slug;
        }
        pub mod outgoing {
            pub mod project_query;
        }
    }
    pub mod services {
        pub mod get_project_by_slug_service;
    }
}

pub use application::domain::entities::{Project, ProjectDraft, ProjectFilter};
pub use application::project_use_cases::ProjectUseCases;
