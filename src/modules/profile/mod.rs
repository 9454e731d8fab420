pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod profile_repository_sqlite;
        pub mod sea_orm_entity;
    }
}

pub mod application {
    pub mod profile_use_cases;

    pub mod domain {
        pub mod entities;
    }
}

pub use application::domain::entities::{Profile, ProfileDraft};
pub use application::profile_use_cases::ProfileUseCases;
