pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod award_repository_sqlite;
        pub mod sea_orm_entity;
    }
}

pub mod application {
    pub mod domain {
        pub mod entities;
    }
}

pub use application::domain::entities::{Award, AwardDraft, AwardFilter, AwardKind};
