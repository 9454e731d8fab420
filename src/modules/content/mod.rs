//! Shared machinery for the seven portfolio record types: the `Resource`
//! contract, form validation, the generic CRUD service and the view cache.

pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod responses;
        }
    }
    pub mod outgoing {
        pub mod sea_orm_support;
        pub mod view_cache;
    }
}

pub mod application {
    pub mod content_use_cases;

    pub mod domain {
        pub mod resource;
        pub mod validation;
    }

    pub mod ports {
        pub mod incoming {
            pub mod use_cases;
        }
        pub mod outgoing {
            pub mod content_repository;
            pub mod view_invalidator;
        }
    }

    pub mod services {
        pub mod content_service;
    }
}

pub use application::content_use_cases::ContentUseCases;
pub use application::domain::resource::{InvalidationEvent, Resource, ResourceKind};
pub use application::domain::validation::{FieldReader, FormInput, FromForm, ValidationErrors};
