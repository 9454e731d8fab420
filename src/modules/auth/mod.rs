pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod extractors {
                pub mod auth;
            }
            pub mod middleware {
                pub mod admin_gate;
            }
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod jwt {
            pub mod jwt_config;
            pub mod jwt_service;

            pub use jwt_config::JwtConfig;
            pub use jwt_service::JwtTokenService;
        }
        pub mod security {
            pub mod argon2_hasher;
        }
        pub mod token_blacklist_memory;
    }
}

pub mod application {
    pub mod domain {
        pub mod entities;
    }
    pub mod ports {
        pub mod outgoing {
            pub mod password_hasher;
            pub mod token_blacklist;
            pub mod token_provider;
        }
    }
    pub mod services {
        pub mod hash {
            pub mod token_hasher;
        }
    }
    pub mod use_cases {
        pub mod login_admin;
        pub mod logout_admin;
        pub mod resolve_session;
    }
}

pub use adapter::incoming::web::middleware::admin_gate::admin_gate;
pub use application::domain::entities::{AdminCredential, AuthState};
