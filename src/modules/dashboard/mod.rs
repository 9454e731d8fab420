pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
    pub mod outgoing {
        pub mod dashboard_query_sqlite;
    }
}

pub mod application {
    pub mod domain {
        pub mod entities;
    }
    pub mod ports {
        pub mod incoming {
            pub mod get_dashboard;
        }
        pub mod outgoing {
            pub mod dashboard_query;
        }
    }
    pub mod services {
        pub mod get_dashboard_service;
    }
}

pub use application::domain::entities::DashboardStats;
