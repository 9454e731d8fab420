//! Composed public views: everything the home, about and projects pages
//! render, assembled from the per-record list use cases and memoised in the
//! view cache until a mutation invalidates them.

pub mod adapter {
    pub mod incoming {
        pub mod web {
            pub mod routes;
        }
    }
}

pub mod application {
    pub mod ports {
        pub mod incoming {
            pub mod site_views;
        }
    }
    pub mod services {
        pub mod site_views_service;
    }
}
