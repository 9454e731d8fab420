pub mod app_state_builder;
pub mod db;
pub mod stubs;
