pub mod auth;
pub mod award;
pub mod content;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod message;
pub mod profile;
pub mod project;
pub mod site;
pub mod skill;
