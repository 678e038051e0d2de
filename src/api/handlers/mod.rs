pub mod assistant;
pub mod auth;
pub mod sections;
pub mod users;
