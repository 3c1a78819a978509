// server/src/api/mod.rs

pub mod handlers_actors;
pub mod handlers_movies;
pub mod handlers_search;
pub mod handlers_system;
pub mod handlers_tmdb;
pub mod reply;
pub mod routes;

pub use routes::routes;
