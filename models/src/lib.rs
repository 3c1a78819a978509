// models/src/lib.rs

// Shared data shapes for the moviegraph workspace.
pub mod actors;
pub mod errors;
pub mod movies;
pub mod responses;

// Re-export the common types for convenience when other crates use `models::*`.
pub use actors::{Actor, ActorFilmography, ActorInMovie};
pub use errors::{ApiError, ApiResult};
pub use movies::{Movie, MovieCast};
pub use responses::{HealthStatus, MessageResponse, PosterResponse, SeedSummary};
