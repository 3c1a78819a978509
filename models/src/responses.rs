// models/src/responses.rs
use serde::{Deserialize, Serialize};

/// Generic confirmation payload for mutations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// Health-check payload. A down store is reported in the body, never as
/// an HTTP error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub neo4j: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        HealthStatus {
            status: "healthy".to_string(),
            neo4j: "up".to_string(),
        }
    }

    pub fn down() -> Self {
        HealthStatus {
            status: "degraded".to_string(),
            neo4j: "down".to_string(),
        }
    }
}

/// Poster lookup payload for a movie title.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PosterResponse {
    pub poster_path: String,
}

/// Outcome of a bulk seed run. Per-name failures are tolerated and
/// reported here rather than aborting the run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeedSummary {
    pub requested: usize,
    pub seeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub failures: Vec<String>,
}
