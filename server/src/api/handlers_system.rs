// server/src/api/handlers_system.rs
use log::warn;
use models::HealthStatus;
use store::GraphStore;

use super::reply::{ok, ApiReply};

/// A down store is reported in the body; the route itself always
/// succeeds so orchestrators can read the payload.
pub async fn health(store: GraphStore) -> ApiReply {
    if store.ping().await {
        ok(&HealthStatus::up())
    } else {
        warn!("Health check: graph store is unreachable");
        ok(&HealthStatus::down())
    }
}
