// store/src/lib.rs
//! Graph-access layer. Wraps a single `neo4rs::Graph` connection and
//! issues parameterized Cypher for every operation the API exposes.
//! The store is constructed once at startup and cloned into request
//! handlers; it holds no mutable state of its own.

pub mod actors;
pub mod config;
pub mod movies;
pub mod relationships;
pub mod search;

use log::info;
use models::{ApiError, ApiResult};
use neo4rs::{query, Graph};

pub use config::StoreConfig;
pub use search::{relevance_rank, SearchKind};

/// Process-wide handle to the graph store. `neo4rs::Graph` is internally
/// pooled, so cloning is cheap.
#[derive(Clone)]
pub struct GraphStore {
    graph: Graph,
}

impl GraphStore {
    /// Connect using the given configuration. Fails fast when the store
    /// is unreachable at startup.
    pub async fn connect(config: &StoreConfig) -> ApiResult<Self> {
        let graph = Graph::new(&config.uri, &config.user, &config.password)
            .await
            .map_err(|e| ApiError::Store(format!("connection to {} failed: {}", config.uri, e)))?;
        info!("Connected to graph store at {}", config.uri);
        Ok(GraphStore { graph })
    }

    pub(crate) fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Trivial read used by the health check. Returns whether the store
    /// answered; a failure here is reported, not propagated.
    pub async fn ping(&self) -> bool {
        match self.graph.execute(query("RETURN 1 AS ok")).await {
            Ok(mut rows) => matches!(rows.next().await, Ok(Some(_))),
            Err(_) => false,
        }
    }
}
